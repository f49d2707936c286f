//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::grading::{GradingPolicy, VerdictKind};

/// A named group of words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    /// Create a topic with a fresh ID.
    pub fn new(name: &str, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyTopicName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: now,
        })
    }
}

/// A vocabulary entry: an English term, its Spanish translation and any
/// other accepted spellings of the translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub term: String,
    pub translation: String,
    #[serde(default)]
    pub alternates: Vec<String>,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub misses: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Word {
    /// Create a validated word with a fresh ID and zeroed counters.
    pub fn new(
        topic_id: Uuid,
        term: impl Into<String>,
        translation: impl Into<String>,
        alternates: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let word = Self {
            id: Uuid::new_v4(),
            topic_id,
            term: term.into(),
            translation: translation.into(),
            alternates,
            hits: 0,
            misses: 0,
            last_reviewed: None,
        };
        word.validate()?;
        Ok(word)
    }

    /// Check that the term, translation and every alternate are non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.term.trim().is_empty() {
            return Err(ValidationError::EmptyTerm);
        }
        if self.translation.trim().is_empty() {
            return Err(ValidationError::EmptyTranslation);
        }
        if let Some(index) = self.alternates.iter().position(|a| a.trim().is_empty()) {
            return Err(ValidationError::EmptyAlternate { index });
        }
        Ok(())
    }

    /// Text shown to the user for the given direction.
    pub fn prompt(&self, direction: Direction) -> &str {
        match direction {
            Direction::EsEn => self.translation.as_str(),
            Direction::EnEs => self.term.as_str(),
        }
    }

    /// Canonical answer expected for the given direction.
    pub fn expected(&self, direction: Direction) -> &str {
        match direction {
            Direction::EsEn => self.term.as_str(),
            Direction::EnEs => self.translation.as_str(),
        }
    }

    /// Alternates only apply when the translation is the expected answer.
    ///
    /// This intentionally narrows the older behavior of accepting alternates
    /// in every direction: alternates are Spanish spellings, so an `es-en`
    /// question accepts only the English term.
    pub fn accepted_alternates(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::EsEn => &[],
            Direction::EnEs => self.alternates.as_slice(),
        }
    }

    /// Update hit/miss counters after an answer.
    pub fn record_result(&mut self, correct: bool, now: DateTime<Utc>) {
        if correct {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.last_reviewed = Some(now);
    }
}

/// Practice mode chosen when starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Prompt in Spanish, answer in English.
    #[serde(rename = "es-en")]
    EsEn,
    /// Prompt in English, answer in Spanish.
    #[serde(rename = "en-es")]
    EnEs,
    #[serde(rename = "mixed")]
    Mixed,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Mixed
    }
}

/// Direction of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "es-en")]
    EsEn,
    #[serde(rename = "en-es")]
    EnEs,
}

impl Direction {
    /// Resolve the direction for the word at `index` in a session.
    ///
    /// Mixed mode alternates deterministically on the combined length of
    /// both sides plus the position.
    pub fn resolve(mode: GameMode, word: &Word, index: usize) -> Self {
        match mode {
            GameMode::EsEn => Self::EsEn,
            GameMode::EnEs => Self::EnEs,
            GameMode::Mixed => {
                let weight = word.term.chars().count() + word.translation.chars().count() + index;
                if weight % 2 == 0 {
                    Self::EsEn
                } else {
                    Self::EnEs
                }
            }
        }
    }
}

/// One graded answer inside a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAnswer {
    pub word_id: Uuid,
    pub user_answer: String,
    pub kind: VerdictKind,
    pub distance: usize,
    pub response_time_ms: u64,
}

impl SessionAnswer {
    pub fn correct(&self) -> bool {
        self.kind == VerdictKind::Correct
    }

    pub fn almost(&self) -> bool {
        self.kind == VerdictKind::Almost
    }
}

/// Summary of a finished practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    pub played_at: DateTime<Utc>,
    pub topic_ids: Vec<Uuid>,
    pub mode: GameMode,
    pub score: u32,
    pub total_time_secs: u64,
    pub answers: Vec<SessionAnswer>,
}

impl GameRecord {
    /// Share of accepted answers as a rounded percentage.
    pub fn accuracy(&self) -> u32 {
        if self.answers.is_empty() {
            return 0;
        }
        let accepted = self.answers.iter().filter(|a| a.kind.is_accepted()).count();
        ((accepted as f64 / self.answers.len() as f64) * 100.0).round() as u32
    }
}

/// Global settings configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub max_typo_distance: usize,
    pub min_typo_length: usize,
    pub points_per_answer: u32,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        let policy = GradingPolicy::default();
        Self {
            max_typo_distance: policy.max_typo_distance,
            min_typo_length: policy.min_typo_length,
            points_per_answer: 10,
        }
    }
}

/// Per-topic settings (all fields optional for overrides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSettings {
    pub topic_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_typo_distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_typo_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_per_answer: Option<u32>,
}

impl TopicSettings {
    /// Create topic settings with no overrides.
    pub fn new(topic_id: Uuid) -> Self {
        Self {
            topic_id,
            max_typo_distance: None,
            min_typo_length: None,
            points_per_answer: None,
        }
    }
}

/// Effective settings (global merged with topic overrides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub max_typo_distance: usize,
    pub min_typo_length: usize,
    pub points_per_answer: u32,
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        Self::merge(&GlobalSettings::default(), None)
    }
}

impl EffectiveSettings {
    /// Merge global settings with optional topic settings.
    pub fn merge(global: &GlobalSettings, topic: Option<&TopicSettings>) -> Self {
        match topic {
            Some(t) => Self {
                max_typo_distance: t.max_typo_distance.unwrap_or(global.max_typo_distance),
                min_typo_length: t.min_typo_length.unwrap_or(global.min_typo_length),
                points_per_answer: t.points_per_answer.unwrap_or(global.points_per_answer),
            },
            None => Self {
                max_typo_distance: global.max_typo_distance,
                min_typo_length: global.min_typo_length,
                points_per_answer: global.points_per_answer,
            },
        }
    }

    pub fn policy(&self) -> GradingPolicy {
        GradingPolicy {
            max_typo_distance: self.max_typo_distance,
            min_typo_length: self.min_typo_length,
        }
    }
}
