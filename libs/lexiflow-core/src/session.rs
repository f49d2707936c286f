//! Practice session state machine.
//!
//! A session walks an ordered list of words. Each submission is graded
//! against the current word, recorded, scored and then the session moves on.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;
use crate::grading::{grade_with_policy, Verdict};
use crate::types::{Direction, EffectiveSettings, GameMode, GameRecord, SessionAnswer, Word};

/// The question currently shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub word_id: Uuid,
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub direction: Direction,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub word_id: Uuid,
    pub verdict: Verdict,
    /// Canonical answer, for feedback.
    pub expected: String,
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    topic_ids: Vec<Uuid>,
    mode: GameMode,
    settings: EffectiveSettings,
    words: Vec<Word>,
    position: usize,
    score: u32,
    answers: Vec<SessionAnswer>,
    started_at: DateTime<Utc>,
}

impl GameSession {
    /// Start a session over `words` in the given order.
    pub fn new(
        topic_ids: Vec<Uuid>,
        words: Vec<Word>,
        mode: GameMode,
        settings: EffectiveSettings,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if words.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            topic_ids,
            mode,
            settings,
            words,
            position: 0,
            score: 0,
            answers: Vec::new(),
            started_at: now,
        })
    }

    /// Start a session over `words` in random order.
    pub fn shuffled<R: Rng + ?Sized>(
        topic_ids: Vec<Uuid>,
        mut words: Vec<Word>,
        mode: GameMode,
        settings: EffectiveSettings,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        words.shuffle(rng);
        Self::new(topic_ids, words, mode, settings, now)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answers(&self) -> &[SessionAnswer] {
        &self.answers
    }

    /// Number of answered words and total words.
    pub fn progress(&self) -> (usize, usize) {
        (self.position, self.words.len())
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.words.len()
    }

    /// Counts of (accepted, rejected) answers so far. Typos count as accepted.
    pub fn results(&self) -> (usize, usize) {
        let accepted = self.answers.iter().filter(|a| a.kind.is_accepted()).count();
        (accepted, self.answers.len() - accepted)
    }

    pub fn current(&self) -> Option<Question> {
        let word = self.words.get(self.position)?;
        let direction = Direction::resolve(self.mode, word, self.position);
        Some(Question {
            word_id: word.id,
            index: self.position,
            total: self.words.len(),
            prompt: word.prompt(direction).to_string(),
            direction,
        })
    }

    /// Grade `input` against the current word and advance.
    pub fn submit(&mut self, input: &str, response_time_ms: u64) -> Result<AnswerOutcome, SessionError> {
        let word = self.words.get(self.position).ok_or(SessionError::Finished)?;
        let direction = Direction::resolve(self.mode, word, self.position);
        let expected = word.expected(direction);

        let verdict = grade_with_policy(
            input,
            expected,
            word.accepted_alternates(direction),
            &self.settings.policy(),
        );

        let points = if verdict.kind.is_accepted() {
            self.settings.points_per_answer
        } else {
            0
        };

        let outcome = AnswerOutcome {
            word_id: word.id,
            expected: expected.to_string(),
            verdict,
            points,
        };

        self.answers.push(SessionAnswer {
            word_id: outcome.word_id,
            user_answer: input.to_string(),
            kind: outcome.verdict.kind,
            distance: outcome.verdict.distance,
            response_time_ms,
        });
        self.score += points;
        self.position += 1;

        Ok(outcome)
    }

    /// Summarize the session for the game history.
    pub fn finish(&self, now: DateTime<Utc>) -> GameRecord {
        let elapsed = (now - self.started_at).num_seconds().max(0) as u64;
        GameRecord {
            id: self.id,
            played_at: now,
            topic_ids: self.topic_ids.clone(),
            mode: self.mode,
            score: self.score,
            total_time_secs: elapsed,
            answers: self.answers.clone(),
        }
    }
}
