//! API request and response types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// Re-export shared types from lexiflow-core
pub use lexiflow_core::{
    AnswerOutcome, GameMode, GameRecord, GlobalSettings, Question, Topic, TopicSettings,
    Verdict, Word,
};

// Grading types
#[derive(Debug, Serialize, Deserialize)]
pub struct GradeRequest {
    pub input: String,
    pub correct: String,
    #[serde(default)]
    pub alternates: Vec<String>,
    /// Apply this topic's grading overrides.
    pub topic_id: Option<Uuid>,
}

// Topic types
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTopicRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicListResponse {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTopicResponse {
    pub deleted_words: usize,
}

// Word types
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWordRequest {
    pub term: String,
    pub translation: String,
    #[serde(default)]
    pub alternates: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResponse {
    pub words: Vec<Word>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportRequest {
    pub content: String,
}

// Settings types
#[derive(Debug, Serialize, Deserialize)]
pub struct AllSettingsResponse {
    pub global: GlobalSettings,
    pub topics: HashMap<Uuid, TopicSettings>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateGlobalSettingsRequest {
    pub max_typo_distance: Option<usize>,
    pub min_typo_length: Option<usize>,
    pub points_per_answer: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTopicSettingsRequest {
    pub max_typo_distance: Option<usize>,
    pub min_typo_length: Option<usize>,
    pub points_per_answer: Option<u32>,
}

// Session types
#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub topic_ids: Vec<Uuid>,
    #[serde(default)]
    pub mode: GameMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    pub session_id: Uuid,
    pub mode: GameMode,
    pub score: u32,
    pub answered: usize,
    pub total: usize,
    pub question: Option<Question>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub input: String,
    #[serde(default)]
    pub response_time_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub outcome: AnswerOutcome,
    pub score: u32,
    pub next: Option<Question>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinishSessionResponse {
    pub record: GameRecord,
    pub accuracy: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameListResponse {
    pub games: Vec<GameRecord>,
}
