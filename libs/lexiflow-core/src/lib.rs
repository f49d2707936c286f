//! Core vocabulary trainer library shared by the server and any other front end.
//!
//! Provides:
//! - Answer grading with typo tolerance (normalization + Levenshtein distance)
//! - Shared types (Topic, Word, GameRecord, settings)
//! - Practice session state machine
//! - Plain-text word list import
//! - Storage abstraction with an in-memory implementation

pub mod error;
pub mod grading;
pub mod import;
pub mod session;
pub mod store;
pub mod types;

pub use error::{ImportError, SessionError, StoreError, ValidationError};
pub use grading::{
    grade, grade_with_policy, levenshtein_distance, normalize, GradingPolicy, MatchedCandidate,
    Verdict, VerdictKind,
};
pub use import::{parse_word_list, ParsedWord};
pub use session::{AnswerOutcome, GameSession, Question};
pub use store::{Entity, Library, MemoryRepository, Repository};
pub use types::{
    Direction, EffectiveSettings, GameMode, GameRecord, GlobalSettings, SessionAnswer, Topic,
    TopicSettings, Word,
};
