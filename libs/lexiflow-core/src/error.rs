//! Error types for lexiflow-core.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised when a topic or word violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("topic name is empty")]
    EmptyTopicName,

    #[error("word term is empty")]
    EmptyTerm,

    #[error("word translation is empty")]
    EmptyTranslation,

    #[error("alternate answer {index} is empty")]
    EmptyAlternate { index: usize },
}

/// Errors that can occur while parsing a plain-text word list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("missing term or translation at line {line}")]
    EmptyField { line: usize },

    #[error("no words found")]
    NoWords,
}

/// Errors returned by repositories and the library facade.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("store lock poisoned")]
    Poisoned,

    #[error("invalid data: {0}")]
    Invalid(#[from] ValidationError),
}

/// Errors raised by a practice session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session has no words")]
    Empty,

    #[error("session is already finished")]
    Finished,
}
