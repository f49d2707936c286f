//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};
use uuid::Uuid;

/// Generate a word list with `count` lines of `termN = traduccionN`.
pub fn sample_word_list(count: usize) -> String {
    (0..count)
        .map(|i| format!("term{} = traduccion{}", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a grade request body.
pub fn grade_request(input: &str, correct: &str, alternates: &[&str]) -> Value {
    json!({
        "input": input,
        "correct": correct,
        "alternates": alternates,
    })
}

/// Create a word request body.
pub fn word_request(term: &str, translation: &str, alternates: &[&str]) -> Value {
    json!({
        "term": term,
        "translation": translation,
        "alternates": alternates,
    })
}

/// Create a start-session request body.
pub fn start_session_request(topic_ids: &[Uuid], mode: &str) -> Value {
    json!({
        "topic_ids": topic_ids,
        "mode": mode,
    })
}

/// Create an answer request body.
pub fn answer_request(input: &str) -> Value {
    json!({
        "input": input,
        "response_time_ms": 1500,
    })
}
