//! Word endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lexiflow_core::parse_word_list;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/topics/:id/words
pub async fn list(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
) -> Result<Json<WordListResponse>> {
    state.library.topic(topic_id)?;
    let words = state.library.words(topic_id)?;
    Ok(Json(WordListResponse { words }))
}

/// POST /api/topics/:id/words
pub async fn create(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
    Json(request): Json<CreateWordRequest>,
) -> Result<(StatusCode, Json<Word>)> {
    let word = Word::new(
        topic_id,
        request.term,
        request.translation,
        request.alternates,
    )?;
    let word = state.library.add_word(word)?;
    tracing::info!(word_id = %word.id, %topic_id, "created word");
    Ok((StatusCode::CREATED, Json(word)))
}

/// DELETE /api/words/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(word_id): Path<Uuid>,
) -> Result<StatusCode> {
    state.library.delete_word(word_id)?;
    tracing::info!(%word_id, "deleted word");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/topics/:id/import
pub async fn import(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
    Json(request): Json<ImportRequest>,
) -> Result<(StatusCode, Json<WordListResponse>)> {
    let parsed = parse_word_list(&request.content)?;
    let words = state.library.import_words(topic_id, &parsed)?;
    tracing::info!(%topic_id, count = words.len(), "imported words");
    Ok((StatusCode::CREATED, Json(WordListResponse { words })))
}
