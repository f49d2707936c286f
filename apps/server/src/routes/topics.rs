//! Topic endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/topics
pub async fn list(State(state): State<AppState>) -> Result<Json<TopicListResponse>> {
    let topics = state.library.topics()?;
    Ok(Json(TopicListResponse { topics }))
}

/// POST /api/topics
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateTopicRequest>,
) -> Result<(StatusCode, Json<Topic>)> {
    let topic = state.library.add_topic(&request.name, Utc::now())?;
    tracing::info!(topic_id = %topic.id, name = %topic.name, "created topic");
    Ok((StatusCode::CREATED, Json(topic)))
}

/// DELETE /api/topics/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
) -> Result<Json<DeleteTopicResponse>> {
    let deleted_words = state.library.delete_topic(topic_id)?;
    state.settings.remove_topic(topic_id).await;
    tracing::info!(%topic_id, deleted_words, "deleted topic");
    Ok(Json(DeleteTopicResponse { deleted_words }))
}
