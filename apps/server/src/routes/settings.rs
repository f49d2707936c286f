//! Settings endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/settings
pub async fn get_all(State(state): State<AppState>) -> Result<Json<AllSettingsResponse>> {
    Ok(Json(AllSettingsResponse {
        global: state.settings.global().await,
        topics: state.settings.all_topics().await,
    }))
}

/// PUT /api/settings/global
pub async fn update_global(
    State(state): State<AppState>,
    Json(request): Json<UpdateGlobalSettingsRequest>,
) -> Result<Json<GlobalSettings>> {
    // Get current settings
    let mut current = state.settings.global().await;

    // Apply updates
    if let Some(max_typo_distance) = request.max_typo_distance {
        current.max_typo_distance = max_typo_distance;
    }
    if let Some(min_typo_length) = request.min_typo_length {
        current.min_typo_length = min_typo_length;
    }
    if let Some(points_per_answer) = request.points_per_answer {
        current.points_per_answer = points_per_answer;
    }

    state.settings.set_global(current.clone()).await;
    tracing::info!(?current, "updated global settings");

    Ok(Json(current))
}

/// PUT /api/settings/topic/:id
pub async fn update_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
    Json(request): Json<UpdateTopicSettingsRequest>,
) -> Result<Json<TopicSettings>> {
    state.library.topic(topic_id)?;

    // None values clear the override
    let settings = TopicSettings {
        topic_id,
        max_typo_distance: request.max_typo_distance,
        min_typo_length: request.min_typo_length,
        points_per_answer: request.points_per_answer,
    };

    state.settings.set_topic(settings.clone()).await;
    tracing::info!(%topic_id, "updated topic settings");

    Ok(Json(settings))
}

/// DELETE /api/settings/topic/:id
pub async fn delete_topic(
    State(state): State<AppState>,
    Path(topic_id): Path<Uuid>,
) -> Result<StatusCode> {
    if state.settings.remove_topic(topic_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "no settings for topic {}",
            topic_id
        )))
    }
}
