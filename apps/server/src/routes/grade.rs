//! Grading endpoint

use axum::{extract::State, Json};
use lexiflow_core::grade_with_policy;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/grade
pub async fn grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<Verdict>> {
    if request.correct.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "correct answer must not be empty".to_string(),
        ));
    }

    let topic_ids: Vec<_> = request.topic_id.into_iter().collect();
    let settings = state.settings.effective(&topic_ids).await;

    let verdict = grade_with_policy(
        &request.input,
        &request.correct,
        &request.alternates,
        &settings.policy(),
    );
    tracing::debug!(kind = ?verdict.kind, distance = verdict.distance, "graded answer");

    Ok(Json(verdict))
}
