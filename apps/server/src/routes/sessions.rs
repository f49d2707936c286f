//! Practice session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use lexiflow_core::GameSession;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn status(session: &GameSession) -> SessionStatusResponse {
    let (answered, total) = session.progress();
    SessionStatusResponse {
        session_id: session.id(),
        mode: session.mode(),
        score: session.score(),
        answered,
        total,
        question: session.current(),
    }
}

/// POST /api/sessions
pub async fn start(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<SessionStatusResponse>)> {
    if request.topic_ids.is_empty() {
        return Err(ApiError::BadRequest("select at least one topic".to_string()));
    }
    for topic_id in &request.topic_ids {
        state.library.topic(*topic_id)?;
    }

    let words = state.library.words_for_topics(&request.topic_ids)?;
    let settings = state.settings.effective(&request.topic_ids).await;

    let now = Utc::now();
    let session = {
        let mut rng = rand::thread_rng();
        GameSession::shuffled(
            request.topic_ids,
            words,
            request.mode,
            settings,
            now,
            &mut rng,
        )?
    };
    let response = status(&session);
    state.sessions.insert(session, now).await;

    tracing::info!(
        session_id = %response.session_id,
        words = response.total,
        mode = ?response.mode,
        "started session"
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionStatusResponse>> {
    let response = state
        .sessions
        .with_session(session_id, Utc::now(), |session| Ok(status(session)))
        .await?;
    Ok(Json(response))
}

/// POST /api/sessions/:id/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>> {
    let response = state
        .sessions
        .with_session(session_id, Utc::now(), |session| {
            let outcome = session.submit(&request.input, request.response_time_ms)?;
            Ok(SubmitAnswerResponse {
                outcome,
                score: session.score(),
                next: session.current(),
            })
        })
        .await?;

    let accepted = response.outcome.verdict.kind.is_accepted();
    if let Err(err) = state
        .library
        .record_word_result(response.outcome.word_id, accepted, Utc::now())
    {
        tracing::warn!(word_id = %response.outcome.word_id, error = %err, "could not record word result");
    }

    tracing::debug!(
        %session_id,
        kind = ?response.outcome.verdict.kind,
        distance = response.outcome.verdict.distance,
        "answer graded"
    );
    Ok(Json(response))
}

/// POST /api/sessions/:id/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<FinishSessionResponse>> {
    let now = Utc::now();
    let session = state.sessions.take(session_id, now).await?;
    let record = session.finish(now);
    state.library.save_game(record.clone())?;

    let accuracy = record.accuracy();
    tracing::info!(%session_id, score = record.score, accuracy, "finished session");
    Ok(Json(FinishSessionResponse { record, accuracy }))
}
