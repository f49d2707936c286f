//! Game history endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/games
pub async fn list(State(state): State<AppState>) -> Result<Json<GameListResponse>> {
    let games = state.library.games()?;
    Ok(Json(GameListResponse { games }))
}
