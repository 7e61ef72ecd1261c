//! Handler for the level leaderboard.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use cluckfit_db::repositories::PetRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /leaderboard/level`.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Maximum number of entries. Defaults to 10, capped at 100.
    pub limit: Option<i64>,
}

/// GET /leaderboard/level
pub async fn by_level(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<impl IntoResponse> {
    let entries = PetRepo::leaderboard_by_level(&state.pool, query.limit).await?;
    Ok(Json(DataResponse { data: entries }))
}
