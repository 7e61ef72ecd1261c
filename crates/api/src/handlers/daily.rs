//! Handler for the explicit daily check.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use cluckfit_db::models::pet::Pet;

use crate::engine;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for a daily check run.
#[derive(Debug, Serialize)]
pub struct DailyCheckResponse {
    pub pet: Pet,
    /// True when the cycle had already run today; nothing changed.
    pub already_checked: bool,
    /// Whether yesterday's exercise met the daily target.
    pub met_requirement: bool,
    pub total_strength_yesterday: i32,
}

/// POST /users/{user_id}/daily-check
///
/// Run the daily cycle for the pet. Idempotent per UTC calendar date:
/// clients may call this on every launch without double-charging the
/// missed-day penalty.
pub async fn daily_check(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let pet = engine::lock_pet(&mut *tx, &user_id).await?;
    let (pet, outcome) = engine::settle_daily_cycle(&mut *tx, pet, engine::now()).await?;
    tx.commit().await?;

    Ok(Json(DataResponse {
        data: DailyCheckResponse {
            pet,
            already_checked: outcome.already_checked,
            met_requirement: outcome.met_requirement,
            total_strength_yesterday: outcome.total_strength_yesterday,
        },
    }))
}
