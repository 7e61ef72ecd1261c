//! Handler for exercise ingestion.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use cluckfit_core::exercise;
use cluckfit_db::models::exercise_log::{CreateExerciseLog, ExerciseLog};
use cluckfit_db::models::pet::Pet;
use cluckfit_db::repositories::{ExerciseLogRepo, PetRepo};

use crate::engine;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for a logged session.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub pet: Pet,
    /// True when the strength gain was discarded at an uncleared milestone.
    pub breakthrough_required: bool,
    /// Strength points the session was worth before any blocking.
    pub strength_earned: i32,
    pub log: ExerciseLog,
}

/// POST /users/{user_id}/exercise
///
/// Log an exercise session: append the audit row, feed the duration and
/// steps through the progression engine, and persist the new pet state —
/// all in one transaction. The audit row is written even when the engine
/// blocks strength gain at a milestone.
pub async fn log_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<CreateExerciseLog>,
) -> AppResult<impl IntoResponse> {
    if body.exercise_type.trim().is_empty() {
        return Err(AppError::BadRequest("exercise_type must not be empty".into()));
    }

    let mut tx = state.pool.begin().await?;
    let pet = engine::lock_pet(&mut *tx, &user_id).await?;
    let (pet, settled) = engine::settle_daily_cycle(&mut *tx, pet, engine::now()).await?;

    let log = ExerciseLogRepo::append(&mut *tx, &user_id, pet.id, &body).await?;

    let outcome = exercise::ingest_exercise(settled.pet, body.duration_seconds, body.steps)?;
    let pet = PetRepo::save_state(&mut *tx, pet.id, &outcome.pet).await?;
    tx.commit().await?;

    tracing::debug!(
        %user_id,
        duration = body.duration_seconds,
        strength_earned = outcome.strength_earned,
        blocked = outcome.breakthrough_required,
        "Logged exercise session"
    );

    Ok(Json(DataResponse {
        data: ExerciseResponse {
            pet,
            breakthrough_required: outcome.breakthrough_required,
            strength_earned: outcome.strength_earned,
            log,
        },
    }))
}
