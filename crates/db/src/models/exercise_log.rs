//! Exercise log entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cluckfit_core::types::{DbId, Timestamp};

/// A row from the `exercise_logs` table: the append-only audit trail of
/// logged sessions, written even when the engine blocks strength gain.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExerciseLog {
    pub id: DbId,
    pub user_id: String,
    pub pet_id: DbId,
    pub exercise_type: String,
    pub duration_seconds: i32,
    pub steps: i32,
    pub created_at: Timestamp,
}

/// DTO for `POST /users/{user_id}/exercise`.
#[derive(Debug, Deserialize)]
pub struct CreateExerciseLog {
    pub exercise_type: String,
    pub duration_seconds: i32,
    /// Step count for walking/running sessions; absent means zero.
    #[serde(default)]
    pub steps: i32,
}
