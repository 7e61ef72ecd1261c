//! Repository for the `exercise_logs` table.

use sqlx::{PgConnection, PgPool};

use cluckfit_core::exercise::SECS_PER_STRENGTH_POINT;
use cluckfit_core::types::{DbId, Timestamp};

use crate::models::exercise_log::{CreateExerciseLog, ExerciseLog};

/// Column list for `exercise_logs` queries.
const COLUMNS: &str = "id, user_id, pet_id, exercise_type, duration_seconds, steps, created_at";

/// Default page size for log listings.
const DEFAULT_LIMIT: i64 = 50;

/// Provides append and query operations for exercise logs.
pub struct ExerciseLogRepo;

impl ExerciseLogRepo {
    /// Append a log entry. Runs inside the caller's transaction so the
    /// audit row and the pet mutation commit or roll back together.
    pub async fn append(
        conn: &mut PgConnection,
        user_id: &str,
        pet_id: DbId,
        input: &CreateExerciseLog,
    ) -> Result<ExerciseLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercise_logs (user_id, pet_id, exercise_type, duration_seconds, steps) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExerciseLog>(&query)
            .bind(user_id)
            .bind(pet_id)
            .bind(&input.exercise_type)
            .bind(input.duration_seconds)
            .bind(input.steps)
            .fetch_one(conn)
            .await
    }

    /// Most recent log entries for a user.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<ExerciseLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exercise_logs \
             WHERE user_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, ExerciseLog>(&query)
            .bind(user_id)
            .bind(limit.unwrap_or(DEFAULT_LIMIT))
            .fetch_all(pool)
            .await
    }

    /// Sum of strength points earned from logs in `[from, to)`.
    ///
    /// The per-row floor division matches the engine's conversion rule, so
    /// this is exactly what the daily cycle expects as
    /// `total_strength_yesterday`.
    pub async fn strength_earned_between(
        conn: &mut PgConnection,
        user_id: &str,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<i32, sqlx::Error> {
        let (total,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(duration_seconds / $4), 0) \
             FROM exercise_logs \
             WHERE user_id = $1 AND created_at >= $2 AND created_at < $3",
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .bind(SECS_PER_STRENGTH_POINT)
        .fetch_one(conn)
        .await?;
        Ok(total.min(i32::MAX as i64) as i32)
    }
}
