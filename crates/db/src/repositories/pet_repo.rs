//! Repository for the `pets` table.
//!
//! Every stat mutation is a read-modify-write cycle: `find_by_owner_for_update`
//! takes the row lock, the pure engine computes the new state, and
//! `save_state` writes the whole record back inside the same transaction.

use sqlx::{PgConnection, PgPool};

use cluckfit_core::pet::PetState;
use cluckfit_core::types::DbId;

use crate::models::leaderboard::LeaderboardEntry;
use crate::models::pet::Pet;

/// Column list for `pets` queries.
const COLUMNS: &str = "\
    id, owner_id, name, strength, stamina, mood, level, \
    breakthrough_completed, stage, daily_exercise_seconds, daily_steps, \
    quest_daily_checkin, quest_first_exercise, quest_exercise_goal, \
    last_daily_check_at, last_reset_at, created_at, updated_at";

/// Default page size for the leaderboard.
const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;

/// Maximum page size for the leaderboard.
const MAX_LEADERBOARD_LIMIT: i64 = 100;

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a freshly initialized pet for a user. Runs inside the
    /// caller's transaction (user creation is atomic with pet creation).
    pub async fn create_for_user(
        conn: &mut PgConnection,
        owner_id: &str,
        name: &str,
    ) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (owner_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .bind(name)
            .fetch_one(conn)
            .await
    }

    /// Find a pet by its owner's id.
    pub async fn find_by_owner(pool: &PgPool, owner_id: &str) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE owner_id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a pet by owner and take the row lock for a read-modify-write
    /// cycle. Serializes concurrent events for the same pet at the
    /// database, the engine itself being lock-free.
    pub async fn find_by_owner_for_update(
        conn: &mut PgConnection,
        owner_id: &str,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE owner_id = $1 FOR UPDATE");
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .fetch_optional(conn)
            .await
    }

    /// Write the full engine state back to the row.
    pub async fn save_state(
        conn: &mut PgConnection,
        id: DbId,
        state: &PetState,
    ) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                strength = $2,
                stamina = $3,
                mood = $4,
                level = $5,
                breakthrough_completed = $6,
                stage = $7,
                daily_exercise_seconds = $8,
                daily_steps = $9,
                quest_daily_checkin = $10,
                quest_first_exercise = $11,
                quest_exercise_goal = $12,
                last_daily_check_at = $13,
                last_reset_at = $14,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(state.strength)
            .bind(state.stamina)
            .bind(state.mood)
            .bind(state.level)
            .bind(state.breakthrough_completed)
            .bind(state.stage.id())
            .bind(state.daily_exercise_seconds)
            .bind(state.daily_steps)
            .bind(state.quests.daily_checkin.id())
            .bind(state.quests.first_exercise.id())
            .bind(state.quests.exercise_goal.id())
            .bind(state.last_daily_check_at)
            .bind(state.last_reset_at)
            .fetch_one(conn)
            .await
    }

    /// Rename a pet. Returns `None` if the owner has no pet.
    pub async fn rename(
        pool: &PgPool,
        owner_id: &str,
        name: &str,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET name = $2, updated_at = NOW() \
             WHERE owner_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(owner_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Top pets by level (strength as tiebreak), joined with their owner.
    pub async fn leaderboard_by_level(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let limit = limit
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
            .clamp(1, MAX_LEADERBOARD_LIMIT);
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT u.id AS owner_id, p.name AS pet_name, p.level, p.stage, p.strength \
             FROM pets p \
             JOIN users u ON u.id = p.owner_id \
             ORDER BY p.level DESC, p.strength DESC, p.id ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
