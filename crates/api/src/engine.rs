//! Bridging glue between HTTP handlers and the pure progression engine.
//!
//! Every mutating handler opens one transaction, locks the pet row, settles
//! the daily cycle, runs the relevant engine function, and writes the state
//! back; [`settle_daily_cycle`] is the shared first step of that sequence.

use chrono::Utc;
use sqlx::PgConnection;

use cluckfit_core::daily::{self, DailyCycleOutcome};
use cluckfit_core::error::CoreError;
use cluckfit_core::types::Timestamp;
use cluckfit_db::models::pet::Pet;
use cluckfit_db::repositories::{ExerciseLogRepo, PetRepo};

use crate::error::AppResult;

/// Current time, in one place so handlers agree on "now" within a request.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Load the pet row for `owner_id` with the row lock held, or fail with a
/// domain not-found error.
pub async fn lock_pet(conn: &mut PgConnection, owner_id: &str) -> AppResult<Pet> {
    PetRepo::find_by_owner_for_update(conn, owner_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Pet", owner_id).into())
}

/// Settle the daily cycle for the pet inside the caller's transaction.
///
/// Sums yesterday's exercise logs, runs the pure cycle, and persists the
/// result when the cycle actually fired. Idempotent per UTC date: on a
/// repeat call the row is returned untouched with `already_checked = true`.
pub async fn settle_daily_cycle(
    conn: &mut PgConnection,
    pet: Pet,
    now: Timestamp,
) -> AppResult<(Pet, DailyCycleOutcome)> {
    let state = pet.state()?;
    let (from, to) = daily::yesterday_window(now);
    let total = ExerciseLogRepo::strength_earned_between(&mut *conn, &pet.owner_id, from, to).await?;

    let outcome = daily::run_daily_cycle(state, now, total);
    let pet = if outcome.already_checked {
        pet
    } else {
        PetRepo::save_state(&mut *conn, pet.id, &outcome.pet).await?
    };
    Ok((pet, outcome))
}
