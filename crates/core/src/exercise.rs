//! Exercise ingestion rules: converting a logged session into stat deltas.

use crate::error::CoreError;
use crate::pet::PetState;
use crate::progression::{apply_delta, ProgressionOutcome, StatDelta};
use crate::quest::QuestSlot;

// ---------------------------------------------------------------------------
// Conversion constants
// ---------------------------------------------------------------------------

/// Seconds of exercise per strength point (floor division, remainder lost).
pub const SECS_PER_STRENGTH_POINT: i32 = 10;

/// Flat stamina cost of any session, however short.
pub const EXERCISE_STAMINA_COST: i32 = -10;

/// Flat mood gain of any session.
pub const EXERCISE_MOOD_GAIN: i32 = 5;

/// Strength points that must be earned in a day to avoid the daily
/// penalty (60 points = 10 minutes).
pub const MIN_DAILY_STRENGTH: i32 = 60;

/// Daily exercise-time goal in seconds for the third quest slot.
pub const DAILY_EXERCISE_GOAL_SECS: i32 = 600;

/// Strength points earned from a session duration. Fractional points are
/// discarded, not rounded: 603 seconds is exactly 60 points.
pub fn strength_from_duration(duration_seconds: i32) -> i32 {
    duration_seconds / SECS_PER_STRENGTH_POINT
}

/// Result of ingesting one exercise session.
#[derive(Debug, Clone)]
pub struct ExerciseOutcome {
    pub pet: PetState,
    pub breakthrough_required: bool,
    /// Strength points the session was worth before any gate blocking.
    pub strength_earned: i32,
}

/// Ingest an exercise session.
///
/// Daily counters and quest triggers always advance, even when the
/// progression engine then discards the strength gain at a closed gate.
/// There is no minimum duration: a one-second session still costs stamina
/// and grants mood.
pub fn ingest_exercise(
    mut pet: PetState,
    duration_seconds: i32,
    steps: i32,
) -> Result<ExerciseOutcome, CoreError> {
    if duration_seconds < 0 {
        return Err(CoreError::Validation(
            "duration_seconds must be non-negative".to_string(),
        ));
    }
    if steps < 0 {
        return Err(CoreError::Validation(
            "steps must be non-negative".to_string(),
        ));
    }

    pet.daily_exercise_seconds += duration_seconds;
    pet.daily_steps += steps;

    pet.quests.mark_claimable(QuestSlot::FirstExercise);
    if pet.daily_exercise_seconds >= DAILY_EXERCISE_GOAL_SECS {
        pet.quests.mark_claimable(QuestSlot::ExerciseGoal);
    }

    let strength_earned = strength_from_duration(duration_seconds);
    let delta = StatDelta::new(strength_earned, EXERCISE_STAMINA_COST, EXERCISE_MOOD_GAIN);
    let ProgressionOutcome {
        pet,
        breakthrough_required,
    } = apply_delta(pet, delta);

    Ok(ExerciseOutcome {
        pet,
        breakthrough_required,
        strength_earned,
    })
}
