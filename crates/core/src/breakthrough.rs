//! The breakthrough gate: clearing a milestone via a travel check-in or an
//! explicit action.

use crate::error::CoreError;
use crate::pet::PetState;
use crate::progression::StatDelta;
use crate::stage::resolve_stage;
use crate::stats::is_milestone;

/// Fixed bonus a travel check-in feeds through the progression engine
/// after the gate (if any) has been applied.
pub const CHECKIN_REWARD: StatDelta = StatDelta::new(20, 20, 10);

/// Check that the pet sits at a milestone whose gate is still open.
///
/// Used both before committing a breakthrough and by the travel-start
/// flow, which hands out a destination only when there is a gate to clear.
pub fn ensure_at_open_gate(pet: &PetState) -> Result<(), CoreError> {
    if !is_milestone(pet.level) {
        return Err(CoreError::Validation(
            "pet is not at a breakthrough level (5, 10, 15, 20)".to_string(),
        ));
    }
    if pet.breakthrough_completed {
        return Err(CoreError::Conflict(
            "breakthrough already completed for this level".to_string(),
        ));
    }
    Ok(())
}

/// Commit a breakthrough: clear the gate and advance the cached stage.
///
/// Business failures come back as result variants, never panics; the
/// caller maps them to user-visible rejections.
pub fn complete_breakthrough(mut pet: PetState) -> Result<PetState, CoreError> {
    ensure_at_open_gate(&pet)?;
    pet.breakthrough_completed = true;
    pet.stage = resolve_stage(pet.level, pet.breakthrough_completed);
    Ok(pet)
}
