//! The progression engine: stat deltas, level-ups, and milestone gating.
//!
//! `apply_delta` is the single write path for strength/stamina/mood. Every
//! caller (exercise ingestion, quest rewards, travel bonuses) funnels its
//! stat changes through here so the level-up and breakthrough rules cannot
//! be bypassed.

use serde::Serialize;

use crate::pet::PetState;
use crate::stage::resolve_stage;
use crate::stats::{
    clamp_mood, clamp_stamina, is_milestone, LEVEL_UP_MOOD_BONUS, MAX_LEVEL, STAMINA_MAX,
    STRENGTH_PER_LEVEL,
};

/// A strength/stamina/mood change to apply in one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatDelta {
    pub strength: i32,
    pub stamina: i32,
    pub mood: i32,
}

impl StatDelta {
    pub const fn new(strength: i32, stamina: i32, mood: i32) -> Self {
        Self {
            strength,
            stamina,
            mood,
        }
    }
}

/// Result of one engine call.
#[derive(Debug, Clone)]
pub struct ProgressionOutcome {
    pub pet: PetState,
    /// True when a positive strength delta was fully discarded because the
    /// pet sits at an uncleared milestone.
    pub breakthrough_required: bool,
}

/// Whether the pet is blocked at an uncleared milestone level.
pub fn needs_breakthrough(level: i32, breakthrough_completed: bool) -> bool {
    is_milestone(level) && !breakthrough_completed
}

/// Apply a stat delta, resolving level-ups and milestone gating.
///
/// Rules, in order:
///
/// 1. At an uncleared milestone a positive strength delta is discarded
///    whole (no partial credit); stamina/mood still apply, and the caller
///    is told a breakthrough is required.
/// 2. Otherwise strength accumulates, and each full [`STRENGTH_PER_LEVEL`]
///    converts into a level while below [`MAX_LEVEL`]. Each level-up
///    restores stamina to max and banks a mood bonus, clamped only once at
///    the end so multi-level calls accumulate the full bonus.
/// 3. Landing on a milestone re-arms the gate and stops the loop: one call
///    never crosses two milestones, however large the delta.
/// 4. Leftover strength at a freshly gated milestone is forfeited; points
///    cannot be banked across a closed gate.
///
/// The level never decreases. Negative strength deltas floor at zero and
/// never interact with the level-up loop.
pub fn apply_delta(mut pet: PetState, delta: StatDelta) -> ProgressionOutcome {
    if needs_breakthrough(pet.level, pet.breakthrough_completed) && delta.strength > 0 {
        pet.stamina = clamp_stamina(pet.stamina + delta.stamina);
        pet.mood = clamp_mood(pet.mood + delta.mood);
        pet.stage = resolve_stage(pet.level, pet.breakthrough_completed);
        return ProgressionOutcome {
            pet,
            breakthrough_required: true,
        };
    }

    pet.strength = (pet.strength + delta.strength).max(0);

    // Mood accumulates unclamped across level-ups; the single clamp below
    // is the only one.
    let mut mood = pet.mood;
    while pet.strength >= STRENGTH_PER_LEVEL && pet.level < MAX_LEVEL {
        pet.strength -= STRENGTH_PER_LEVEL;
        pet.level += 1;
        pet.stamina = STAMINA_MAX;
        mood += LEVEL_UP_MOOD_BONUS;
        if is_milestone(pet.level) {
            pet.breakthrough_completed = false;
            break;
        }
    }

    if needs_breakthrough(pet.level, pet.breakthrough_completed) {
        pet.strength = 0;
    }

    pet.stamina = clamp_stamina(pet.stamina + delta.stamina);
    pet.mood = clamp_mood(mood + delta.mood);
    pet.stage = resolve_stage(pet.level, pet.breakthrough_completed);

    ProgressionOutcome {
        pet,
        breakthrough_required: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::PetStage;

    fn pet_at(level: i32, strength: i32) -> PetState {
        let mut pet = PetState::initial();
        pet.level = level;
        pet.strength = strength;
        pet.breakthrough_completed = !is_milestone(level);
        pet.stage = resolve_stage(pet.level, pet.breakthrough_completed);
        pet
    }

    // -----------------------------------------------------------------------
    // Plain accumulation
    // -----------------------------------------------------------------------

    #[test]
    fn strength_below_threshold_does_not_level() {
        let out = apply_delta(pet_at(1, 0), StatDelta::new(119, 0, 0));
        assert_eq!(out.pet.strength, 119);
        assert_eq!(out.pet.level, 1);
        assert!(!out.breakthrough_required);
    }

    #[test]
    fn exact_threshold_levels_once() {
        let out = apply_delta(pet_at(1, 0), StatDelta::new(120, 0, 0));
        assert_eq!(out.pet.level, 2);
        assert_eq!(out.pet.strength, 0);
        assert_eq!(out.pet.stamina, STAMINA_MAX);
    }

    #[test]
    fn residual_strength_carries_over_after_level_up() {
        let out = apply_delta(pet_at(1, 100), StatDelta::new(50, 0, 0));
        assert_eq!(out.pet.level, 2);
        assert_eq!(out.pet.strength, 30);
    }

    #[test]
    fn multi_level_in_one_call_without_milestone() {
        // 2 -> 4 on 240 points, well clear of any milestone.
        let out = apply_delta(pet_at(2, 0), StatDelta::new(240, 0, 0));
        assert_eq!(out.pet.level, 4);
        assert_eq!(out.pet.strength, 0);
    }

    #[test]
    fn level_up_mood_bonus_accumulates_before_final_clamp() {
        let mut pet = pet_at(2, 0);
        pet.mood = 85;
        // Two level-ups bank +20 mood; with a +5 delta the pre-clamp total
        // is 110, clamped once to 100.
        let out = apply_delta(pet, StatDelta::new(240, 0, 5));
        assert_eq!(out.pet.level, 4);
        assert_eq!(out.pet.mood, 100);
    }

    #[test]
    fn stamina_delta_applies_after_level_up_reset() {
        let mut pet = pet_at(1, 110);
        pet.stamina = 40;
        let out = apply_delta(pet, StatDelta::new(10, -10, 0));
        assert_eq!(out.pet.level, 2);
        assert_eq!(out.pet.stamina, STAMINA_MAX - 10);
    }

    // -----------------------------------------------------------------------
    // Milestone gating
    // -----------------------------------------------------------------------

    #[test]
    fn reaching_level_five_opens_the_gate() {
        let out = apply_delta(pet_at(4, 0), StatDelta::new(120, 0, 0));
        assert_eq!(out.pet.level, 5);
        assert_eq!(out.pet.strength, 0);
        assert_eq!(out.pet.stamina, STAMINA_MAX);
        assert!(!out.pet.breakthrough_completed);
        assert_eq!(out.pet.stage, PetStage::Egg);
        // The call that crossed the milestone itself is not "blocked".
        assert!(!out.breakthrough_required);
    }

    #[test]
    fn positive_strength_at_open_gate_is_fully_blocked() {
        let gated = apply_delta(pet_at(4, 0), StatDelta::new(120, 0, 0)).pet;
        assert_eq!(gated.mood, 10, "level-up banked its mood bonus");

        let out = apply_delta(gated, StatDelta::new(60, -10, 5));
        assert!(out.breakthrough_required);
        assert_eq!(out.pet.strength, 0);
        assert_eq!(out.pet.level, 5);
        // Stamina and mood still move.
        assert_eq!(out.pet.stamina, STAMINA_MAX - 10);
        assert_eq!(out.pet.mood, 15);
    }

    #[test]
    fn one_call_never_crosses_two_milestones() {
        // From level 4 with enough points for many levels: stop at 5.
        let out = apply_delta(pet_at(4, 0), StatDelta::new(120 * 7, 0, 0));
        assert_eq!(out.pet.level, 5);
        assert!(!out.pet.breakthrough_completed);
        // Excess points are forfeited at the closed gate.
        assert_eq!(out.pet.strength, 0);
    }

    #[test]
    fn cleared_gate_allows_leveling_past_milestone() {
        let mut pet = pet_at(5, 0);
        pet.breakthrough_completed = true;
        pet.stage = resolve_stage(5, true);
        let out = apply_delta(pet, StatDelta::new(130, 0, 0));
        assert_eq!(out.pet.level, 6);
        assert_eq!(out.pet.strength, 10);
        assert_eq!(out.pet.stage, PetStage::Chick);
    }

    #[test]
    fn non_positive_strength_delta_passes_through_open_gate() {
        let mut gated = pet_at(5, 0);
        gated.mood = 50;
        let out = apply_delta(gated, StatDelta::new(0, -10, 5));
        assert!(!out.breakthrough_required);
        assert_eq!(out.pet.stamina, STAMINA_MAX - 10);
        assert_eq!(out.pet.mood, 55);
        assert_eq!(out.pet.level, 5);
    }

    // -----------------------------------------------------------------------
    // Bounds
    // -----------------------------------------------------------------------

    #[test]
    fn level_caps_at_max() {
        let mut pet = pet_at(19, 0);
        let out = apply_delta(pet.clone(), StatDelta::new(120, 0, 0));
        assert_eq!(out.pet.level, 20);
        assert!(!out.pet.breakthrough_completed);

        // At max level with a cleared gate, strength accumulates but the
        // level stays put.
        pet = out.pet;
        pet.breakthrough_completed = true;
        pet.stage = resolve_stage(20, true);
        let out = apply_delta(pet, StatDelta::new(500, 0, 0));
        assert_eq!(out.pet.level, 20);
        assert_eq!(out.pet.stage, PetStage::BuffChicken);
    }

    #[test]
    fn negative_strength_floors_at_zero() {
        let out = apply_delta(pet_at(3, 5), StatDelta::new(-50, 0, 0));
        assert_eq!(out.pet.strength, 0);
        assert_eq!(out.pet.level, 3);
    }

    #[test]
    fn stamina_and_mood_clamp_to_their_ranges() {
        let mut pet = pet_at(2, 0);
        pet.stamina = 5;
        pet.mood = 98;
        let out = apply_delta(pet, StatDelta::new(0, -50, 50));
        assert_eq!(out.pet.stamina, 0);
        assert_eq!(out.pet.mood, 100);
    }

    #[test]
    fn stage_is_recomputed_on_every_call() {
        let out = apply_delta(pet_at(9, 110), StatDelta::new(10, 0, 0));
        assert_eq!(out.pet.level, 10);
        assert_eq!(out.pet.stage, PetStage::Chick);
        assert!(!out.pet.breakthrough_completed);
    }
}
