//! The pet aggregate as the progression engine sees it.

use crate::quest::QuestBoard;
use crate::stage::{resolve_stage, PetStage};
use crate::stats::STAMINA_MAX;
use crate::types::Timestamp;

/// Mutable pet state operated on by the engine.
///
/// This is a plain value: the `db` crate maps it to and from the `pets`
/// row, and every mutation goes through the engine functions so the cached
/// `stage` always equals `resolve_stage(level, breakthrough_completed)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetState {
    pub strength: i32,
    pub stamina: i32,
    pub mood: i32,
    pub level: i32,
    pub breakthrough_completed: bool,
    pub stage: PetStage,
    pub daily_exercise_seconds: i32,
    pub daily_steps: i32,
    pub quests: QuestBoard,
    pub last_daily_check_at: Option<Timestamp>,
    pub last_reset_at: Option<Timestamp>,
}

impl PetState {
    /// State of a freshly hatched (well, laid) pet: level 1 egg with a full
    /// stamina budget and nothing earned yet.
    pub fn initial() -> Self {
        Self {
            strength: 0,
            stamina: STAMINA_MAX,
            mood: 0,
            level: 1,
            breakthrough_completed: false,
            stage: resolve_stage(1, false),
            daily_exercise_seconds: 0,
            daily_steps: 0,
            quests: QuestBoard::day_start(),
            last_daily_check_at: None,
            last_reset_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::QuestProgress;

    #[test]
    fn initial_state_matches_creation_contract() {
        let pet = PetState::initial();
        assert_eq!(pet.level, 1);
        assert_eq!(pet.strength, 0);
        assert_eq!(pet.stamina, STAMINA_MAX);
        assert_eq!(pet.mood, 0);
        assert_eq!(pet.stage, PetStage::Egg);
        assert!(!pet.breakthrough_completed);
        assert_eq!(pet.quests.daily_checkin, QuestProgress::Claimable);
        assert!(pet.last_daily_check_at.is_none());
    }
}
