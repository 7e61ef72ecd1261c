//! Daily quest board: an explicit per-slot state machine.
//!
//! Each pet carries three daily quest slots. A slot is `NotMet` until its
//! condition is satisfied, `Claimable` once it is, and `Claimed` after the
//! reward has been paid out. The daily cycle resets the board to its
//! day-start shape: the check-in slot opens immediately, the other two wait
//! on exercise activity.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::progression::StatDelta;

/// Quest progress code type matching SMALLINT in the database.
pub type QuestProgressId = i16;

/// Per-slot quest state.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestProgress {
    /// Condition not satisfied yet; claiming is rejected.
    NotMet = 0,
    /// Condition satisfied; the reward can be claimed once.
    Claimable = 1,
    /// Reward already paid out today.
    Claimed = 2,
}

impl QuestProgress {
    /// Return the database progress code.
    pub fn id(self) -> QuestProgressId {
        self as QuestProgressId
    }

    /// Decode a stored progress code. `None` for codes outside 0..=2.
    pub fn from_id(id: QuestProgressId) -> Option<Self> {
        match id {
            0 => Some(Self::NotMet),
            1 => Some(Self::Claimable),
            2 => Some(Self::Claimed),
            _ => None,
        }
    }
}

/// The three daily quest slots, keyed by the seeded template ids.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestSlot {
    /// Open the app and check in. Claimable from the start of the day.
    DailyCheckin = 1,
    /// Log one exercise session of any kind.
    FirstExercise = 2,
    /// Accumulate the daily exercise-time goal.
    ExerciseGoal = 3,
}

impl QuestSlot {
    pub fn id(self) -> i16 {
        self as i16
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::DailyCheckin),
            2 => Some(Self::FirstExercise),
            3 => Some(Self::ExerciseGoal),
            _ => None,
        }
    }

    pub const ALL: [QuestSlot; 3] = [
        QuestSlot::DailyCheckin,
        QuestSlot::FirstExercise,
        QuestSlot::ExerciseGoal,
    ];
}

/// Daily quest board state carried on the pet aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestBoard {
    pub daily_checkin: QuestProgress,
    pub first_exercise: QuestProgress,
    pub exercise_goal: QuestProgress,
}

impl QuestBoard {
    /// Board shape at the start of a new day: check-in is immediately
    /// claimable, the exercise quests wait on their conditions.
    pub fn day_start() -> Self {
        Self {
            daily_checkin: QuestProgress::Claimable,
            first_exercise: QuestProgress::NotMet,
            exercise_goal: QuestProgress::NotMet,
        }
    }

    pub fn get(&self, slot: QuestSlot) -> QuestProgress {
        match slot {
            QuestSlot::DailyCheckin => self.daily_checkin,
            QuestSlot::FirstExercise => self.first_exercise,
            QuestSlot::ExerciseGoal => self.exercise_goal,
        }
    }

    fn set(&mut self, slot: QuestSlot, progress: QuestProgress) {
        match slot {
            QuestSlot::DailyCheckin => self.daily_checkin = progress,
            QuestSlot::FirstExercise => self.first_exercise = progress,
            QuestSlot::ExerciseGoal => self.exercise_goal = progress,
        }
    }

    /// Move a `NotMet` slot to `Claimable`. A no-op for slots already
    /// claimable or claimed, so condition triggers are idempotent.
    pub fn mark_claimable(&mut self, slot: QuestSlot) {
        if self.get(slot) == QuestProgress::NotMet {
            self.set(slot, QuestProgress::Claimable);
        }
    }

    /// Transition a slot from `Claimable` to `Claimed`.
    ///
    /// Claiming a slot whose condition is not met is a validation failure;
    /// claiming twice is a conflict, so callers stay idempotent.
    pub fn claim(mut self, slot: QuestSlot) -> Result<Self, CoreError> {
        match self.get(slot) {
            QuestProgress::NotMet => Err(CoreError::Validation(
                "quest requirement not yet met today".to_string(),
            )),
            QuestProgress::Claimed => Err(CoreError::Conflict(
                "quest already claimed today".to_string(),
            )),
            QuestProgress::Claimable => {
                self.set(slot, QuestProgress::Claimed);
                Ok(self)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Quest catalog
// ---------------------------------------------------------------------------

/// One quest definition from the static catalog.
#[derive(Debug, Clone)]
pub struct QuestDef {
    pub slot: QuestSlot,
    pub title: String,
    pub description: String,
    pub reward: StatDelta,
}

/// Immutable quest catalog, loaded once at process start from the seeded
/// reference data and injected where needed. Never ambient global state.
#[derive(Debug, Clone)]
pub struct QuestCatalog {
    defs: Vec<QuestDef>,
}

impl QuestCatalog {
    /// Build a catalog, requiring exactly one definition per slot.
    pub fn new(defs: Vec<QuestDef>) -> Result<Self, CoreError> {
        for slot in QuestSlot::ALL {
            let count = defs.iter().filter(|d| d.slot == slot).count();
            if count != 1 {
                return Err(CoreError::Internal(format!(
                    "quest catalog must define slot {} exactly once, found {count}",
                    slot.id()
                )));
            }
        }
        Ok(Self { defs })
    }

    pub fn get(&self, slot: QuestSlot) -> &QuestDef {
        // new() guarantees one def per slot.
        self.defs
            .iter()
            .find(|d| d.slot == slot)
            .unwrap_or_else(|| unreachable!("catalog validated in new()"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestDef> {
        self.defs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_board() -> QuestBoard {
        QuestBoard {
            daily_checkin: QuestProgress::Claimable,
            first_exercise: QuestProgress::Claimable,
            exercise_goal: QuestProgress::Claimable,
        }
    }

    // -----------------------------------------------------------------------
    // Day-start shape
    // -----------------------------------------------------------------------

    #[test]
    fn day_start_opens_checkin_only() {
        let board = QuestBoard::day_start();
        assert_eq!(board.daily_checkin, QuestProgress::Claimable);
        assert_eq!(board.first_exercise, QuestProgress::NotMet);
        assert_eq!(board.exercise_goal, QuestProgress::NotMet);
    }

    // -----------------------------------------------------------------------
    // Claim transitions
    // -----------------------------------------------------------------------

    #[test]
    fn claimable_slot_claims_once() {
        let board = full_board().claim(QuestSlot::DailyCheckin).unwrap();
        assert_eq!(board.daily_checkin, QuestProgress::Claimed);
        assert_eq!(board.first_exercise, QuestProgress::Claimable);
    }

    #[test]
    fn claiming_not_met_slot_is_validation_error() {
        let board = QuestBoard::day_start();
        let err = board.claim(QuestSlot::FirstExercise).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn double_claim_is_conflict() {
        let board = full_board().claim(QuestSlot::ExerciseGoal).unwrap();
        let err = board.claim(QuestSlot::ExerciseGoal).unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[test]
    fn mark_claimable_only_moves_not_met() {
        let mut board = QuestBoard::day_start();
        board.mark_claimable(QuestSlot::FirstExercise);
        assert_eq!(board.first_exercise, QuestProgress::Claimable);

        let mut claimed = full_board().claim(QuestSlot::FirstExercise).unwrap();
        claimed.mark_claimable(QuestSlot::FirstExercise);
        assert_eq!(claimed.first_exercise, QuestProgress::Claimed);
    }

    // -----------------------------------------------------------------------
    // Codes
    // -----------------------------------------------------------------------

    #[test]
    fn progress_ids_round_trip() {
        for progress in [
            QuestProgress::NotMet,
            QuestProgress::Claimable,
            QuestProgress::Claimed,
        ] {
            assert_eq!(QuestProgress::from_id(progress.id()), Some(progress));
        }
        assert_eq!(QuestProgress::from_id(3), None);
    }

    #[test]
    fn slot_ids_match_seed_data() {
        assert_eq!(QuestSlot::DailyCheckin.id(), 1);
        assert_eq!(QuestSlot::FirstExercise.id(), 2);
        assert_eq!(QuestSlot::ExerciseGoal.id(), 3);
        assert_eq!(QuestSlot::from_id(4), None);
    }

    // -----------------------------------------------------------------------
    // Catalog validation
    // -----------------------------------------------------------------------

    fn def(slot: QuestSlot) -> QuestDef {
        QuestDef {
            slot,
            title: format!("quest {}", slot.id()),
            description: String::new(),
            reward: StatDelta::new(10, 0, 5),
        }
    }

    #[test]
    fn catalog_requires_all_three_slots() {
        let err = QuestCatalog::new(vec![def(QuestSlot::DailyCheckin)]).unwrap_err();
        assert!(matches!(err, CoreError::Internal(_)));

        let catalog = QuestCatalog::new(QuestSlot::ALL.map(def).to_vec()).unwrap();
        assert_eq!(catalog.get(QuestSlot::ExerciseGoal).slot, QuestSlot::ExerciseGoal);
        assert_eq!(catalog.iter().count(), 3);
    }

    #[test]
    fn catalog_rejects_duplicate_slots() {
        let defs = vec![
            def(QuestSlot::DailyCheckin),
            def(QuestSlot::DailyCheckin),
            def(QuestSlot::FirstExercise),
            def(QuestSlot::ExerciseGoal),
        ];
        assert!(QuestCatalog::new(defs).is_err());
    }
}
