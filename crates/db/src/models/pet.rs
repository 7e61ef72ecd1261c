//! Pet entity model and its mapping to the engine's `PetState`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cluckfit_core::error::CoreError;
use cluckfit_core::pet::PetState;
use cluckfit_core::quest::{QuestBoard, QuestProgress};
use cluckfit_core::stage::PetStage;
use cluckfit_core::types::{DbId, Timestamp};

/// A row from the `pets` table.
///
/// `stage` and the three quest columns hold the SMALLINT codes defined in
/// `cluckfit-core`; [`Pet::state`] decodes them for the engine.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub owner_id: String,
    pub name: String,
    pub strength: i32,
    pub stamina: i32,
    pub mood: i32,
    pub level: i32,
    pub breakthrough_completed: bool,
    pub stage: i16,
    pub daily_exercise_seconds: i32,
    pub daily_steps: i32,
    pub quest_daily_checkin: i16,
    pub quest_first_exercise: i16,
    pub quest_exercise_goal: i16,
    pub last_daily_check_at: Option<Timestamp>,
    pub last_reset_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Pet {
    /// Decode the row into the engine's value state.
    ///
    /// Fails with an internal error on codes no released version ever
    /// wrote; a corrupted row must not silently reset a pet.
    pub fn state(&self) -> Result<PetState, CoreError> {
        Ok(PetState {
            strength: self.strength,
            stamina: self.stamina,
            mood: self.mood,
            level: self.level,
            breakthrough_completed: self.breakthrough_completed,
            stage: PetStage::from_id(self.stage)
                .ok_or_else(|| CoreError::Internal(format!("invalid stage code {}", self.stage)))?,
            daily_exercise_seconds: self.daily_exercise_seconds,
            daily_steps: self.daily_steps,
            quests: QuestBoard {
                daily_checkin: decode_progress(self.quest_daily_checkin)?,
                first_exercise: decode_progress(self.quest_first_exercise)?,
                exercise_goal: decode_progress(self.quest_exercise_goal)?,
            },
            last_daily_check_at: self.last_daily_check_at,
            last_reset_at: self.last_reset_at,
        })
    }
}

fn decode_progress(code: i16) -> Result<QuestProgress, CoreError> {
    QuestProgress::from_id(code)
        .ok_or_else(|| CoreError::Internal(format!("invalid quest progress code {code}")))
}

/// DTO for `PATCH /users/{user_id}/pet`.
///
/// Only the name is freely assignable; stats move exclusively through the
/// engine's write path.
#[derive(Debug, Deserialize)]
pub struct UpdatePet {
    pub name: Option<String>,
}
