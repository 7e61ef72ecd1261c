//! Quest template entity model (static reference data).

use serde::Serialize;
use sqlx::FromRow;

use cluckfit_core::error::CoreError;
use cluckfit_core::progression::StatDelta;
use cluckfit_core::quest::{QuestDef, QuestSlot};

/// A row from the `quest_templates` table. Ids match the `QuestSlot`
/// codes in `cluckfit-core`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestTemplate {
    pub id: i16,
    pub title: String,
    pub description: String,
    pub reward_strength: i32,
    pub reward_stamina: i32,
    pub reward_mood: i32,
}

impl QuestTemplate {
    /// Convert the seeded row into a catalog definition.
    pub fn into_def(self) -> Result<QuestDef, CoreError> {
        let slot = QuestSlot::from_id(self.id)
            .ok_or_else(|| CoreError::Internal(format!("unknown quest template id {}", self.id)))?;
        Ok(QuestDef {
            slot,
            title: self.title,
            description: self.description,
            reward: StatDelta::new(self.reward_strength, self.reward_stamina, self.reward_mood),
        })
    }
}
