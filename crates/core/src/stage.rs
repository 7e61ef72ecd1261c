//! Growth stage resolution.
//!
//! The stage is a derived projection of `(level, breakthrough_completed)`.
//! It is cached on the pet row for cheap reads but recomputed by every
//! engine mutation; the resolver here is the single source of truth.

use crate::stats::{is_milestone, MILESTONE_INTERVAL};

/// Stage code type matching SMALLINT in the database and the 0-based wire
/// codes the client renders.
pub type StageId = i16;

/// Growth stages, in ascending order of level threshold.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PetStage {
    Egg = 0,
    Chick = 1,
    Chicken = 2,
    BigChicken = 3,
    BuffChicken = 4,
}

impl PetStage {
    /// Return the database/wire stage code.
    pub fn id(self) -> StageId {
        self as StageId
    }

    /// Decode a stored stage code. `None` for codes outside 0..=4.
    pub fn from_id(id: StageId) -> Option<Self> {
        match id {
            0 => Some(Self::Egg),
            1 => Some(Self::Chick),
            2 => Some(Self::Chicken),
            3 => Some(Self::BigChicken),
            4 => Some(Self::BuffChicken),
            _ => None,
        }
    }

    /// The stage whose level threshold is the highest one at or below
    /// `level` (1 -> Egg, 5 -> Chick, 10 -> Chicken, 15 -> BigChicken,
    /// 20 -> BuffChicken).
    fn for_level(level: i32) -> Self {
        if level >= 20 {
            Self::BuffChicken
        } else if level >= 15 {
            Self::BigChicken
        } else if level >= 10 {
            Self::Chicken
        } else if level >= 5 {
            Self::Chick
        } else {
            Self::Egg
        }
    }
}

impl From<PetStage> for StageId {
    fn from(value: PetStage) -> Self {
        value as StageId
    }
}

/// Resolve the growth stage for `(level, breakthrough_completed)`.
///
/// While a pet sits at a milestone level whose gate has not been cleared,
/// its stage is held one milestone behind: the pet looks and behaves like
/// the previous tier until the breakthrough lands.
pub fn resolve_stage(level: i32, breakthrough_completed: bool) -> PetStage {
    let effective_level = if is_milestone(level) && !breakthrough_completed {
        level - MILESTONE_INTERVAL
    } else {
        level
    };
    PetStage::for_level(effective_level)
}
