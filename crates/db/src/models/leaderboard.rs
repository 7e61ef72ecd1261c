//! Leaderboard read-side projection.

use serde::Serialize;
use sqlx::FromRow;

/// One leaderboard row: a pet joined with its owner, ordered by level.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub owner_id: String,
    pub pet_name: String,
    pub level: i32,
    pub stage: i16,
    pub strength: i32,
}
