//! Travel check-in entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cluckfit_core::types::{DbId, Timestamp};

/// A row from the `travel_checkins` table. `quest_id` is the external
/// location key; (user_id, quest_id) is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TravelCheckin {
    pub id: DbId,
    pub user_id: String,
    pub quest_id: String,
    pub lat: f64,
    pub lng: f64,
    pub completed_at: Timestamp,
}

/// DTO for `POST /users/{user_id}/travel/checkins`.
#[derive(Debug, Deserialize)]
pub struct CreateTravelCheckin {
    pub quest_id: String,
    pub lat: f64,
    pub lng: f64,
}
