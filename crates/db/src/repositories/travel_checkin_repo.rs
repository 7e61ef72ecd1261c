//! Repository for the `travel_checkins` table.

use sqlx::{PgConnection, PgPool};

use crate::models::travel_checkin::{CreateTravelCheckin, TravelCheckin};

const COLUMNS: &str = "id, user_id, quest_id, lat, lng, completed_at";

/// Provides check-in recording with duplicate detection.
pub struct TravelCheckinRepo;

impl TravelCheckinRepo {
    /// Whether the user has already checked in at this location.
    pub async fn exists(
        conn: &mut PgConnection,
        user_id: &str,
        quest_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let (found,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM travel_checkins WHERE user_id = $1 AND quest_id = $2)",
        )
        .bind(user_id)
        .bind(quest_id)
        .fetch_one(conn)
        .await?;
        Ok(found)
    }

    /// Record a check-in. Runs inside the caller's transaction; the
    /// `uq_travel_checkins_user_quest` constraint backstops the explicit
    /// duplicate check.
    pub async fn create(
        conn: &mut PgConnection,
        user_id: &str,
        input: &CreateTravelCheckin,
    ) -> Result<TravelCheckin, sqlx::Error> {
        let query = format!(
            "INSERT INTO travel_checkins (user_id, quest_id, lat, lng) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TravelCheckin>(&query)
            .bind(user_id)
            .bind(&input.quest_id)
            .bind(input.lat)
            .bind(input.lng)
            .fetch_one(conn)
            .await
    }

    /// All check-ins for a user, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Vec<TravelCheckin>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM travel_checkins \
             WHERE user_id = $1 \
             ORDER BY completed_at DESC"
        );
        sqlx::query_as::<_, TravelCheckin>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
