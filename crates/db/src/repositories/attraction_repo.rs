//! Repository for the `attractions` table (static reference data).

use sqlx::PgPool;

use crate::models::attraction::Attraction;

const COLUMNS: &str = "id, name, description, latitude, longitude";

/// Read access to the seeded attraction catalog.
pub struct AttractionRepo;

impl AttractionRepo {
    /// All attractions, stable order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Attraction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attractions ORDER BY id ASC");
        sqlx::query_as::<_, Attraction>(&query)
            .fetch_all(pool)
            .await
    }
}
