//! Repository for the `quest_templates` table (static reference data).

use sqlx::PgPool;

use crate::models::quest_template::QuestTemplate;

const COLUMNS: &str = "id, title, description, reward_strength, reward_stamina, reward_mood";

/// Read access to the seeded quest catalog.
pub struct QuestTemplateRepo;

impl QuestTemplateRepo {
    /// All templates in slot order. Loaded once at startup to build the
    /// immutable `QuestCatalog`.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<QuestTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quest_templates ORDER BY id ASC");
        sqlx::query_as::<_, QuestTemplate>(&query)
            .fetch_all(pool)
            .await
    }
}
