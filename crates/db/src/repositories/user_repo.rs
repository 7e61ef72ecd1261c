//! Repository for the `users` table.

use sqlx::{PgConnection, PgPool};

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with an externally-issued id, returning the
    /// created row. Runs inside the caller's transaction so the user and
    /// its pet land atomically.
    pub async fn create(conn: &mut PgConnection, id: &str) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO users (id) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query).bind(id).fetch_one(conn).await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
