//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cluckfit_core::types::Timestamp;

/// A row from the `users` table. The id is the externally-issued
/// city-pass id, not a generated key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: String,
    pub created_at: Timestamp,
}

/// DTO for `POST /users/`. Creating a user also creates its pet.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub user_id: String,
    pub pet_name: String,
}
