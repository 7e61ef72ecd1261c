use std::sync::Arc;

use cluckfit_core::quest::QuestCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cluckfit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Immutable quest catalog, loaded from the seeded templates at startup.
    pub quests: Arc<QuestCatalog>,
}
