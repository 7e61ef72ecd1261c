//! Attraction entity model (static reference data).

use serde::Serialize;
use sqlx::FromRow;

use cluckfit_core::types::DbId;

/// A row from the `attractions` table: a real-world destination offered
/// for breakthrough travel.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attraction {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
