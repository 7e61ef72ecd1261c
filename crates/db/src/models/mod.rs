//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod attraction;
pub mod exercise_log;
pub mod leaderboard;
pub mod pet;
pub mod quest_template;
pub mod travel_checkin;
pub mod user;
