//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take `&PgPool` for standalone queries or `&mut PgConnection`
//! when they must participate in a caller-owned transaction (the engine's
//! read-modify-write cycles are all single-transaction).

pub mod attraction_repo;
pub mod exercise_log_repo;
pub mod pet_repo;
pub mod quest_template_repo;
pub mod travel_checkin_repo;
pub mod user_repo;

pub use attraction_repo::AttractionRepo;
pub use exercise_log_repo::ExerciseLogRepo;
pub use pet_repo::PetRepo;
pub use quest_template_repo::QuestTemplateRepo;
pub use travel_checkin_repo::TravelCheckinRepo;
pub use user_repo::UserRepo;
