//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{daily, exercise, pet, quests, travel, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /                               -> create_user
/// GET    /{user_id}                      -> get_user
/// GET    /{user_id}/pet                  -> get_pet
/// PATCH  /{user_id}/pet                  -> update_pet
/// POST   /{user_id}/exercise             -> log_exercise
/// GET    /{user_id}/quests               -> get_quests
/// POST   /{user_id}/quests/{slot}/claim  -> claim_quest
/// POST   /{user_id}/daily-check          -> daily_check
/// POST   /{user_id}/travel/start         -> start_travel
/// GET    /{user_id}/travel/checkins      -> list_checkins
/// POST   /{user_id}/travel/checkins      -> create_checkin
/// POST   /{user_id}/travel/breakthrough  -> complete_breakthrough
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user))
        .route("/{user_id}", get(users::get_user))
        .route("/{user_id}/pet", get(pet::get_pet).patch(pet::update_pet))
        .route("/{user_id}/exercise", post(exercise::log_exercise))
        .route("/{user_id}/quests", get(quests::get_quests))
        .route("/{user_id}/quests/{slot}/claim", post(quests::claim_quest))
        .route("/{user_id}/daily-check", post(daily::daily_check))
        .route("/{user_id}/travel/start", post(travel::start_travel))
        .route(
            "/{user_id}/travel/checkins",
            get(travel::list_checkins).post(travel::create_checkin),
        )
        .route(
            "/{user_id}/travel/breakthrough",
            post(travel::complete_breakthrough),
        )
}
