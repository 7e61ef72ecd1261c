pub mod health;
pub mod leaderboard;
pub mod travel;
pub mod users;

use axum::routing::post;
use axum::Router;

use crate::handlers::users as users_handler;
use crate::state::AppState;

/// Build the application route tree (mounted at the root; the mobile
/// client expects unprefixed paths).
///
/// Route hierarchy:
///
/// ```text
/// /users/                                    create user + pet (POST)
/// /users/{user_id}                           user with pet and recent logs
/// /users/{user_id}/pet                       pet state (GET, lazy daily cycle), rename (PATCH)
/// /users/{user_id}/exercise                  log exercise session (POST)
/// /users/{user_id}/quests                    daily quest board (GET)
/// /users/{user_id}/quests/{slot}/claim       claim a quest slot (POST)
/// /users/{user_id}/daily-check               explicit daily cycle (POST)
/// /users/{user_id}/travel/start              random breakthrough destination (POST)
/// /users/{user_id}/travel/checkins           list (GET), check in (POST)
/// /users/{user_id}/travel/breakthrough       explicit breakthrough (POST)
///
/// /travel/attractions                        attraction catalog (GET)
///
/// /leaderboard/level                         top pets by level (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Axum 0.8 nesting serves the nested root at `/users` (no trailing
        // slash); the documented contract and tests use `POST /users/`, so
        // register that path explicitly here.
        .route("/users/", post(users_handler::create_user))
        .nest("/users", users::router())
        .nest("/travel", travel::router())
        .nest("/leaderboard", leaderboard::router())
}
