//! Route definitions for the `/leaderboard` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::leaderboard;
use crate::state::AppState;

/// Routes mounted at `/leaderboard`.
///
/// ```text
/// GET    /level   -> by_level
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/level", get(leaderboard::by_level))
}
