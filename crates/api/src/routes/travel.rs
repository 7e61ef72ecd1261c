//! Route definitions for the `/travel` resource (non-user-scoped).

use axum::routing::get;
use axum::Router;

use crate::handlers::travel;
use crate::state::AppState;

/// Routes mounted at `/travel`.
///
/// ```text
/// GET    /attractions   -> list_attractions
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/attractions", get(travel::list_attractions))
}
