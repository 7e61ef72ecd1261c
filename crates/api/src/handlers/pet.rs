//! Handlers for reading and renaming the pet.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use cluckfit_core::error::CoreError;
use cluckfit_db::models::pet::UpdatePet;
use cluckfit_db::repositories::PetRepo;

use crate::engine;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /users/{user_id}/pet
///
/// Return the pet's current state, lazily settling the daily cycle first
/// so the first read of a new day performs the reset/penalty pass.
pub async fn get_pet(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let pet = engine::lock_pet(&mut *tx, &user_id).await?;
    let (pet, _) = engine::settle_daily_cycle(&mut *tx, pet, engine::now()).await?;
    tx.commit().await?;

    Ok(Json(DataResponse { data: pet }))
}

/// PATCH /users/{user_id}/pet
///
/// Rename the pet. Stats are not assignable here; they move only through
/// the engine's write path.
pub async fn update_pet(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<UpdatePet>,
) -> AppResult<impl IntoResponse> {
    let pet = match body.name {
        Some(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::BadRequest("name must not be empty".into()));
            }
            PetRepo::rename(&state.pool, &user_id, &name)
                .await?
                .ok_or_else(|| CoreError::not_found("Pet", &user_id))?
        }
        None => PetRepo::find_by_owner(&state.pool, &user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Pet", &user_id))?,
    };

    Ok(Json(DataResponse { data: pet }))
}
