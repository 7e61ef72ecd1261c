//! Handlers for user creation and lookup.
//!
//! A user is created together with its pet in one transaction; the user id
//! is an externally-issued city-pass id, so creation is create-or-fetch
//! rather than strictly insert-only.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use cluckfit_core::error::CoreError;
use cluckfit_db::models::exercise_log::ExerciseLog;
use cluckfit_db::models::pet::Pet;
use cluckfit_db::models::user::{CreateUser, User};
use cluckfit_db::repositories::{ExerciseLogRepo, PetRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// A user together with its pet.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub user: User,
    pub pet: Pet,
}

/// A user profile plus the recent exercise audit trail.
#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub user: User,
    pub pet: Pet,
    pub recent_logs: Vec<ExerciseLog>,
}

/// POST /users/
///
/// Create a user and its pet atomically. If the id already exists, the
/// existing profile is returned instead (the client cannot tell a fresh
/// city-pass id from a returning one).
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user_id = body.user_id.trim();
    let pet_name = body.pet_name.trim();
    if user_id.is_empty() {
        return Err(AppError::BadRequest("user_id must not be empty".into()));
    }
    if pet_name.is_empty() {
        return Err(AppError::BadRequest("pet_name must not be empty".into()));
    }

    if let Some(user) = UserRepo::find_by_id(&state.pool, user_id).await? {
        let pet = PetRepo::find_by_owner(&state.pool, user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Pet", user_id))?;
        return Ok(Json(DataResponse {
            data: UserProfile { user, pet },
        }));
    }

    let mut tx = state.pool.begin().await?;
    let user = UserRepo::create(&mut *tx, user_id).await?;
    let pet = PetRepo::create_for_user(&mut *tx, user_id, pet_name).await?;
    tx.commit().await?;

    tracing::info!(user_id, pet_id = pet.id, "Created user with pet");

    Ok(Json(DataResponse {
        data: UserProfile { user, pet },
    }))
}

/// GET /users/{user_id}
///
/// Return the user, its pet, and the most recent exercise logs.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, &user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", &user_id))?;
    let pet = PetRepo::find_by_owner(&state.pool, &user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Pet", &user_id))?;
    let recent_logs = ExerciseLogRepo::list_for_user(&state.pool, &user_id, None).await?;

    Ok(Json(DataResponse {
        data: UserDetail {
            user,
            pet,
            recent_logs,
        },
    }))
}
