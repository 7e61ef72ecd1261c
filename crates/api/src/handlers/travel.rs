//! Handlers for travel: attractions, check-ins, and the breakthrough gate.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use rand::Rng;
use serde::Serialize;

use cluckfit_core::breakthrough::{self, CHECKIN_REWARD};
use cluckfit_core::error::CoreError;
use cluckfit_core::progression::apply_delta;
use cluckfit_db::models::attraction::Attraction;
use cluckfit_db::models::pet::Pet;
use cluckfit_db::models::travel_checkin::{CreateTravelCheckin, TravelCheckin};
use cluckfit_db::repositories::{AttractionRepo, PetRepo, TravelCheckinRepo};

use crate::engine;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for a recorded check-in.
#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub pet: Pet,
    pub checkin: TravelCheckin,
    /// True when this check-in cleared a breakthrough gate.
    pub breakthrough_completed: bool,
}

/// Response for an explicit breakthrough.
#[derive(Debug, Serialize)]
pub struct BreakthroughResponse {
    pub pet: Pet,
    pub message: &'static str,
}

/// GET /travel/attractions
pub async fn list_attractions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let attractions = AttractionRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: attractions }))
}

/// POST /users/{user_id}/travel/start
///
/// Hand out a random attraction as the breakthrough destination. Rejected
/// when the pet has no open gate (not at a milestone, or already cleared).
pub async fn start_travel(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let pet = PetRepo::find_by_owner(&state.pool, &user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Pet", &user_id))?;
    breakthrough::ensure_at_open_gate(&pet.state()?)?;

    let attractions = AttractionRepo::list_all(&state.pool).await?;
    if attractions.is_empty() {
        return Err(AppError::InternalError(
            "no travel attractions available".into(),
        ));
    }
    let picked: Attraction = {
        let mut rng = rand::rng();
        let idx = rng.random_range(0..attractions.len());
        attractions[idx].clone()
    };

    Ok(Json(DataResponse { data: picked }))
}

/// POST /users/{user_id}/travel/checkins
///
/// Record a check-in at a location. A duplicate (user, location) pair is
/// rejected without mutation. When the pet sits at an open gate the
/// check-in clears it automatically; the fixed travel bonus is then fed
/// through the progression engine, so milestone blocking still applies.
pub async fn create_checkin(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<CreateTravelCheckin>,
) -> AppResult<impl IntoResponse> {
    if body.quest_id.trim().is_empty() {
        return Err(AppError::BadRequest("quest_id must not be empty".into()));
    }

    let mut tx = state.pool.begin().await?;
    let pet = engine::lock_pet(&mut *tx, &user_id).await?;
    let (pet, settled) = engine::settle_daily_cycle(&mut *tx, pet, engine::now()).await?;

    if TravelCheckinRepo::exists(&mut *tx, &user_id, &body.quest_id).await? {
        return Err(CoreError::Conflict(
            "already checked in at this location".to_string(),
        )
        .into());
    }
    let checkin = TravelCheckinRepo::create(&mut *tx, &user_id, &body).await?;

    let mut pet_state = settled.pet;
    let cleared_gate = breakthrough::ensure_at_open_gate(&pet_state).is_ok();
    if cleared_gate {
        pet_state = breakthrough::complete_breakthrough(pet_state)?;
    }
    let outcome = apply_delta(pet_state, CHECKIN_REWARD);

    let pet = PetRepo::save_state(&mut *tx, pet.id, &outcome.pet).await?;
    tx.commit().await?;

    tracing::info!(%user_id, quest_id = %body.quest_id, cleared_gate, "Travel check-in");

    Ok(Json(DataResponse {
        data: CheckinResponse {
            pet,
            checkin,
            breakthrough_completed: cleared_gate,
        },
    }))
}

/// GET /users/{user_id}/travel/checkins
pub async fn list_checkins(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let checkins = TravelCheckinRepo::list_for_user(&state.pool, &user_id).await?;
    Ok(Json(DataResponse { data: checkins }))
}

/// POST /users/{user_id}/travel/breakthrough
///
/// Explicitly clear the breakthrough gate. Fails with 400 off milestones
/// and 409 when the gate was already cleared.
pub async fn complete_breakthrough(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let pet = engine::lock_pet(&mut *tx, &user_id).await?;
    let (pet, settled) = engine::settle_daily_cycle(&mut *tx, pet, engine::now()).await?;

    let cleared = breakthrough::complete_breakthrough(settled.pet)?;
    let pet = PetRepo::save_state(&mut *tx, pet.id, &cleared).await?;
    tx.commit().await?;

    tracing::info!(%user_id, level = pet.level, "Breakthrough completed");

    Ok(Json(DataResponse {
        data: BreakthroughResponse {
            pet,
            message: "breakthrough completed",
        },
    }))
}
