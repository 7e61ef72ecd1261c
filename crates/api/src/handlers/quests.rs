//! Handlers for the daily quest board.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use cluckfit_core::progression::{apply_delta, StatDelta};
use cluckfit_core::quest::{QuestProgress, QuestSlot};
use cluckfit_db::models::pet::Pet;
use cluckfit_db::repositories::PetRepo;

use crate::engine;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// One quest slot as shown to the client: catalog data plus today's state.
#[derive(Debug, Serialize)]
pub struct QuestStatus {
    pub slot: i16,
    pub title: String,
    pub description: String,
    pub state: QuestProgress,
    pub reward: StatDelta,
}

/// Response for a claimed quest.
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub pet: Pet,
    pub reward: StatDelta,
    /// True when the reward's strength component was discarded at an
    /// uncleared milestone. The claim still stands.
    pub breakthrough_required: bool,
}

/// GET /users/{user_id}/quests
///
/// Return today's quest board, settling the daily cycle first so the
/// day-start slot states are current.
pub async fn get_quests(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let pet = engine::lock_pet(&mut *tx, &user_id).await?;
    let (_, settled) = engine::settle_daily_cycle(&mut *tx, pet, engine::now()).await?;
    tx.commit().await?;

    let board = settled.pet.quests;
    let data: Vec<QuestStatus> = state
        .quests
        .iter()
        .map(|def| QuestStatus {
            slot: def.slot.id(),
            title: def.title.clone(),
            description: def.description.clone(),
            state: board.get(def.slot),
            reward: def.reward,
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// POST /users/{user_id}/quests/{slot}/claim
///
/// Claim a quest slot: transition it to `Claimed` and pay the catalog
/// reward out through the progression engine. Claiming an unmet slot is a
/// 400, a repeated claim a 409.
pub async fn claim_quest(
    State(state): State<AppState>,
    Path((user_id, slot_id)): Path<(String, i16)>,
) -> AppResult<impl IntoResponse> {
    let slot = QuestSlot::from_id(slot_id)
        .ok_or_else(|| AppError::BadRequest(format!("unknown quest slot {slot_id}")))?;
    let reward = state.quests.get(slot).reward;

    let mut tx = state.pool.begin().await?;
    let pet = engine::lock_pet(&mut *tx, &user_id).await?;
    let (pet, settled) = engine::settle_daily_cycle(&mut *tx, pet, engine::now()).await?;

    let mut pet_state = settled.pet;
    pet_state.quests = pet_state.quests.claim(slot)?;
    let outcome = apply_delta(pet_state, reward);

    let pet = PetRepo::save_state(&mut *tx, pet.id, &outcome.pet).await?;
    tx.commit().await?;

    tracing::debug!(%user_id, slot = slot_id, "Claimed daily quest");

    Ok(Json(DataResponse {
        data: ClaimResponse {
            pet,
            reward,
            breakthrough_required: outcome.breakthrough_required,
        },
    }))
}
