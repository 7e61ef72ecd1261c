//! Integration tests for the daily quest board.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get, log_exercise, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Day-start board shape
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn fresh_board_has_checkin_open_and_exercise_quests_waiting(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    create_user(&app, "townpass-1", "Pepper").await;

    let board = body_json(get(&app, "/users/townpass-1/quests").await).await;
    let slots = board["data"].as_array().unwrap();
    assert_eq!(slots.len(), 3);

    assert_eq!(slots[0]["slot"], 1);
    assert_eq!(slots[0]["state"], "claimable");
    assert_eq!(slots[1]["slot"], 2);
    assert_eq!(slots[1]["state"], "not_met");
    assert_eq!(slots[2]["slot"], 3);
    assert_eq!(slots[2]["state"], "not_met");
}

// ---------------------------------------------------------------------------
// Claim transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn checkin_quest_claims_once_and_pays_mood(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    create_user(&app, "townpass-1", "Pepper").await;

    let response = post_json(&app, "/users/townpass-1/quests/1/claim", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let claimed = body_json(response).await;
    assert_eq!(claimed["data"]["pet"]["mood"], 5);
    assert_eq!(claimed["data"]["breakthrough_required"], false);

    let response = post_json(&app, "/users/townpass-1/quests/1/claim", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn exercise_quest_requires_a_session_first(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    create_user(&app, "townpass-1", "Pepper").await;

    let response = post_json(&app, "/users/townpass-1/quests/2/claim", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    log_exercise(&app, "townpass-1", 60, 0).await;

    let response = post_json(&app, "/users/townpass-1/quests/2/claim", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let claimed = body_json(response).await;
    // 6 strength from the session plus the 10-point reward.
    assert_eq!(claimed["data"]["pet"]["strength"], 16);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn exercise_goal_quest_opens_at_ten_minutes(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    create_user(&app, "townpass-1", "Pepper").await;

    log_exercise(&app, "townpass-1", 300, 0).await;
    let response = post_json(&app, "/users/townpass-1/quests/3/claim", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    log_exercise(&app, "townpass-1", 300, 0).await;
    let response = post_json(&app, "/users/townpass-1/quests/3/claim", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_slot_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    create_user(&app, "townpass-1", "Pepper").await;

    let response = post_json(&app, "/users/townpass-1/quests/9/claim", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
