//! Integration tests for the hexpie-server API

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use hexpie_server::{create_router, ServerConfig, ServerState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let config = ServerConfig::default();
    let state = Arc::new(ServerState::new(11));
    create_router(&config, state)
}

async fn get(app: axum::Router, uri: &str) -> Value {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn post(app: axum::Router, uri: &str, payload: Value) -> Value {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_status_endpoint() {
    let json = get(test_app(), "/api/status").await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "hexpie");
}

#[tokio::test]
async fn test_initial_state() {
    let json = get(test_app(), "/api/game/state").await;
    assert_eq!(json["size"], 11);
    assert_eq!(json["current_player"], "First");
    assert_eq!(json["game_over"], false);
    assert_eq!(json["move_history"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_move_and_turn_switch() {
    let state = Arc::new(ServerState::new(11));
    let config = ServerConfig::default();

    let json = post(
        create_router(&config, state.clone()),
        "/api/game/move",
        json!({ "move": "f6" }),
    )
    .await;
    assert_eq!(json["success"], true);
    assert_eq!(json["current_player"], "Second");
    assert_eq!(json["swap_eligible"], true);
    assert_eq!(json["moves"], 1);

    // the same cell again must fail and change nothing
    let json = post(
        create_router(&config, state),
        "/api/game/move",
        json!({ "move": "f6" }),
    )
    .await;
    assert_eq!(json["success"], false);
    assert_eq!(json["moves"], 1);
}

#[tokio::test]
async fn test_malformed_notation_rejected() {
    let json = post(test_app(), "/api/game/move", json!({ "move": "6f" })).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("column letter"));
    assert_eq!(json["moves"], 0);
}

#[tokio::test]
async fn test_swap_flow() {
    let state = Arc::new(ServerState::new(11));
    let config = ServerConfig::default();

    // swap before any move is illegal
    let json = post(create_router(&config, state.clone()), "/api/game/swap", json!({})).await;
    assert_eq!(json["success"], false);

    post(
        create_router(&config, state.clone()),
        "/api/game/move",
        json!({ "move": "c4" }),
    )
    .await;

    let json = post(create_router(&config, state.clone()), "/api/game/swap", json!({})).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["current_player"], "First");
    assert_eq!(json["swap_eligible"], false);
    assert_eq!(json["moves"], 1);

    // the swapped stone sits on the transpose cell, owned by Second
    let snap = get(create_router(&config, state), "/api/game/state").await;
    let mv = &snap["move_history"][0];
    assert_eq!(mv["row"], 2);
    assert_eq!(mv["col"], 3);
    assert_eq!(mv["player"], "Second");
}

#[tokio::test]
async fn test_undo_flow() {
    let state = Arc::new(ServerState::new(11));
    let config = ServerConfig::default();

    let json = post(create_router(&config, state.clone()), "/api/game/undo", json!({})).await;
    assert_eq!(json["success"], false);

    post(
        create_router(&config, state.clone()),
        "/api/game/move",
        json!({ "move": "a1" }),
    )
    .await;
    let json = post(create_router(&config, state), "/api/game/undo", json!({})).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["moves"], 0);
    assert_eq!(json["current_player"], "First");
}

#[tokio::test]
async fn test_new_game_resizes() {
    let state = Arc::new(ServerState::new(11));
    let config = ServerConfig::default();

    post(
        create_router(&config, state.clone()),
        "/api/game/move",
        json!({ "move": "a1" }),
    )
    .await;

    let json = post(
        create_router(&config, state.clone()),
        "/api/game/new",
        json!({ "size": 7 }),
    )
    .await;
    assert_eq!(json["success"], true);
    assert_eq!(json["moves"], 0);

    let snap = get(create_router(&config, state), "/api/game/state").await;
    assert_eq!(snap["size"], 7);
}

#[tokio::test]
async fn test_new_game_rejects_unreasonable_sizes() {
    let state = Arc::new(ServerState::new(11));
    let config = ServerConfig::default();

    for size in [0, 1, 27, 100_000_000usize] {
        let json = post(
            create_router(&config, state.clone()),
            "/api/game/new",
            json!({ "size": size }),
        )
        .await;
        assert_eq!(json["success"], false, "size {} must be rejected", size);
        assert!(json["error"].as_str().unwrap().contains("board size"));
    }

    // the running game keeps its grid
    let snap = get(create_router(&config, state), "/api/game/state").await;
    assert_eq!(snap["size"], 11);
}

#[tokio::test]
async fn test_save_load_round_trip() {
    let state = Arc::new(ServerState::new(11));
    let config = ServerConfig::default();

    for mv in ["a1", "b2", "a2"] {
        post(
            create_router(&config, state.clone()),
            "/api/game/move",
            json!({ "move": mv }),
        )
        .await;
    }
    let snap = get(create_router(&config, state.clone()), "/api/game/state").await;

    // wipe the game, then load the snapshot back
    post(create_router(&config, state.clone()), "/api/game/new", json!({})).await;
    let json = post(create_router(&config, state.clone()), "/api/game/load", snap.clone()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["moves"], 3);

    let restored = get(create_router(&config, state), "/api/game/state").await;
    assert_eq!(restored, snap);
}

#[tokio::test]
async fn test_load_rejects_inconsistent_snapshot() {
    let state = Arc::new(ServerState::new(11));
    let config = ServerConfig::default();

    post(
        create_router(&config, state.clone()),
        "/api/game/move",
        json!({ "move": "c4" }),
    )
    .await;

    let mut snap = get(create_router(&config, state.clone()), "/api/game/state").await;
    // claim an extra move that has no stone on the grid
    let extra = snap["move_history"][0].clone();
    snap["move_history"].as_array_mut().unwrap().push(extra);

    let json = post(create_router(&config, state.clone()), "/api/game/load", snap).await;
    assert_eq!(json["success"], false);

    // the running game is untouched
    let current = get(create_router(&config, state), "/api/game/state").await;
    assert_eq!(current["move_history"].as_array().unwrap().len(), 1);
}
