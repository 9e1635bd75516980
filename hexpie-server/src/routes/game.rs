//! Game API endpoints
//!
//! Every handler reads or mutates the shared engine and answers with a
//! compact turn summary. Illegal operations come back as
//! `success: false` with the prior state intact; malformed payloads come
//! back as an `error` without touching the engine.

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexpie_core::{notation, GameSnapshot, Player};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Turn summary returned by the mutating endpoints.
#[derive(Serialize)]
pub struct PlayResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub current_player: Player,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
    pub swap_eligible: bool,
    pub moves: usize,
}

impl PlayResponse {
    fn from_engine(engine: &hexpie_core::GameEngine, success: bool, error: Option<String>) -> Self {
        Self {
            success,
            error,
            current_player: engine.current_player(),
            game_over: engine.is_over(),
            winner: engine.winner(),
            swap_eligible: engine.swap_eligible(),
            moves: engine.history().len(),
        }
    }
}

#[derive(Deserialize)]
pub struct NewGameRequest {
    pub size: Option<usize>,
}

/// Board sizes the API will allocate for.
const MIN_BOARD_SIZE: usize = 2;
const MAX_BOARD_SIZE: usize = 26;

/// Start a fresh game, optionally on a new board size.
pub async fn new_game(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<NewGameRequest>,
) -> Json<PlayResponse> {
    let mut engine = state.engine.write().unwrap();
    if let Some(size) = req.size {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Json(PlayResponse::from_engine(
                &engine,
                false,
                Some(format!(
                    "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
                )),
            ));
        }
    }
    match req.size {
        Some(size) if size != engine.board().size() => engine.resize(size),
        _ => engine.reset(),
    }
    tracing::info!(size = engine.board().size(), "new game started");
    Json(PlayResponse::from_engine(&engine, true, None))
}

#[derive(Deserialize)]
pub struct MoveRequest {
    #[serde(rename = "move")]
    pub notation: String,
}

/// Apply a move given in letter-number notation.
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Json<PlayResponse> {
    let mut engine = state.engine.write().unwrap();

    let (row, col) = match notation::parse_move(&req.notation) {
        Ok(coord) => coord,
        Err(err) => {
            return Json(PlayResponse::from_engine(
                &engine,
                false,
                Some(err.to_string()),
            ));
        }
    };

    let success = engine.make_move(row, col);
    let error = (!success).then(|| format!("illegal move: {}", req.notation));
    Json(PlayResponse::from_engine(&engine, success, error))
}

/// Invoke the pie rule.
pub async fn swap(State(state): State<Arc<ServerState>>) -> Json<PlayResponse> {
    let mut engine = state.engine.write().unwrap();
    let success = engine.swap();
    let error = (!success).then(|| "swap is only legal right after the first move".to_string());
    Json(PlayResponse::from_engine(&engine, success, error))
}

/// Take back the most recent move.
pub async fn undo(State(state): State<Arc<ServerState>>) -> Json<PlayResponse> {
    let mut engine = state.engine.write().unwrap();
    let success = engine.undo();
    let error = (!success).then(|| "nothing to undo".to_string());
    Json(PlayResponse::from_engine(&engine, success, error))
}

/// Full snapshot of the current game.
pub async fn get_state(State(state): State<Arc<ServerState>>) -> Json<GameSnapshot> {
    let engine = state.engine.read().unwrap();
    Json(engine.snapshot())
}

/// Replace the current game with an uploaded snapshot. The snapshot is
/// validated first; on rejection the running game is untouched.
pub async fn load_state(
    State(state): State<Arc<ServerState>>,
    Json(snapshot): Json<GameSnapshot>,
) -> Json<Value> {
    let mut engine = state.engine.write().unwrap();

    // validate before touching anything so a bad record cannot clobber
    // the running game
    if let Err(err) = snapshot.validate(snapshot.size) {
        return Json(json!({ "success": false, "error": err.to_string() }));
    }

    // accept any size: a loaded record may come from a different board
    if snapshot.size != engine.board().size() {
        engine.resize(snapshot.size);
    }

    match engine.restore(&snapshot) {
        Ok(()) => Json(json!({ "success": true, "moves": engine.history().len() })),
        Err(err) => Json(json!({ "success": false, "error": err.to_string() })),
    }
}
