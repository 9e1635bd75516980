//! Match orchestration against the remote service
//!
//! The engine is synchronous and has no notion of "pending", so the
//! session holds the turn lock: while a remote request for the current
//! turn is outstanding, local input is rejected instead of racing the
//! in-flight reply.

use crate::remote::{parse_winner, Difficulty, RemoteClient};
use hexpie_core::{parse_move, GameEngine};

/// A local game paired with a remote opponent.
pub struct MatchSession {
    engine: GameEngine,
    remote: RemoteClient,
    difficulty: Difficulty,
    awaiting_remote: bool,
}

impl MatchSession {
    pub fn new(remote: RemoteClient, difficulty: Difficulty, board_size: usize) -> Self {
        Self {
            engine: GameEngine::new(board_size),
            remote,
            difficulty,
            awaiting_remote: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Whether a remote reply is outstanding; callers should disable
    /// input while this is set.
    pub fn awaiting_remote(&self) -> bool {
        self.awaiting_remote
    }

    /// Start a fresh remote game. When the opponent opens, its first move
    /// is applied locally through the ordinary legality path.
    pub async fn start(&mut self, local_first: bool) -> anyhow::Result<()> {
        self.engine.reset();
        self.awaiting_remote = true;
        let result = self.remote.init(local_first, self.difficulty).await;
        self.awaiting_remote = false;

        let reply = result?;
        if !reply.success {
            anyhow::bail!("remote service refused to start a game");
        }
        if let Some(notation) = reply.first_move.as_deref() {
            self.apply_remote_notation(notation);
        }
        Ok(())
    }

    /// Play a local move and fetch the opponent's answer. Returns false,
    /// mutating nothing, when the turn lock is held or the move is
    /// illegal. A collaborator failure leaves the local move standing and
    /// degrades to "no reply yet".
    pub async fn play(&mut self, row: usize, col: usize) -> bool {
        if self.awaiting_remote {
            tracing::warn!("local move rejected, remote reply outstanding");
            return false;
        }
        if !self.engine.make_move(row, col) {
            return false;
        }
        if self.engine.is_over() {
            return true;
        }

        let notation = self
            .engine
            .history()
            .last()
            .map(|m| m.notation.clone())
            .unwrap_or_default();

        self.awaiting_remote = true;
        let result = self.remote.submit_move(&notation, self.difficulty).await;
        self.awaiting_remote = false;

        match result {
            Ok(reply) => {
                if let Some(answer) = reply.opponent_move.as_deref() {
                    self.apply_remote_notation(answer);
                }
                if reply.game_over == Some(true) {
                    let winner = reply.winner.as_deref().and_then(parse_winner);
                    self.engine.set_external_result(true, winner);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote reply unavailable, local move stands");
            }
        }
        true
    }

    /// Invoke the pie rule. The local engine's swap is authoritative; the
    /// remote board is told to mirror it and its follow-up move is
    /// applied normally.
    pub async fn swap(&mut self) -> bool {
        if self.awaiting_remote || !self.engine.swap_eligible() {
            return false;
        }
        if !self.engine.swap() {
            return false;
        }

        self.awaiting_remote = true;
        let result = self.remote.request_swap(self.difficulty).await;
        self.awaiting_remote = false;

        match result {
            Ok(reply) => {
                if let (Some(reported), Some(local)) =
                    (reply.symmetric_move.as_deref(), self.engine.history().first())
                {
                    if reported != local.notation {
                        tracing::warn!(
                            remote = reported,
                            local = %local.notation,
                            "remote swap position differs, keeping local"
                        );
                    }
                }
                if let Some(answer) = reply.opponent_move.as_deref() {
                    self.apply_remote_notation(answer);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "remote swap reply unavailable");
            }
        }
        true
    }

    /// Ask the service what it would play for the side to move, without
    /// committing anything on either board.
    pub async fn advice(&mut self) -> Option<String> {
        if self.awaiting_remote {
            return None;
        }
        self.awaiting_remote = true;
        let result = self.remote.request_advice(self.difficulty).await;
        self.awaiting_remote = false;

        match result {
            Ok(reply) => reply.suggested_move,
            Err(err) => {
                tracing::warn!(error = %err, "advice unavailable");
                None
            }
        }
    }

    /// Parse a remote notation string and apply it as a regular move, so
    /// malformed or illegal suggestions cannot corrupt local state.
    fn apply_remote_notation(&mut self, notation: &str) -> bool {
        match parse_move(notation) {
            Ok((row, col)) => {
                let applied = self.engine.make_move(row, col);
                if !applied {
                    tracing::warn!(notation, "remote move is illegal locally, ignored");
                }
                applied
            }
            Err(err) => {
                tracing::warn!(notation, error = %err, "unparsable remote move ignored");
                false
            }
        }
    }
}
