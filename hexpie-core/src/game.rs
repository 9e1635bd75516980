//! Game engine: turn order, history, pie-rule swap, undo, win detection
//!
//! The engine owns the board and is the only mutation path for it. All
//! operations are synchronous and run to completion; a failed operation
//! leaves the prior valid state intact and reports `false`.

use crate::board::{Board, Cell, DEFAULT_SIZE};
use crate::notation::format_move;
use crate::snapshot::{GameSnapshot, SnapshotError};
use serde::{Deserialize, Serialize};

/// Player color. First (Red) connects the top and bottom rows,
/// Second (Blue) connects the left and right columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// One recorded placement. Append-only; undo pops the most recent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
    pub notation: String,
}

impl Move {
    fn new(row: usize, col: usize, player: Player) -> Self {
        Self {
            row,
            col,
            player,
            notation: format_move(row, col),
        }
    }
}

/// Authoritative turn-by-turn state machine for a Hex game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    history: Vec<Move>,
    game_over: bool,
    winner: Option<Player>,
    swap_eligible: bool,
}

impl GameEngine {
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::First,
            history: Vec::new(),
            game_over: false,
            winner: None,
            swap_eligible: false,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True iff exactly one move has been played and it has not yet been
    /// swapped or declined.
    pub fn swap_eligible(&self) -> bool {
        self.swap_eligible
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Place a stone for the current player. Fails without state change
    /// when the game is over or the placement is illegal (out of bounds
    /// or occupied). On success the move is recorded, the turn switches,
    /// and win detection runs.
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        if self.game_over {
            return false;
        }

        let mover = self.current_player;
        if !self.board.place_stone(row, col, mover) {
            return false;
        }

        let mv = Move::new(row, col, mover);
        tracing::debug!(notation = %mv.notation, player = ?mover, "stone placed");
        self.history.push(mv);
        self.swap_eligible = self.history.len() == 1;

        if self.board.spanning_path(mover) {
            self.game_over = true;
            self.winner = Some(mover);
            tracing::info!(winner = ?mover, moves = self.history.len(), "spanning chain complete");
        } else {
            self.current_player = mover.opponent();
        }
        true
    }

    /// Pie rule: the second player takes over the opening move. The sole
    /// recorded stone is lifted and a Second stone lands on the transpose
    /// position (row and column exchanged, which mirrors the move across
    /// the board diagonal and exchanges the two edge-pairs with it).
    /// `current_player` resets to First. Legal exactly once, immediately
    /// after the first move.
    pub fn swap(&mut self) -> bool {
        if !self.swap_eligible || self.history.len() != 1 {
            return false;
        }

        let first = self.history[0].clone();
        self.board.clear_cell(first.row, first.col);

        let (row, col) = (first.col, first.row);
        let taker = first.player.opponent();
        // the sole stone was just lifted, so the transpose cell is free
        self.board.place_stone(row, col, taker);

        let mv = Move::new(row, col, taker);
        tracing::info!(from = %first.notation, to = %mv.notation, "pie rule swap applied");
        self.history = vec![mv];
        self.current_player = Player::First;
        self.swap_eligible = false;
        true
    }

    /// Take back the most recent move. The undone mover is on turn again,
    /// any win is cleared and the game resumes. No-op on empty history.
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };

        tracing::debug!(notation = %last.notation, "move undone");
        self.board.clear_cell(last.row, last.col);
        self.current_player = last.player;
        self.game_over = false;
        self.winner = None;
        self.swap_eligible = self.history.len() == 1;
        true
    }

    /// One-way trapdoor for an external authority (a remote opponent or
    /// referee service) to assert the result. Acts only when `is_over` is
    /// true and a winner is provided; there is no transition back except
    /// an explicit reset or undo.
    pub fn set_external_result(&mut self, is_over: bool, winner: Option<Player>) {
        if is_over {
            if let Some(w) = winner {
                tracing::info!(winner = ?w, "result asserted externally");
                self.game_over = true;
                self.winner = Some(w);
            }
        }
    }

    /// Fresh game on the same grid size.
    pub fn reset(&mut self) {
        let size = self.board.size();
        self.board.resize(size);
        self.current_player = Player::First;
        self.history.clear();
        self.game_over = false;
        self.winner = None;
        self.swap_eligible = false;
    }

    /// Fresh game on a new grid size.
    pub fn resize(&mut self, new_size: usize) {
        self.board.resize(new_size);
        self.current_player = Player::First;
        self.history.clear();
        self.game_over = false;
        self.winner = None;
        self.swap_eligible = false;
    }

    // ========================================================================
    // SNAPSHOTS
    // ========================================================================

    /// Serialize the full game state.
    pub fn snapshot(&self) -> GameSnapshot {
        let n = self.board.size();
        let grid = (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| self.board.cell(row, col).unwrap_or(Cell::Empty))
                    .collect()
            })
            .collect();

        GameSnapshot {
            size: n,
            grid,
            current_player: self.current_player,
            move_history: self.history.clone(),
            game_over: self.game_over,
            winner: self.winner,
            swap_eligible: self.swap_eligible,
        }
    }

    /// Restore from a snapshot. The grid is rebuilt from the snapshot
    /// contents and the recorded `game_over`/`winner` are trusted as-is;
    /// win detection is not re-run. Rejects a snapshot whose grid size
    /// does not match this engine's configured size, or whose contents
    /// are inconsistent, leaving the prior state untouched.
    pub fn restore(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate(self.board.size())?;

        let n = snapshot.size;
        let mut board = Board::new(n);
        for (row, cells) in snapshot.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Cell::Stone(player) = cell {
                    board.place_stone(row, col, *player);
                }
            }
        }

        self.board = board;
        self.current_player = snapshot.current_player;
        self.history = snapshot.move_history.clone();
        self.game_over = snapshot.game_over;
        self.winner = snapshot.winner;
        self.swap_eligible = snapshot.swap_eligible;
        tracing::info!(size = n, moves = self.history.len(), "snapshot restored");
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
