//! Serializable game snapshots
//!
//! The flat save/load/replay record: grid contents, turn, history and
//! result in one serde-friendly struct. The engine performs no file I/O;
//! callers move snapshots over HTTP or to disk themselves.

use crate::board::Cell;
use crate::game::{Move, Player};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot is for a {found}x{found} grid, engine is configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("recorded move {notation} is outside the grid")]
    MoveOutOfRange { notation: String },
    #[error("history records {moves} moves but the grid holds {stones} stones")]
    Inconsistent { moves: usize, stones: usize },
}

/// Complete game state at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: usize,
    pub grid: Vec<Vec<Cell>>,
    pub current_player: Player,
    pub move_history: Vec<Move>,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub swap_eligible: bool,
}

impl GameSnapshot {
    /// Check the snapshot against an engine configured for
    /// `expected_size`, without mutating anything.
    pub fn validate(&self, expected_size: usize) -> Result<(), SnapshotError> {
        if self.size != expected_size || self.grid.len() != self.size {
            return Err(SnapshotError::SizeMismatch {
                expected: expected_size,
                found: if self.grid.len() != self.size {
                    self.grid.len()
                } else {
                    self.size
                },
            });
        }

        for (row, cells) in self.grid.iter().enumerate() {
            if cells.len() != self.size {
                return Err(SnapshotError::RaggedGrid {
                    row,
                    expected: self.size,
                    found: cells.len(),
                });
            }
        }

        for mv in &self.move_history {
            if mv.row >= self.size || mv.col >= self.size {
                return Err(SnapshotError::MoveOutOfRange {
                    notation: mv.notation.clone(),
                });
            }
        }

        let stones = self
            .grid
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .count();
        if stones != self.move_history.len() {
            return Err(SnapshotError::Inconsistent {
                moves: self.move_history.len(),
                stones,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameEngine;

    #[test]
    fn test_json_round_trip() {
        let mut game = GameEngine::new(5);
        game.make_move(0, 1);
        game.make_move(2, 3);
        let snap = game.snapshot();

        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_validate_accepts_engine_output() {
        let mut game = GameEngine::new(5);
        game.make_move(0, 0);
        game.swap();
        game.make_move(1, 1);
        assert_eq!(game.snapshot().validate(5), Ok(()));
    }

    #[test]
    fn test_validate_ragged_grid() {
        let mut game = GameEngine::new(3);
        game.make_move(0, 0);
        let mut snap = game.snapshot();
        snap.grid[1].pop();
        assert!(matches!(
            snap.validate(3),
            Err(SnapshotError::RaggedGrid { row: 1, .. })
        ));
    }

    #[test]
    fn test_validate_move_out_of_range() {
        let mut game = GameEngine::new(3);
        game.make_move(0, 0);
        let mut snap = game.snapshot();
        snap.move_history[0].row = 9;
        assert!(matches!(
            snap.validate(3),
            Err(SnapshotError::MoveOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_stone_count_mismatch() {
        let mut game = GameEngine::new(3);
        game.make_move(0, 0);
        let mut snap = game.snapshot();
        snap.grid[2][2] = Cell::Stone(Player::Second);
        assert_eq!(
            snap.validate(3),
            Err(SnapshotError::Inconsistent { moves: 1, stones: 2 })
        );
    }

    #[test]
    fn test_missing_fields_rejected_by_serde() {
        let err = serde_json::from_str::<GameSnapshot>(r#"{"size": 3}"#);
        assert!(err.is_err());
    }
}
