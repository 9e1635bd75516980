//! HEXPIE Core - Hex game engine
//!
//! This crate provides the core game logic for HEXPIE:
//! - Board surface (N x N cell grid with hex adjacency)
//! - Display geometry (grid <-> canvas coordinate mapping)
//! - Game engine (turn order, pie-rule swap, undo, win detection)
//! - Move notation codec
//! - Serializable game snapshots for save/load/replay

pub mod board;
pub mod game;
pub mod geometry;
pub mod notation;
pub mod snapshot;

// Re-exports for convenient access
pub use board::{Board, Cell, DEFAULT_SIZE, NEIGHBOR_OFFSETS};
pub use game::{GameEngine, Move, Player};
pub use geometry::Layout;
pub use notation::{column_label, format_move, parse_move, NotationError};
pub use snapshot::{GameSnapshot, SnapshotError};
