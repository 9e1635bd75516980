//! HEXPIE Client - remote move/advice service consumer
//!
//! This crate talks to the external move-suggestion backend:
//! - Wire types for the four service operations (init, move, advice, swap)
//! - `RemoteClient`, a thin reqwest wrapper
//! - `MatchSession`, the orchestrating caller that serializes local input
//!   against in-flight remote replies with a turn lock
//!
//! Every field the service returns is treated as optional and untrusted:
//! notation goes through the engine's codec and moves are applied through
//! the ordinary `make_move` path so legality stays locally enforced.

mod remote;
mod session;

pub use remote::{AdviceReply, Difficulty, InitReply, MoveReply, RemoteClient, SwapReply};
pub use session::MatchSession;
