//! API route handlers

pub mod game;
pub mod status;
