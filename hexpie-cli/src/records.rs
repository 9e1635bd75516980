//! Saved game records on disk
//!
//! File I/O stays out of the core engine; this module moves snapshots
//! between the engine and timestamped JSON files.

use anyhow::Context;
use hexpie_core::GameSnapshot;
use std::path::{Path, PathBuf};

/// Write a snapshot as `hex_game_<timestamp>.json` under `dir` and
/// return the created path.
pub fn save_snapshot(dir: &Path, snapshot: &GameSnapshot) -> anyhow::Result<PathBuf> {
    let name = format!(
        "hex_game_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(name);
    let content = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "game saved");
    Ok(path)
}

/// Read a snapshot back, rejecting unreadable or inconsistent records.
pub fn load_snapshot(path: &Path) -> anyhow::Result<GameSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let snapshot: GameSnapshot =
        serde_json::from_str(&content).context("record is not a valid game snapshot")?;
    snapshot
        .validate(snapshot.size)
        .context("record is internally inconsistent")?;
    Ok(snapshot)
}
