//! Replay command - step through a saved game record
//!
//! Rebuilds the position move by move from the recorded history rather
//! than replaying through the engine: after a pie-rule swap the history
//! no longer alternates colors, so stones are placed directly.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;

use hexpie_core::{Board, GameSnapshot, Move, Player};

use crate::records;

#[derive(Args)]
pub struct ReplayArgs {
    /// Saved game record to replay
    pub file: PathBuf,

    /// Pause between moves, in milliseconds
    #[arg(long, default_value = "0")]
    pub delay_ms: u64,
}

pub fn run(args: ReplayArgs) -> Result<()> {
    let snapshot = records::load_snapshot(&args.file)?;
    println!(
        "Replaying {} ({} moves on a {2}x{2} board)",
        args.file.display(),
        snapshot.move_history.len(),
        snapshot.size
    );

    let mut board = Board::new(snapshot.size);
    for (i, mv) in snapshot.move_history.iter().enumerate() {
        apply_move(&mut board, i, mv)?;
        println!(
            "Move {}: {} plays {}",
            i + 1,
            color_label(mv.player),
            mv.notation
        );
        print!("{board}");
        if args.delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(args.delay_ms));
        }
    }

    print_outcome(&snapshot);
    Ok(())
}

fn apply_move(board: &mut Board, index: usize, mv: &Move) -> Result<()> {
    if !board.place_stone(mv.row, mv.col, mv.player) {
        bail!(
            "corrupt record: move {} ({}) targets an occupied or out-of-range cell",
            index + 1,
            mv.notation
        );
    }
    Ok(())
}

fn color_label(player: Player) -> &'static str {
    match player {
        Player::First => "Red",
        Player::Second => "Blue",
    }
}

fn print_outcome(snapshot: &GameSnapshot) {
    if snapshot.game_over {
        match snapshot.winner {
            Some(w) => println!("Result: {} wins.", color_label(w)),
            None => println!("Result: game over."),
        }
    } else {
        println!(
            "Game unfinished, {} to move.",
            color_label(snapshot.current_player)
        );
    }
}
