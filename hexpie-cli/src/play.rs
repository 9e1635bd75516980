//! Play command - interactive terminal game
//!
//! Hotseat by default; with `--remote` the second seat is taken by the
//! external move-suggestion service through a MatchSession.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::Args;

use hexpie_client::{Difficulty, MatchSession, RemoteClient};
use hexpie_core::{parse_move, GameEngine, Player};

use crate::records;

#[derive(Args)]
pub struct PlayArgs {
    /// Board size
    #[arg(long, default_value = "11")]
    pub size: usize,

    /// Base URL of a remote opponent service (hotseat when absent)
    #[arg(long)]
    pub remote: Option<String>,

    /// Remote search budget: easy, medium or hard
    #[arg(long, default_value = "medium")]
    pub difficulty: String,

    /// Let the remote opponent open the game
    #[arg(long)]
    pub go_second: bool,
}

pub fn run(args: PlayArgs) -> Result<()> {
    match args.remote.clone() {
        Some(url) => run_remote(&args, url),
        None => run_hotseat(args.size),
    }
}

fn player_label(player: Player) -> &'static str {
    match player {
        Player::First => "Red",
        Player::Second => "Blue",
    }
}

fn parse_difficulty(input: &str) -> Result<Difficulty> {
    match input.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => anyhow::bail!("unknown difficulty {:?}, expected easy, medium or hard", other),
    }
}

fn announce(game: &GameEngine) {
    print!("{}", game.board());
    if game.is_over() {
        match game.winner() {
            Some(w) => println!("Game over - {} wins!", player_label(w)),
            None => println!("Game over."),
        }
    }
}

fn prompt(game: &GameEngine) {
    print!("{} to move> ", player_label(game.current_player()));
    let _ = io::stdout().flush();
}

// ============================================================================
// HOTSEAT
// ============================================================================

fn run_hotseat(size: usize) -> Result<()> {
    let mut game = GameEngine::new(size);
    println!("Hotseat game on a {0}x{0} board.", size);
    println!("Enter a coordinate like c4, or: swap, undo, save [dir], load <file>, quit");
    announce(&game);
    prompt(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            prompt(&game);
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();

        match command {
            "quit" | "exit" => break,
            "swap" => {
                if game.swap() {
                    println!("Swap applied: Blue takes the opening.");
                    announce(&game);
                } else {
                    println!("Swap is only legal right after the first move.");
                }
            }
            "undo" => {
                if game.undo() {
                    announce(&game);
                } else {
                    println!("Nothing to undo.");
                }
            }
            "save" => {
                let dir = Path::new(argument.unwrap_or("."));
                match records::save_snapshot(dir, &game.snapshot()) {
                    Ok(path) => println!("Saved to {}", path.display()),
                    Err(err) => println!("Save failed: {err:#}"),
                }
            }
            "load" => match argument {
                Some(file) => match records::load_snapshot(Path::new(file)) {
                    Ok(snapshot) => {
                        if snapshot.size != game.board().size() {
                            game.resize(snapshot.size);
                        }
                        match game.restore(&snapshot) {
                            Ok(()) => announce(&game),
                            Err(err) => println!("Load failed: {err}"),
                        }
                    }
                    Err(err) => println!("Load failed: {err:#}"),
                },
                None => println!("Usage: load <file>"),
            },
            _ => match parse_move(input) {
                Ok((row, col)) => {
                    if game.make_move(row, col) {
                        announce(&game);
                    } else {
                        println!("Illegal move: {input}");
                    }
                }
                Err(err) => println!("{err}"),
            },
        }

        // keep prompting after a win: undo can reopen the game
        prompt(&game);
    }

    Ok(())
}

// ============================================================================
// REMOTE OPPONENT
// ============================================================================

fn run_remote(args: &PlayArgs, url: String) -> Result<()> {
    let difficulty = parse_difficulty(&args.difficulty)?;
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        let mut session = MatchSession::new(RemoteClient::new(url), difficulty, args.size);
        session.start(!args.go_second).await?;

        println!("Remote game on a {0}x{0} board. You play {1}.", args.size, if args.go_second { "Blue" } else { "Red" });
        println!("Enter a coordinate like c4, or: swap, advice, quit");
        announce(session.engine());
        prompt(session.engine());

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                prompt(session.engine());
                continue;
            }

            match input {
                "quit" | "exit" => break,
                "swap" => {
                    if session.swap().await {
                        println!("Swap applied.");
                        announce(session.engine());
                    } else {
                        println!("Swap is only legal right after the first move.");
                    }
                }
                "advice" => match session.advice().await {
                    Some(suggestion) => println!("Suggested: {suggestion}"),
                    None => println!("No advice available."),
                },
                _ => match parse_move(input) {
                    Ok((row, col)) => {
                        if session.play(row, col).await {
                            announce(session.engine());
                        } else {
                            println!("Illegal move: {input}");
                        }
                    }
                    Err(err) => println!("{err}"),
                },
            }

            if session.engine().is_over() {
                break;
            }
            prompt(session.engine());
        }

        Ok(())
    })
}
