//! HEXPIE CLI - Command-line interface
//!
//! Commands:
//! - play: Interactive game in the terminal, locally or against a remote opponent
//! - serve: Start the web board server
//! - replay: Step through a saved game record

mod play;
mod records;
mod replay;
mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexpie")]
#[command(about = "Hex board game with the pie rule")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(play::PlayArgs),
    /// Start the web board server
    Serve(serve::ServeArgs),
    /// Step through a saved game record
    Replay(replay::ReplayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Serve(args) => serve::run(args),
        Commands::Replay(args) => replay::run(args),
    }
}
