//! Serve command - start the web board server

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hexpie_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Directory containing the static board frontend
    #[arg(long, default_value = "hexpie/frontend")]
    pub static_dir: PathBuf,

    /// Board size
    #[arg(long, default_value = "11")]
    pub size: usize,
}

pub fn run(args: ServeArgs) -> Result<()> {
    let config = configure_server(&args)?;

    tracing::info!("Starting HEXPIE board server on port {}", config.port);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async { run_server(config).await })
}

fn configure_server(args: &ServeArgs) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
        board_size: args.size,
    })
}

fn validate_static_dir(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Server will start but may not serve files.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}
