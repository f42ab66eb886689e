use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub mod commands;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

use self::commands::Command;
use self::state::AppState;

/// Keep a French vocabulary in a LaTeX document
#[derive(Parser, Debug)]
#[command(name = "lexique", version)]
struct Cli {
    /// JSON profile, created with defaults on first run
    #[arg(long, global = true, default_value = "lexique.json")]
    config: PathBuf,

    /// Vocabulary document, overriding the profile
    #[arg(long, global = true)]
    document: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = profile::load_profile(&cli.config)
        .with_context(|| format!("Failed to load profile {}", cli.config.display()))?;
    if let Some(document) = cli.document {
        config.store.document = document.display().to_string();
    }

    let mut state = AppState::new(config)?;
    commands::run(&mut state, cli.command).await
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
