use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;
mod demo;
mod platform;
mod scenario;

use commands::theme::ThemeAction;
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio page behavior engine demo harness")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scripted browsing session against the demo page
    Run {
        /// Scenario file (TOML); omitted, the built-in walkthrough runs
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },
    /// Validate contact-form input
    Validate {
        /// Sender email address
        #[arg(long)]
        email: Option<String>,
        /// Message body
        #[arg(long)]
        message: Option<String>,
    },
    /// Inspect or flip the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        None => commands::run::run(config, Scenario::builtin()).await,
        Some(Commands::Run { scenario }) => {
            let scenario = match scenario {
                Some(path) => Scenario::load(&path)?,
                None => Scenario::builtin(),
            };
            commands::run::run(config, scenario).await
        }
        Some(Commands::Validate { email, message }) => commands::validate::run(email, message),
        Some(Commands::Theme { action }) => {
            commands::theme::run(action.unwrap_or(ThemeAction::Get))
        }
    }
}
