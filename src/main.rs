//! recap - Summarize YouTube videos from their caption transcripts
//!
//! Entry point for the recap CLI application.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recap::cli::{Cli, Commands};
use recap::config::Settings;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Pick up GOOGLE_API_KEY and friends from a local .env file
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; the TUI owns the terminal so keep it quiet there
    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Tui, false) => "warn",
        _ => "info",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            recap::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Summarize { url, json } => {
                    if !recap::cli::commands::summarize_video(&settings, &url, json).await? {
                        return Ok(ExitCode::FAILURE);
                    }
                }
                Commands::Transcript { url } => {
                    recap::cli::commands::print_transcript(&settings, &url).await?;
                }
                Commands::Serve { host, port } => {
                    recap::cli::commands::serve(&settings, host, port).await?;
                }
                Commands::Tui => {
                    recap::tui::run(&settings).await?;
                }
                Commands::Doctor { json } => {
                    recap::cli::commands::run_doctor(&settings, json).await?;
                }
                Commands::Config(config_cmd) => {
                    recap::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
