//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// recap - Summarize YouTube videos from their caption transcripts
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a YouTube video from its transcript
    Summarize {
        /// YouTube watch URL (must contain a v= parameter)
        url: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a video's transcript without summarizing it
    Transcript {
        /// YouTube watch URL (must contain a v= parameter)
        url: String,
    },

    /// Serve the web form
    Serve {
        /// Address to bind (defaults to server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Launch the interactive TUI
    Tui,

    /// Check configuration and API key setup
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
