//! recap - Summarize YouTube videos from their caption transcripts
//!
//! Paste a link, get the gist: captions are fetched, handed to Gemini with a
//! fixed instruction, and the summary is shown in a web form, a terminal form,
//! or on stdout.

pub mod cli;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod tui;
pub mod web;
pub mod youtube;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("no video id found in '{0}' (expected a v= parameter)")]
    MissingVideoId(String),

    #[error("{0}")]
    Transcript(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
