//! Configuration module for recap
//!
//! Handles loading settings from TOML files and the environment.

mod settings;

pub use settings::{Settings, API_KEY_ENV_VARS};
