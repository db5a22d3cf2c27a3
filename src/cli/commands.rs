//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::ConfigCommand;
use crate::config::{Settings, API_KEY_ENV_VARS};
use crate::pipeline::{Outcome, Severity, SummaryPipeline, SUMMARY_HEADING};
use crate::youtube::{fetch_transcript, YoutubeTranscriptSource};

/// Summarize a video. Returns `false` when the request failed.
pub async fn summarize_video(settings: &Settings, url: &str, json: bool) -> Result<bool> {
    // An empty link never reaches the services, so it needs no API key either
    let outcome = if url.trim().is_empty() {
        Outcome::MissingInput
    } else {
        let pipeline = SummaryPipeline::from_settings(settings)?;
        pipeline.run(url).await
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }

    Ok(outcome.severity() != Severity::Error)
}

fn print_outcome(outcome: &Outcome) {
    match outcome.severity() {
        Severity::Success => {
            println!("## {}", SUMMARY_HEADING);
            println!();
            println!("{}", outcome.message());
        }
        Severity::Warning => eprintln!("warning: {}", outcome.message()),
        Severity::Error => eprintln!("{}", outcome.message()),
    }
}

/// Print the joined transcript of a video
pub async fn print_transcript(settings: &Settings, url: &str) -> Result<()> {
    let source = YoutubeTranscriptSource::from_settings(settings)?;
    let transcript = fetch_transcript(&source, url.trim())
        .await
        .context("Failed to fetch transcript")?;

    println!("{}", transcript);
    Ok(())
}

/// Run the web form
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    crate::web::serve(settings, &host, port).await
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if shown.has_api_key() {
                shown.llm.api_key = "<redacted>".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    config_path: String,
    config_exists: bool,
    provider: String,
    model: String,
    endpoint: String,
    checks: Vec<DoctorCheck>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("recap doctor");
    println!(
        "config: {} ({})",
        report.config_path,
        if report.config_exists {
            "found"
        } else {
            "not found, using defaults"
        }
    );
    println!("provider: {}", report.provider);
    println!("model: {}", report.model);
    println!("endpoint: {}", report.endpoint);
    println!();

    for check in &report.checks {
        println!("{:<12} {:<8} {}", check.name, check.status, check.detail);
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> Result<DoctorReport> {
    let config_path = Settings::config_path()?;

    let api_key = if settings.has_api_key() {
        DoctorCheck {
            name: "api-key",
            status: "ok",
            detail: "Gemini API key is configured".to_string(),
        }
    } else {
        DoctorCheck {
            name: "api-key",
            status: "missing",
            detail: format!(
                "set llm.api_key or one of {}",
                API_KEY_ENV_VARS.join(", ")
            ),
        }
    };

    let provider_supported = settings.llm.provider.eq_ignore_ascii_case("gemini");
    let provider = DoctorCheck {
        name: "provider",
        status: if provider_supported { "ok" } else { "invalid" },
        detail: if provider_supported {
            "gemini".to_string()
        } else {
            format!("unsupported provider '{}'", settings.llm.provider)
        },
    };

    let languages = DoctorCheck {
        name: "captions",
        status: if settings.transcript.languages.is_empty() {
            "invalid"
        } else {
            "ok"
        },
        detail: format!("languages: {}", settings.transcript.languages.join(", ")),
    };

    Ok(DoctorReport {
        config_exists: config_path.exists(),
        config_path: config_path.display().to_string(),
        provider: settings.llm.provider.clone(),
        model: settings.llm.model.clone(),
        endpoint: if settings.llm.endpoint.trim().is_empty() {
            "(default)".to_string()
        } else {
            settings.llm.endpoint.clone()
        },
        checks: vec![api_key, provider, languages],
    })
}
