//! Summary pipeline: link in, summary (or a message saying why not) out.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::config::Settings;
use crate::llm::{assemble_prompt, build_provider, LlmProvider};
use crate::youtube::{fetch_transcript, TranscriptSource, YoutubeTranscriptSource};

/// Heading shown above a successful summary.
pub const SUMMARY_HEADING: &str = "📝 Summary";

/// Warning shown when the form is submitted without a link.
pub const MISSING_INPUT_WARNING: &str = "Please enter a valid YouTube video link.";

/// Details reported when the caption track has no text.
pub const NO_CAPTIONS: &str = "no captions returned";

/// How a rendered outcome should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Result of one pass through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// No link was given; nothing was fetched.
    MissingInput,
    /// Id extraction or caption fetch failed, or the captions were empty;
    /// the model was not called.
    TranscriptFailed { details: String },
    /// The model call failed.
    GenerationFailed { details: String },
    Summary { text: String },
}

impl Outcome {
    /// Text to display for this outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::MissingInput => MISSING_INPUT_WARNING.to_string(),
            Outcome::TranscriptFailed { details } => {
                format!("Error fetching transcript: {}", details)
            }
            Outcome::GenerationFailed { details } => {
                format!("Error generating summary: {}", details)
            }
            Outcome::Summary { text } => text.clone(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Outcome::MissingInput => Severity::Warning,
            Outcome::TranscriptFailed { .. } | Outcome::GenerationFailed { .. } => Severity::Error,
            Outcome::Summary { .. } => Severity::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity() == Severity::Success
    }
}

/// Transcript source, model and prompt template wired together.
pub struct SummaryPipeline {
    transcripts: Arc<dyn TranscriptSource>,
    llm: Arc<dyn LlmProvider>,
    template: String,
}

impl SummaryPipeline {
    pub fn new(
        transcripts: Arc<dyn TranscriptSource>,
        llm: Arc<dyn LlmProvider>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            transcripts,
            llm,
            template: template.into(),
        }
    }

    /// Build the production pipeline: YouTube captions and the configured LLM.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transcripts = Arc::new(YoutubeTranscriptSource::from_settings(settings)?);
        let llm = build_provider(settings)?;

        Ok(Self::new(transcripts, llm, settings.prompt.template.clone()))
    }

    /// Run one request. Every failure is folded into the returned outcome.
    pub async fn run(&self, input: &str) -> Outcome {
        let url = input.trim();
        if url.is_empty() {
            return Outcome::MissingInput;
        }

        let transcript = match fetch_transcript(self.transcripts.as_ref(), url).await {
            Ok(transcript) => transcript,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Transcript fetch failed");
                return Outcome::TranscriptFailed {
                    details: e.to_string(),
                };
            }
        };

        if transcript.is_empty() {
            tracing::warn!(url = %url, "Transcript was empty");
            return Outcome::TranscriptFailed {
                details: NO_CAPTIONS.to_string(),
            };
        }

        let prompt = assemble_prompt(&self.template, &transcript);

        tracing::info!(prompt_chars = prompt.len(), "Summarizing transcript");
        match self.llm.generate(&prompt).await {
            Ok(text) => Outcome::Summary { text },
            Err(e) => {
                let details = format!("{:#}", e);
                tracing::warn!(error = %details, "Summary generation failed");
                Outcome::GenerationFailed { details }
            }
        }
    }
}
