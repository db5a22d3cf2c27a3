use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::LlmProvider;

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Client for the Gemini `generateContent` API.
///
/// The request carries only the prompt, so the service's default sampling
/// settings apply.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "Gemini API key is missing. Set llm.api_key in config, RECAP_GEMINI_API_KEY or GOOGLE_API_KEY."
            );
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_GEMINI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(Duration::from_secs(settings.llm.timeout_secs.max(1)))
                .build()
                .context("Failed to build Gemini HTTP client")?,
            api_key,
            model,
            endpoint,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GeminiGenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "Calling Gemini");

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| e.without_url())
            .context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Gemini returned an error status ({}): {}",
                status,
                error_message(&body)
            );
        }

        let payload: GeminiGenerateContentResponse = response
            .json()
            .await
            .map_err(|e| e.without_url())
            .context("Failed to parse Gemini response")?;

        let text = payload.text();
        if text.is_empty() {
            anyhow::bail!("Gemini response did not contain any text");
        }

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GeminiGenerateContentRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiGenerateContentResponse {
    /// Text parts of the first candidate, concatenated in order.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Pull `error.message` out of a Gemini error body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<GeminiErrorResponse>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| body.trim().to_string())
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiContentResponse,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key() -> Settings {
        let mut settings = Settings::default();
        settings.llm.api_key = " secret ".to_string();
        settings
    }

    #[test]
    fn request_url_uses_trimmed_endpoint_and_model() {
        let mut settings = settings_with_key();
        settings.llm.endpoint = "http://localhost:1234/v1beta/".to_string();
        settings.llm.model = " gemini-pro ".to_string();

        let client = GeminiClient::from_settings(&settings).unwrap();
        assert_eq!(
            client.request_url(),
            "http://localhost:1234/v1beta/models/gemini-pro:generateContent?key=secret"
        );
    }

    #[test]
    fn blank_model_falls_back_to_default() {
        let mut settings = settings_with_key();
        settings.llm.model = "  ".to_string();

        let client = GeminiClient::from_settings(&settings).unwrap();
        assert_eq!(client.model(), DEFAULT_GEMINI_MODEL);
        assert!(client.request_url().starts_with(DEFAULT_GEMINI_ENDPOINT));
    }

    fn response(json: serde_json::Value) -> GeminiGenerateContentResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn reply_text_joins_first_candidate_parts() {
        let payload = response(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "One." }, { "text": " Two.\n" }] } },
                { "content": { "parts": [{ "text": "other candidate" }] } }
            ]
        }));
        assert_eq!(payload.text(), "One. Two.\n");
        assert_eq!(response(serde_json::json!({})).text(), "");
    }

    #[test]
    fn error_message_prefers_gemini_error_field() {
        let body = r#"{ "error": { "code": 400, "message": "API key not valid." } }"#;
        assert_eq!(error_message(body), "API key not valid.");
        assert_eq!(error_message(" upstream down \n"), "upstream down");
    }

    #[test]
    fn request_body_has_single_text_part() {
        let body = GeminiGenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "prompt".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "prompt" }] }] })
        );
    }
}
