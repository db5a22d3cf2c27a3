use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::config::Settings;
use crate::youtube::extract_video_id;
use crate::{RecapError, Result};

/// One caption entry as returned by the caption service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptFragment {
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// Duration in seconds
    pub duration: f64,
}

impl TranscriptFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Something that can return the caption track of a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptFragment>>;
}

/// Caption source backed by YouTube's public transcript endpoints.
pub struct YoutubeTranscriptSource {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeTranscriptSource {
    pub fn new(languages: Vec<String>, preserve_formatting: bool) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            RecapError::Transcript(format!("failed to create transcript client: {}", e))
        })?;

        Ok(Self {
            api,
            languages,
            preserve_formatting,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.transcript.languages.clone(),
            settings.transcript.preserve_formatting,
        )
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptFragment>> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| RecapError::Transcript(e.to_string()))?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|s| TranscriptFragment::new(s.text, s.start, s.duration))
            .collect())
    }
}

/// Join fragment texts, in order, with single spaces.
pub fn join_fragments(fragments: &[TranscriptFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a watch URL to the full transcript text.
pub async fn fetch_transcript(source: &dyn TranscriptSource, url: &str) -> Result<String> {
    let video_id = extract_video_id(url)?;
    tracing::info!(video_id = %video_id, "Fetching transcript");

    let fragments = source.fetch(&video_id).await?;
    let transcript = join_fragments(&fragments);

    tracing::debug!(
        video_id = %video_id,
        fragments = fragments.len(),
        chars = transcript.len(),
        "Transcript fetched"
    );

    Ok(transcript)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FixedSource {
        fragments: Vec<TranscriptFragment>,
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TranscriptSource for FixedSource {
        async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptFragment>> {
            self.requested.lock().unwrap().push(video_id.to_string());
            Ok(self.fragments.clone())
        }
    }

    #[test]
    fn joins_fragment_texts_in_order() {
        let fragments = vec![
            TranscriptFragment::new("Hello", 0.0, 1.2),
            TranscriptFragment::new("world", 1.2, 0.8),
        ];
        assert_eq!(join_fragments(&fragments), "Hello world");
    }

    #[test]
    fn join_keeps_fragment_text_untouched() {
        let fragments = vec![
            TranscriptFragment::new(" padded ", 0.0, 1.0),
            TranscriptFragment::new("", 1.0, 1.0),
            TranscriptFragment::new("end", 2.0, 1.0),
        ];
        assert_eq!(join_fragments(&fragments), " padded   end");
        assert_eq!(join_fragments(&[]), "");
    }

    #[tokio::test]
    async fn fetch_transcript_requests_extracted_id() {
        let source = FixedSource {
            fragments: vec![
                TranscriptFragment::new("one", 0.0, 1.0),
                TranscriptFragment::new("two", 1.0, 1.0),
            ],
            requested: Mutex::new(Vec::new()),
        };

        let text = fetch_transcript(&source, "https://youtube.com/watch?v=abc123&t=5")
            .await
            .unwrap();

        assert_eq!(text, "one two");
        assert_eq!(*source.requested.lock().unwrap(), vec!["abc123".to_string()]);
    }

    #[tokio::test]
    async fn fetch_transcript_skips_source_without_video_id() {
        let source = FixedSource {
            fragments: Vec::new(),
            requested: Mutex::new(Vec::new()),
        };

        let err = fetch_transcript(&source, "https://youtu.be/abc123")
            .await
            .unwrap_err();

        assert!(matches!(err, RecapError::MissingVideoId(_)));
        assert!(source.requested.lock().unwrap().is_empty());
    }
}
