use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recap::youtube::{TranscriptFragment, TranscriptSource};
use recap::RecapError;

#[derive(Clone, Default)]
pub struct MockTranscriptSource {
    pub fragments: Vec<TranscriptFragment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptSource {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            fragments: texts
                .iter()
                .enumerate()
                .map(|(i, text)| TranscriptFragment::new(*text, i as f64, 1.0))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::default()
        }
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn fetch(&self, video_id: &str) -> recap::Result<Vec<TranscriptFragment>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(RecapError::Transcript(msg.clone()));
        }
        Ok(self.fragments.clone())
    }
}
