//! YouTube module for recap
//!
//! Video id extraction and caption transcript retrieval.

mod transcript;
mod video_id;

pub use transcript::{
    fetch_transcript, join_fragments, TranscriptFragment, TranscriptSource,
    YoutubeTranscriptSource,
};
pub use video_id::extract_video_id;
