#![allow(dead_code)]

pub mod llm;
pub mod transcripts;
