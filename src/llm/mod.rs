//! LLM module for recap
//!
//! Prompt assembly and the summary call to the Gemini API.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, LlmProvider};
pub use gemini::GeminiClient;
pub use prompts::{assemble_prompt, SUMMARY_PROMPT_TEMPLATE};
