/// Instruction placed in front of every transcript.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "
Please summarize the following YouTube transcript into 250 words or less, highlighting the key points and main ideas:
";

/// Build the prompt sent to the model: the template followed by the transcript.
///
/// Nothing is truncated; long transcripts are left to the model's own input limit.
pub fn assemble_prompt(template: &str, transcript: &str) -> String {
    let mut prompt = String::with_capacity(template.len() + transcript.len());
    prompt.push_str(template);
    prompt.push_str(transcript);
    prompt
}
