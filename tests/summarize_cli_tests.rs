mod common;

use common::TestEnv;

#[test]
fn summarize_subcommand_is_available() {
    let output = TestEnv::new().run(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn summarize_warns_on_empty_link() {
    let output = TestEnv::new().run(&["summarize", ""]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "empty link is a warning, not a failure\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stderr.contains("Please enter a valid YouTube video link."));
    assert!(!stdout.contains("Summary"));
}

#[test]
fn summarize_json_reports_missing_input() {
    let output = TestEnv::new().run(&["summarize", "--json", "  "]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let outcome: serde_json::Value = serde_json::from_str(&stdout).expect("json outcome");
    assert_eq!(outcome["status"], "missing_input");
}

#[test]
fn summarize_requires_api_key() {
    let output = TestEnv::new().run(&["summarize", "https://www.youtube.com/watch?v=abc123"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "summarize should fail without an API key\nstderr:\n{}",
        stderr
    );
    assert!(
        stderr.contains("Gemini API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
}

#[test]
fn transcript_rejects_link_without_video_id() {
    let output = TestEnv::new().run(&["transcript", "https://youtu.be/abc123"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Failed to fetch transcript"));
    assert!(stderr.contains("no video id found"));
}
