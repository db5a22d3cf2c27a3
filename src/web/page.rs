//! HTML rendering for the summary form

use crate::pipeline::{Outcome, Severity, SUMMARY_HEADING};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
.header,.input-box{text-align:center}\
input[type=text]{width:100%;padding:.5rem;box-sizing:border-box}\
button{margin-top:.75rem;padding:.6rem 1.2rem;font-weight:bold}\
.warning{background:#fff4d6;padding:.75rem;border-radius:6px}\
.error{background:#ffe0e0;padding:.75rem;border-radius:6px}\
.summary p{white-space:pre-wrap}";

/// Render the full page: the form, then the outcome of the last submission.
pub fn render_page(url: &str, outcome: Option<&Outcome>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>YouTube Summarizer</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"header\"><h2>YouTube Video Summarizer</h2></div>\n");
    html.push_str("<div class=\"input-box\"><h4>Paste a YouTube Video Link Below:</h4></div>\n");
    html.push_str("<form method=\"post\" action=\"/\">\n");
    html.push_str("<label for=\"url\">Enter YouTube URL here</label>\n");
    html.push_str(&format!(
        "<input type=\"text\" id=\"url\" name=\"url\" value=\"{}\">\n",
        escape_html(url)
    ));
    html.push_str("<button type=\"submit\">Get Detailed Summary</button>\n");
    html.push_str("</form>\n");

    if let Some(outcome) = outcome {
        html.push_str(&render_outcome(outcome));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_outcome(outcome: &Outcome) -> String {
    let message = escape_html(&outcome.message());

    match outcome.severity() {
        Severity::Success => format!(
            "<div class=\"summary\">\n<h2>{}</h2>\n<p>{}</p>\n</div>\n",
            SUMMARY_HEADING, message
        ),
        Severity::Warning => format!("<div class=\"warning\">{}</div>\n", message),
        Severity::Error => format!("<div class=\"error\">{}</div>\n", message),
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_page_has_form_and_no_result() {
        let html = render_page("", None);
        assert!(html.contains("YouTube Video Summarizer"));
        assert!(html.contains("name=\"url\""));
        assert!(html.contains("Get Detailed Summary"));
        assert!(!html.contains(SUMMARY_HEADING));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn summary_is_rendered_under_heading() {
        let outcome = Outcome::Summary {
            text: "summary <text>".into(),
        };
        let html = render_page("https://youtube.com/watch?v=a&t=1", Some(&outcome));

        assert!(html.contains("<h2>📝 Summary</h2>\n<p>summary &lt;text&gt;</p>"));
        assert!(html.contains("value=\"https://youtube.com/watch?v=a&amp;t=1\""));
    }

    #[test]
    fn failures_render_only_the_message() {
        let outcome = Outcome::TranscriptFailed {
            details: "no captions".into(),
        };
        let html = render_page("x", Some(&outcome));
        assert!(html.contains("<div class=\"error\">Error fetching transcript: no captions</div>"));
        assert!(!html.contains(SUMMARY_HEADING));

        let html = render_page("", Some(&Outcome::MissingInput));
        assert!(html.contains("<div class=\"warning\">Please enter a valid YouTube video link.</div>"));
    }
}
