use crate::{RecapError, Result};

/// Pull the video id out of a watch URL.
///
/// Takes everything after the first `v=` up to the first `&`. Short links,
/// embeds and other URL shapes are not recognised.
pub fn extract_video_id(url: &str) -> Result<String> {
    let (_, rest) = url
        .split_once("v=")
        .ok_or_else(|| RecapError::MissingVideoId(url.to_string()))?;

    let id = rest.split_once('&').map_or(rest, |(id, _)| id);
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn truncates_at_first_ampersand() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abc123&t=5").unwrap(),
            "abc123"
        );
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abc&list=x&index=2").unwrap(),
            "abc"
        );
    }

    #[test]
    fn uses_first_v_param_wherever_it_appears() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?feature=share&v=xyz&v=other").unwrap(),
            "xyz"
        );
    }

    #[test]
    fn missing_v_param_is_an_error() {
        for url in ["https://youtu.be/dQw4w9WgXcQ", "not a url", ""] {
            let err = extract_video_id(url).unwrap_err();
            assert!(matches!(err, RecapError::MissingVideoId(ref u) if u == url));
        }
    }

    #[test]
    fn empty_id_is_passed_through() {
        assert_eq!(extract_video_id("https://youtube.com/watch?v=&t=1").unwrap(), "");
    }
}
