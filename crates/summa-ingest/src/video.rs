use once_cell::sync::Lazy;
use regex::Regex;

static WATCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)").unwrap()
});

static LEGACY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"youtube\.com/v/([^&\n?#]+)").unwrap());

/// Extract the video ID from a YouTube URL.
///
/// Recognizes `watch?v=`, `youtu.be/`, `embed/` and the legacy `/v/` forms.
/// Query parameters and fragments after the ID are ignored.
pub fn extract_video_id(url: &str) -> Option<String> {
    [&*WATCH_RE, &*LEGACY_RE]
        .iter()
        .find_map(|re| re.captures(url))
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_short_and_embed_urls() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ#start").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_legacy_url() {
        assert_eq!(
            extract_video_id("http://youtube.com/v/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_non_youtube_url() {
        assert_eq!(extract_video_id("https://vimeo.com/123456"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/channel/UC123"), None);
    }
}
