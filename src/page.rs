use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::UNKNOWN_TITLE;
use crate::tracks::CaptionTrack;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<title>(.*?)</title>").unwrap());
static CAPTION_TRACKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""captionTracks":(\[.*?\])"#).unwrap());

const TITLE_SUFFIX: &str = " - YouTube";

/// Pulls the title and caption listing out of a fetched watch page.
pub trait PageExtractor: Send + Sync {
    /// Page title, or [`UNKNOWN_TITLE`] when none is present.
    fn title(&self, page: &str) -> String;

    /// Caption tracks listed in the page. `None` when the listing is absent
    /// or cannot be decoded.
    fn caption_tracks(&self, page: &str) -> Option<Vec<CaptionTrack>>;
}

/// Pattern-based extraction over the raw watch page markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupExtractor;

impl PageExtractor for MarkupExtractor {
    fn title(&self, page: &str) -> String {
        extract_title(page)
    }

    fn caption_tracks(&self, page: &str) -> Option<Vec<CaptionTrack>> {
        locate_tracks(page)
    }
}

pub fn extract_title(page: &str) -> String {
    match TITLE_RE.captures(page) {
        Some(caps) => html_escape::decode_html_entities(&caps[1]).replace(TITLE_SUFFIX, ""),
        None => {
            debug!("No <title> element in page");
            UNKNOWN_TITLE.to_string()
        }
    }
}

pub fn locate_tracks(page: &str) -> Option<Vec<CaptionTrack>> {
    let caps = CAPTION_TRACKS_RE.captures(page)?;
    match serde_json::from_str::<Vec<CaptionTrack>>(&caps[1]) {
        Ok(tracks) => {
            debug!("Located {} caption tracks", tracks.len());
            Some(tracks)
        }
        Err(e) => {
            warn!("Malformed captionTracks listing: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_strips_suffix() {
        let page = "<html><head><title>Some Video - YouTube</title></head></html>";
        assert_eq!(extract_title(page), "Some Video");
    }

    #[test]
    fn test_extract_title_decodes_entities() {
        let page = "<title>Tom &amp; Jerry&#39;s &quot;Best&quot; - YouTube</title>";
        assert_eq!(extract_title(page), "Tom & Jerry's \"Best\"");
    }

    #[test]
    fn test_extract_title_suffix_removed_anywhere() {
        let page = "<title>Intro - YouTube Rewind - YouTube</title>";
        assert_eq!(extract_title(page), "Intro Rewind");
    }

    #[test]
    fn test_extract_title_first_occurrence() {
        let page = "<title>First</title><svg><title>Second</title></svg>";
        assert_eq!(extract_title(page), "First");
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(extract_title("<html><body>nothing</body></html>"), "Unknown Title");
        assert_eq!(extract_title("<title>split\nacross lines</title>"), "Unknown Title");
    }

    #[test]
    fn test_locate_tracks() {
        let page = r#"var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&lang=en","name":{"simpleText":"English"},"vssId":".en","languageCode":"en","isTranslatable":true},{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&kind=asr","vssId":"a.en","languageCode":"en","kind":"asr"}],"audioTracks":[]}}};"#;
        let tracks = locate_tracks(page).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].vss_id.as_deref(), Some(".en"));
        assert_eq!(
            tracks[0].base_url.as_deref(),
            Some("https://www.youtube.com/api/timedtext?v=abc&lang=en")
        );
        assert_eq!(tracks[1].kind.as_deref(), Some("asr"));
        assert!(tracks[1].is_auto_generated());
    }

    #[test]
    fn test_locate_tracks_absent() {
        assert!(locate_tracks("<html>no captions here</html>").is_none());
    }

    #[test]
    fn test_locate_tracks_empty_listing() {
        assert_eq!(locate_tracks(r#"{"captionTracks":[]}"#), Some(vec![]));
    }

    #[test]
    fn test_locate_tracks_malformed() {
        assert!(locate_tracks(r#"{"captionTracks":[{"vssId":".en",}]}"#).is_none());
        assert!(locate_tracks(r#"{"captionTracks":["not a record"]}"#).is_none());
    }

    #[test]
    fn test_markup_extractor_delegates() {
        let page = r#"<title>Clip - YouTube</title>{"captionTracks":[{"vssId":".en","baseUrl":"u"}]}"#;
        let extractor = MarkupExtractor;
        assert_eq!(extractor.title(page), "Clip");
        assert_eq!(extractor.caption_tracks(page).map(|t| t.len()), Some(1));
    }
}
