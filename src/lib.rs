pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod page;
pub mod pipeline;
pub mod tracks;
pub mod transcript;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use error::FetchError;
pub use fetch::{FetchConfig, Fetcher, HttpFetcher};
pub use pipeline::Pipeline;

pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

pub const FETCH_FAILED_ERROR: &str = "Unable to fetch video details.";
pub const VIDEO_NOT_FOUND: &str = "Video not found";
pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const NO_CAPTIONS: &str = "No captions available.";
pub const LANGUAGE_UNAVAILABLE: &str = "Captions not available for the selected language.";
pub const TRANSCRIPT_FETCH_FAILED: &str = "Error fetching transcript.";

/// Outcome of a single pipeline run, serialized as one of two JSON shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PipelineResult {
    /// The watch page itself could not be fetched.
    Error { error: String, message: String },
    Details {
        #[serde(rename = "videoTitle")]
        video_title: String,
        transcript: String,
    },
}

impl PipelineResult {
    pub fn fetch_failed(err: &FetchError) -> Self {
        PipelineResult::Error {
            error: FETCH_FAILED_ERROR.to_string(),
            message: err.to_string(),
        }
    }

    pub fn not_found() -> Self {
        PipelineResult::Details {
            video_title: VIDEO_NOT_FOUND.to_string(),
            transcript: VIDEO_NOT_FOUND.to_string(),
        }
    }
}

static BARE_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap());
static URL_ID_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:youtube\.com/watch\?.*v=)([a-zA-Z0-9_-]{11})",
        r"youtu\.be/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/embed/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})",
    ]
    .iter()
    .map(|re| Regex::new(re).unwrap())
    .collect()
});

/// Extract video ID from various YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if BARE_ID_RE.is_match(input) {
        return Some(input.to_string());
    }

    URL_ID_RES
        .iter()
        .find_map(|re| re.captures(input))
        .map(|caps| caps[1].to_string())
}

/// Video ID to request: the ID inside a recognised URL, otherwise the trimmed
/// input unchanged. `None` only for blank input.
pub fn resolve_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(extract_video_id(input).unwrap_or_else(|| input.to_string()))
}
