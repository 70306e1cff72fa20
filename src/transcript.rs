use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

const WRAPPER_OPEN: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript>"#;
const WRAPPER_CLOSE: &str = "</transcript>";
const SEGMENT_CLOSE: &str = "</text>";

/// Flatten a timed-text caption payload into one line per segment.
///
/// Timing attributes are discarded, blank segments are dropped and entities in
/// the remaining text are decoded. Malformed input yields whatever text could
/// be recovered, possibly nothing.
pub fn format_transcript(payload: &str) -> String {
    let body = payload.replace(WRAPPER_OPEN, "").replace(WRAPPER_CLOSE, "");

    let mut transcript = String::new();
    for fragment in body.split(SEGMENT_CLOSE) {
        let text = TAG_RE.replace_all(fragment, "");
        if text.trim().is_empty() {
            continue;
        }
        transcript.push_str(&html_escape::decode_html_entities(&text));
        transcript.push('\n');
    }

    transcript.trim().to_string()
}
