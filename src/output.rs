use eyre::Result;
use serde_json::json;

use crate::PipelineResult;

const MISSING_VIDEO_ID: &str = "Missing video_id parameter";

/// Render a pipeline result as pretty-printed JSON (two-space indent)
pub fn render_json(result: &PipelineResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Error object returned when no video ID was supplied
pub fn render_missing_video_id() -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({ "error": MISSING_VIDEO_ID }))?)
}
