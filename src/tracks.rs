use log::debug;
use serde::Deserialize;

/// One entry of the `captionTracks` listing embedded in a watch page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaptionTrack {
    /// Kind and language, e.g. `.en`, `.fr-CA` or `a.en` for auto-generated.
    #[serde(rename = "vssId")]
    pub vss_id: Option<String>,
    #[serde(rename = "baseUrl")]
    pub base_url: Option<String>,
    #[serde(rename = "languageCode")]
    pub language_code: Option<String>,
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_auto_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr") || self.vss_id.as_deref().is_some_and(|id| id.starts_with("a."))
    }

    fn matches_lang(&self, lang: &str) -> bool {
        let Some(vss_id) = self.vss_id.as_deref() else {
            return false;
        };
        vss_id.contains(&format!(".{lang}")) || vss_id.contains(&format!("a.{lang}"))
    }
}

/// A track that matched the language preference and has a payload URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedTrack {
    pub vss_id: String,
    pub base_url: String,
}

/// Pick the first track whose `vssId` names `lang`.
///
/// Only the first match is considered: if it has no `baseUrl` there is no
/// selection, even when a later track would also match.
pub fn select_track(tracks: &[CaptionTrack], lang: &str) -> Option<SelectedTrack> {
    let track = tracks.iter().find(|t| t.matches_lang(lang))?;
    let vss_id = track.vss_id.clone()?;
    debug!("Matched caption track {vss_id} (auto-generated: {})", track.is_auto_generated());

    match track.base_url.clone() {
        Some(base_url) => Some(SelectedTrack { vss_id, base_url }),
        None => {
            debug!("Caption track {vss_id} has no baseUrl");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(vss_id: &str, base_url: Option<&str>) -> CaptionTrack {
        CaptionTrack {
            vss_id: Some(vss_id.to_string()),
            base_url: base_url.map(str::to_string),
            ..CaptionTrack::default()
        }
    }

    #[test]
    fn test_select_skips_other_language() {
        let tracks = vec![track("a.en", Some("X")), track(".fr", Some("Y"))];
        let selected = select_track(&tracks, "fr").unwrap();
        assert_eq!(selected.vss_id, ".fr");
        assert_eq!(selected.base_url, "Y");
    }

    #[test]
    fn test_select_first_match_wins() {
        let tracks = vec![track(".en", Some("manual")), track("a.en", Some("auto"))];
        assert_eq!(select_track(&tracks, "en").unwrap().base_url, "manual");

        let tracks = vec![track("a.en", Some("auto")), track(".en", Some("manual"))];
        assert_eq!(select_track(&tracks, "en").unwrap().base_url, "auto");
    }

    #[test]
    fn test_select_regional_variant_by_substring() {
        let tracks = vec![track(".en-GB", Some("gb"))];
        assert_eq!(select_track(&tracks, "en").unwrap().base_url, "gb");
    }

    #[test]
    fn test_select_no_match() {
        let tracks = vec![track(".de", Some("X")), track("a.es", Some("Y"))];
        assert!(select_track(&tracks, "fr").is_none());
        assert!(select_track(&[], "en").is_none());
    }

    #[test]
    fn test_select_first_match_without_base_url() {
        let tracks = vec![track(".en", None), track("a.en", Some("auto"))];
        assert!(select_track(&tracks, "en").is_none());
    }

    #[test]
    fn test_track_without_vss_id_never_matches() {
        let tracks = vec![CaptionTrack {
            base_url: Some("X".to_string()),
            ..CaptionTrack::default()
        }];
        assert!(select_track(&tracks, "en").is_none());
    }

    #[test]
    fn test_is_auto_generated() {
        assert!(track("a.en", None).is_auto_generated());
        assert!(!track(".en", None).is_auto_generated());
        let asr = CaptionTrack {
            kind: Some("asr".to_string()),
            ..CaptionTrack::default()
        };
        assert!(asr.is_auto_generated());
    }
}
