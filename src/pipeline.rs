use log::{debug, info, warn};

use crate::fetch::{FetchConfig, Fetcher, HttpFetcher};
use crate::page::{MarkupExtractor, PageExtractor};
use crate::tracks::select_track;
use crate::transcript::format_transcript;
use crate::{
    DEFAULT_WATCH_URL, LANGUAGE_UNAVAILABLE, NO_CAPTIONS, PipelineResult, TRANSCRIPT_FETCH_FAILED,
};

const NOT_FOUND_MARKER: &str = "404 Not Found";

/// Where the transcript field ended up after the caption steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptStatus {
    NoCaptions,
    LanguageUnavailable,
    FetchFailed,
    Text(String),
}

impl TranscriptStatus {
    pub fn into_text(self) -> String {
        match self {
            TranscriptStatus::NoCaptions => NO_CAPTIONS.to_string(),
            TranscriptStatus::LanguageUnavailable => LANGUAGE_UNAVAILABLE.to_string(),
            TranscriptStatus::FetchFailed => TRANSCRIPT_FETCH_FAILED.to_string(),
            TranscriptStatus::Text(text) => text,
        }
    }
}

/// Watch page to title and transcript.
pub struct Pipeline<F, X = MarkupExtractor> {
    fetcher: F,
    extractor: X,
    watch_url: String,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_extractor(fetcher, MarkupExtractor)
    }
}

impl<F: Fetcher, X: PageExtractor> Pipeline<F, X> {
    pub fn with_extractor(fetcher: F, extractor: X) -> Self {
        Self {
            fetcher,
            extractor,
            watch_url: DEFAULT_WATCH_URL.to_string(),
        }
    }

    /// Override the prefix the video ID is appended to.
    pub fn watch_url(mut self, watch_url: impl Into<String>) -> Self {
        self.watch_url = watch_url.into();
        self
    }

    pub fn page_url(&self, video_id: &str) -> String {
        format!("{}{video_id}", self.watch_url)
    }

    /// Fetch the watch page for `video_id` and build its title/transcript pair.
    ///
    /// Only a failure to fetch the watch page produces [`PipelineResult::Error`];
    /// every later problem is reported through a placeholder string.
    pub async fn get_video_details(&self, video_id: &str, lang: &str) -> PipelineResult {
        let url = self.page_url(video_id);
        info!("Fetching video details for {video_id} (lang={lang})");

        let page = match self.fetcher.fetch(&url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Watch page fetch failed: {e}");
                return PipelineResult::fetch_failed(&e);
            }
        };

        if page.contains(NOT_FOUND_MARKER) {
            info!("Video {video_id} not found");
            return PipelineResult::not_found();
        }

        let video_title = self.extractor.title(&page);
        let transcript = self.transcript(&page, lang).await.into_text();

        PipelineResult::Details {
            video_title,
            transcript,
        }
    }

    async fn transcript(&self, page: &str, lang: &str) -> TranscriptStatus {
        let Some(tracks) = self.extractor.caption_tracks(page) else {
            debug!("No caption listing in page");
            return TranscriptStatus::NoCaptions;
        };

        let Some(track) = select_track(&tracks, lang) else {
            debug!("No usable caption track for {lang} among {} tracks", tracks.len());
            return TranscriptStatus::LanguageUnavailable;
        };

        match self.fetcher.fetch(&track.base_url).await {
            Ok(payload) => TranscriptStatus::Text(format_transcript(&payload)),
            Err(e) => {
                warn!("Caption fetch failed for {}: {e}", track.vss_id);
                TranscriptStatus::FetchFailed
            }
        }
    }
}

/// Run the HTTP-backed pipeline for `video_id`.
///
/// A client that cannot be built is reported the same way as an unreachable
/// watch page.
pub async fn fetch_video_details(config: &FetchConfig, watch_url: &str, video_id: &str, lang: &str) -> PipelineResult {
    match HttpFetcher::new(config) {
        Ok(fetcher) => {
            Pipeline::new(fetcher)
                .watch_url(watch_url)
                .get_video_details(video_id, lang)
                .await
        }
        Err(e) => {
            warn!("Could not build HTTP client: {e}");
            PipelineResult::fetch_failed(&e)
        }
    }
}
