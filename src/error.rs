use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to retrieve any body from a URL.
///
/// A response with a non-2xx status still carries a body and is not a
/// `FetchError`; only transport-level failures end up here.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch data from URL: {url}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid fetch configuration: {0}")]
    InvalidConfig(String),
}

impl FetchError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FetchError::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}
