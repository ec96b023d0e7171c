use reqwest::StatusCode;
use thiserror::Error;

/// Failures reading from the catalog provider.
///
/// Callers at the screen boundary treat `Unavailable` as "no data" and
/// degrade to an empty result set; only `NotFound` is surfaced distinctly.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {message}")]
    Unavailable {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("movie {movie_id} not found in catalog")]
    NotFound { movie_id: u64 },

    #[error("failed to decode catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        CatalogError::Unavailable {
            status: err.status(),
            message: err.to_string(),
        }
    }

    pub(crate) fn status(status: StatusCode, body: String) -> Self {
        CatalogError::Unavailable {
            status: Some(status),
            message: format!("HTTP {}: {}", status, body),
        }
    }
}
