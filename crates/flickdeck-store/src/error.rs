use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("store write failed: {message}")]
    WriteFailed { message: String },

    #[error("failed to decode store response: {0}")]
    Decode(String),
}

impl StoreError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        StoreError::Unavailable {
            status: err.status(),
            message: err.to_string(),
        }
    }

    pub(crate) fn write(status: StatusCode, body: String) -> Self {
        StoreError::WriteFailed {
            message: format!("HTTP {}: {}", status, body),
        }
    }
}
