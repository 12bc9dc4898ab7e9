use std::io;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Why a single commit page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("API responded with {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("failed to decode commit page: {0}")]
    Decode(String),
}
