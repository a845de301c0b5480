//! Error types for Groq integration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid API key")]
    Unauthorized,

    #[error("Groq API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, Error>;
