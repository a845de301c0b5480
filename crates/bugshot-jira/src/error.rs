//! Error types for Jira integration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Access forbidden")]
    Forbidden,

    #[error("Cannot reach Jira server: {0}")]
    Connect(String),

    #[error("JIRA API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, Error>;
