//! API error taxonomy

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::settings::SettingsManagerError;

/// Errors surfaced by route handlers. Every variant renders as
/// `{"success": false, "error": <message>}` with the matching status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required credential or configuration is missing.
    #[error("{0}")]
    Config(String),

    /// Required request field is missing or invalid.
    #[error("{0}")]
    Input(String),

    /// Downstream API or network failure.
    #[error("{0}")]
    Service(String),

    /// Connection test failure; reported to the settings UI as a 400 so it
    /// renders inline next to the tested credentials.
    #[error("{0}")]
    Probe(String),

    /// Local persistence failure.
    #[error("Failed to save settings")]
    Io(#[from] SettingsManagerError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Config(_) | ApiError::Input(_) | ApiError::Probe(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Service(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Config("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Input("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Probe("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Service("x".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
