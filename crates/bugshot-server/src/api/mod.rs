//! API route handlers

pub mod analyze;
pub mod error;
pub mod health;
pub mod settings;
pub mod ticket;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::settings::SettingsManager;

pub use error::{ApiError, Result};

/// Maximum accepted screenshot size (10 MB).
pub const MAX_SCREENSHOT_BYTES: usize = 10 * 1024 * 1024;

/// Request body cap; leaves headroom above the screenshot limit for the
/// multipart framing and the notes field.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<SettingsManager>,
    pub groq_base_url: String,
}

impl AppState {
    pub fn new(settings: Arc<SettingsManager>) -> Self {
        Self {
            settings,
            groq_base_url: bugshot_groq::GROQ_API_BASE.to_string(),
        }
    }

    /// Point model calls at a different endpoint. Used against mock servers.
    pub fn with_groq_base_url(mut self, base_url: &str) -> Self {
        self.groq_base_url = base_url.to_string();
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/settings",
            get(settings::get_settings).post(settings::save_settings),
        )
        .route("/api/test/jira", post(test::test_jira))
        .route("/api/test/groq", post(test::test_groq))
        .route("/api/analyze", post(analyze::analyze_screenshot))
        .route("/api/create-ticket", post(ticket::create_ticket))
        .route("/api/health", get(health::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
