//! Bugshot Server Library
//!
//! HTTP backend functionality exposed as a library for testing.

pub mod api;
pub mod settings;

pub use api::{router, AppState};
pub use settings::SettingsManager;
