//! Bugshot Groq Integration
//!
//! Client library for vision-model screenshot analysis via Groq's
//! OpenAI-compatible chat-completions API.

pub mod client;
pub mod error;
pub mod summary;
pub mod types;

pub use client::{GroqClient, GROQ_API_BASE, VISION_MODEL};
pub use error::{Error, Result};
pub use summary::extract_summary;
pub use types::Analysis;
