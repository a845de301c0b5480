//! Bugshot Jira Integration
//!
//! Client library for filing bug tickets in Jira Cloud.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::JiraAuth;
pub use client::JiraClient;
pub use error::{Error, Result};
pub use types::*;
