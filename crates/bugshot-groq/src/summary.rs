//! Summary extraction from model output

use chrono::Local;
use regex::Regex;
use std::sync::OnceLock;

fn summary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\*\*Summary\*\*[:\s]*(.+)").expect("summary pattern is valid")
    })
}

/// Pull the one-line summary out of a structured bug report. The model is
/// asked for a `**Summary**:` line but its output is prose, so a missing
/// marker falls back to a dated placeholder title.
pub fn extract_summary(analysis: &str) -> String {
    if let Some(caps) = summary_pattern().captures(analysis) {
        let line = caps[1].trim();
        if !line.is_empty() {
            return line.to_string();
        }
    }

    format!("Bug Report - {}", Local::now().format("%Y-%m-%d"))
}
