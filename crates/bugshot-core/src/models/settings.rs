//! Application settings

use serde::{Deserialize, Serialize};

/// Prefix shown in place of a stored secret. An incoming value that still
/// carries it is a display artifact, not a new credential.
pub const MASK_MARKER: &str = "••••";

/// The settings record persisted to disk. Every field default-fills when
/// absent from the file, so a partial record always loads complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub jira: JiraSettings,
    pub groq: GroqSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct JiraSettings {
    pub project_key: String,
    pub api_key: String,
    pub email: String,
    pub base_url: String,
    pub issue_type: String,
}

impl Default for JiraSettings {
    fn default() -> Self {
        Self {
            project_key: String::new(),
            api_key: String::new(),
            email: String::new(),
            base_url: String::new(),
            issue_type: "Bug".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GroqSettings {
    pub api_key: String,
}

/// Partial update as submitted by the settings form. Absent fields leave the
/// stored value untouched.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SettingsUpdate {
    pub jira: Option<JiraSettingsUpdate>,
    pub groq: Option<GroqSettingsUpdate>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct JiraSettingsUpdate {
    pub project_key: Option<String>,
    pub api_key: Option<String>,
    pub email: Option<String>,
    pub base_url: Option<String>,
    pub issue_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GroqSettingsUpdate {
    pub api_key: Option<String>,
}

impl Settings {
    /// Display form with each secret redacted to its last four characters.
    /// Empty secrets stay empty.
    pub fn masked(&self) -> Settings {
        Settings {
            jira: JiraSettings {
                api_key: mask_secret(&self.jira.api_key),
                ..self.jira.clone()
            },
            groq: GroqSettings {
                api_key: mask_secret(&self.groq.api_key),
            },
        }
    }

    /// Merge a partial update into this record. Secret fields keep their
    /// stored value when the incoming value is empty or still masked, so a
    /// round-tripped display record never clobbers the real credential.
    pub fn merged_with(&self, update: SettingsUpdate) -> Settings {
        let mut next = self.clone();

        if let Some(jira) = update.jira {
            if let Some(project_key) = jira.project_key {
                next.jira.project_key = project_key;
            }
            if let Some(api_key) = jira.api_key {
                if is_new_secret(&api_key) {
                    next.jira.api_key = api_key;
                }
            }
            if let Some(email) = jira.email {
                next.jira.email = email;
            }
            if let Some(base_url) = jira.base_url {
                next.jira.base_url = base_url;
            }
            if let Some(issue_type) = jira.issue_type {
                next.jira.issue_type = issue_type;
            }
        }

        if let Some(groq) = update.groq {
            if let Some(api_key) = groq.api_key {
                if is_new_secret(&api_key) {
                    next.groq.api_key = api_key;
                }
            }
        }

        if next.jira.issue_type.is_empty() {
            next.jira.issue_type = "Bug".to_string();
        }

        next
    }
}

fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }

    // Last four characters, not bytes; keys can contain multibyte symbols.
    let chars: Vec<char> = secret.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}{}", MASK_MARKER, tail)
}

fn is_new_secret(value: &str) -> bool {
    !value.is_empty() && !value.starts_with(MASK_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_settings() -> Settings {
        Settings {
            jira: JiraSettings {
                project_key: "VWO".to_string(),
                api_key: "secret1234".to_string(),
                email: "a@b.com".to_string(),
                base_url: "https://x.atlassian.net".to_string(),
                issue_type: "Bug".to_string(),
            },
            groq: GroqSettings {
                api_key: "gsk_abcdef".to_string(),
            },
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.jira.issue_type, "Bug");
        assert!(settings.jira.api_key.is_empty());
        assert!(settings.groq.api_key.is_empty());
    }

    #[test]
    fn test_partial_file_default_fills() {
        let settings: Settings =
            serde_json::from_str(r#"{"jira":{"projectKey":"VWO"}}"#).unwrap();
        assert_eq!(settings.jira.project_key, "VWO");
        assert_eq!(settings.jira.issue_type, "Bug");
        assert!(settings.groq.api_key.is_empty());
    }

    #[test]
    fn test_mask_shows_last_four() {
        let masked = sample_settings().masked();
        assert_eq!(masked.jira.api_key, "••••1234");
        assert_eq!(masked.groq.api_key, "••••cdef");
        assert_eq!(masked.jira.email, "a@b.com");
    }

    #[test]
    fn test_mask_keeps_empty_secrets_empty() {
        let masked = Settings::default().masked();
        assert_eq!(masked.jira.api_key, "");
        assert_eq!(masked.groq.api_key, "");
    }

    #[test]
    fn test_mask_short_secret() {
        let mut settings = sample_settings();
        settings.jira.api_key = "abc".to_string();
        assert_eq!(settings.masked().jira.api_key, "••••abc");
    }

    #[test]
    fn test_merge_keeps_secret_on_masked_input() {
        let current = sample_settings();
        let masked = current.masked();

        let update = SettingsUpdate {
            jira: Some(JiraSettingsUpdate {
                project_key: Some(masked.jira.project_key),
                api_key: Some(masked.jira.api_key),
                email: Some(masked.jira.email),
                base_url: Some(masked.jira.base_url),
                issue_type: Some(masked.jira.issue_type),
            }),
            groq: Some(GroqSettingsUpdate {
                api_key: Some(masked.groq.api_key),
            }),
        };

        // Saving the unchanged display record must be a no-op.
        assert_eq!(current.merged_with(update), current);
    }

    #[test]
    fn test_merge_accepts_new_secret() {
        let current = sample_settings();
        let update = SettingsUpdate {
            jira: Some(JiraSettingsUpdate {
                api_key: Some("fresh-token".to_string()),
                ..JiraSettingsUpdate::default()
            }),
            groq: None,
        };

        let merged = current.merged_with(update);
        assert_eq!(merged.jira.api_key, "fresh-token");
        assert_eq!(merged.jira.project_key, "VWO");
    }

    #[test]
    fn test_merge_ignores_empty_secret() {
        let current = sample_settings();
        let update = SettingsUpdate {
            groq: Some(GroqSettingsUpdate {
                api_key: Some(String::new()),
            }),
            jira: None,
        };

        assert_eq!(current.merged_with(update).groq.api_key, "gsk_abcdef");
    }

    #[test]
    fn test_merge_defaults_issue_type() {
        let mut current = sample_settings();
        current.jira.issue_type = String::new();

        let merged = current.merged_with(SettingsUpdate::default());
        assert_eq!(merged.jira.issue_type, "Bug");
    }

    #[test]
    fn test_double_mask_never_persists() {
        let current = sample_settings();
        let masked_once = current.masked();

        // A client that re-masks an already-masked value still cannot
        // overwrite the stored secret.
        let update = SettingsUpdate {
            jira: Some(JiraSettingsUpdate {
                api_key: Some(masked_once.masked().jira.api_key),
                ..JiraSettingsUpdate::default()
            }),
            groq: None,
        };

        assert_eq!(current.merged_with(update).jira.api_key, "secret1234");
    }

    #[test]
    fn test_settings_json_uses_camel_case() {
        let json = serde_json::to_value(sample_settings()).unwrap();
        assert_eq!(json["jira"]["projectKey"], "VWO");
        assert_eq!(json["jira"]["baseUrl"], "https://x.atlassian.net");
        assert_eq!(json["jira"]["issueType"], "Bug");
        assert_eq!(json["groq"]["apiKey"], "gsk_abcdef");
    }
}
