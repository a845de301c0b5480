//! JIRA API types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct CreateIssueRequest {
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: AdfDocument,
    pub issuetype: IssueTypeRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueTypeRef {
    pub name: String,
}

/// Atlassian Document Format. Issue descriptions must be wrapped in this
/// rich-text schema even when they are plain text.
#[derive(Debug, Clone, Serialize)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: u32,
    pub content: Vec<AdfNode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdfNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<AdfNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AdfDocument {
    /// A document holding a single paragraph of plain text.
    pub fn paragraph(text: &str) -> Self {
        Self {
            doc_type: "doc".to_string(),
            version: 1,
            content: vec![AdfNode {
                node_type: "paragraph".to_string(),
                content: Some(vec![AdfNode {
                    node_type: "text".to_string(),
                    content: None,
                    text: Some(text.to_string()),
                }]),
                text: None,
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraUser {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "emailAddress", default)]
    pub email_address: String,
}

/// Error body returned by the JIRA REST API. `errors` maps field names to
/// messages; BTreeMap keeps the joined output deterministic.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JiraErrorBody {
    #[serde(rename = "errorMessages", default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adf_paragraph_shape() {
        let doc = AdfDocument::paragraph("Broken login");
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["type"], "doc");
        assert_eq!(json["version"], 1);
        assert_eq!(json["content"][0]["type"], "paragraph");
        assert_eq!(json["content"][0]["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["content"][0]["text"], "Broken login");
    }

    #[test]
    fn test_error_body_parses_partial_payloads() {
        let body: JiraErrorBody =
            serde_json::from_str(r#"{"errors":{"summary":"Summary is required"}}"#).unwrap();
        assert!(body.error_messages.is_empty());
        assert_eq!(body.errors["summary"], "Summary is required");
    }
}
