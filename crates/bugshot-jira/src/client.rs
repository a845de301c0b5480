//! JIRA REST client

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::auth::JiraAuth;
use crate::error::{Error, Result};
use crate::types::{
    AdfDocument, CreateIssueRequest, CreatedIssue, IssueFields, IssueTypeRef, JiraErrorBody,
    JiraUser, ProjectRef,
};

const CREATE_ISSUE_TIMEOUT: Duration = Duration::from_secs(15);
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct JiraClient {
    client: Client,
    base_url: String,
    auth: JiraAuth,
}

impl JiraClient {
    /// Create a new JIRA client. Trailing slashes on the base URL are
    /// stripped so endpoint paths join cleanly.
    pub fn new(base_url: &str, auth: JiraAuth) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL a person would open to view an issue.
    pub fn browse_url(&self, issue_key: &str) -> String {
        format!("{}/browse/{}", self.base_url, issue_key)
    }

    /// Create a bug issue. An empty issue type falls back to "Bug".
    pub async fn create_issue(
        &self,
        project_key: &str,
        summary: &str,
        description: &str,
        issue_type: &str,
    ) -> Result<CreatedIssue> {
        let url = format!("{}/rest/api/3/issue", self.base_url);
        let issue_type = if issue_type.is_empty() {
            "Bug"
        } else {
            issue_type
        };

        let request = CreateIssueRequest {
            fields: IssueFields {
                project: ProjectRef {
                    key: project_key.to_string(),
                },
                summary: summary.to_string(),
                description: AdfDocument::paragraph(description),
                issuetype: IssueTypeRef {
                    name: issue_type.to_string(),
                },
            },
        };

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth.to_basic_auth())
            .header(ACCEPT, "application/json")
            .timeout(CREATE_ISSUE_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(classify_send_error)?;

        if response.status().is_success() {
            Ok(response.json::<CreatedIssue>().await?)
        } else {
            Err(api_error(response).await)
        }
    }

    /// Fetch the authenticated user. Used as a lightweight connection probe.
    pub async fn myself(&self) -> Result<JiraUser> {
        let url = format!("{}/rest/api/3/myself", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth.to_basic_auth())
            .header(ACCEPT, "application/json")
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(classify_send_error)?;

        if response.status().is_success() {
            Ok(response.json::<JiraUser>().await?)
        } else {
            Err(api_error(response).await)
        }
    }
}

/// DNS failures and refused connections are reported separately so callers
/// can tell "bad URL" apart from "bad credentials".
fn classify_send_error(err: reqwest::Error) -> Error {
    if err.is_connect() || err.is_timeout() {
        Error::Connect(err.to_string())
    } else {
        Error::Http(err)
    }
}

async fn api_error(response: reqwest::Response) -> Error {
    let status = response.status();

    match status {
        StatusCode::UNAUTHORIZED => return Error::Unauthorized,
        StatusCode::FORBIDDEN => return Error::Forbidden,
        _ => {}
    }

    let body = response.text().await.unwrap_or_default();
    if let Ok(parsed) = serde_json::from_str::<JiraErrorBody>(&body) {
        if !parsed.errors.is_empty() {
            let detail: Vec<String> = parsed.errors.into_values().collect();
            return Error::Api(detail.join(", "));
        }
        if !parsed.error_messages.is_empty() {
            return Error::Api(parsed.error_messages.join(", "));
        }
    }

    Error::Api(format!("HTTP {}: {}", status.as_u16(), body))
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{basic_auth, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_auth() -> JiraAuth {
        JiraAuth::new("a@b.com".to_string(), "secret1234".to_string())
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let client = JiraClient::new("https://x.atlassian.net//", test_auth());
        assert_eq!(client.base_url(), "https://x.atlassian.net");
        assert_eq!(
            client.browse_url("VWO-42"),
            "https://x.atlassian.net/browse/VWO-42"
        );
    }

    #[tokio::test]
    async fn test_create_issue() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = JiraClient::new(&format!("{}/", mock_server.uri()), test_auth());

        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue"))
            .and(basic_auth("a@b.com", "secret1234"))
            .and(body_partial_json(serde_json::json!({
                "fields": {
                    "project": { "key": "VWO" },
                    "summary": "Login button unresponsive",
                    "issuetype": { "name": "Bug" },
                    "description": { "type": "doc", "version": 1 }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "10000",
                "key": "VWO-42",
                "self": "https://x.atlassian.net/rest/api/3/issue/10000"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let issue = client
            .create_issue("VWO", "Login button unresponsive", "It does nothing.", "Bug")
            .await?;

        assert_eq!(issue.key, "VWO-42");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_issue_defaults_issue_type() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = JiraClient::new(&mock_server.uri(), test_auth());

        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue"))
            .and(body_partial_json(serde_json::json!({
                "fields": { "issuetype": { "name": "Bug" } }
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "key": "VWO-43" })),
            )
            .mount(&mock_server)
            .await;

        let issue = client.create_issue("VWO", "Title", "Desc", "").await?;
        assert_eq!(issue.key, "VWO-43");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_issue_joins_error_map() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = JiraClient::new(&mock_server.uri(), test_auth());

        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "errorMessages": [],
                "errors": {
                    "project": "Project is required",
                    "summary": "Summary is required"
                }
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .create_issue("", "Title", "Desc", "Bug")
            .await
            .unwrap_err();

        match err {
            Error::Api(detail) => {
                assert_eq!(detail, "Project is required, Summary is required")
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_myself() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = JiraClient::new(&mock_server.uri(), test_auth());

        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .and(basic_auth("a@b.com", "secret1234"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "displayName": "Ada Lovelace",
                "emailAddress": "a@b.com"
            })))
            .mount(&mock_server)
            .await;

        let user = client.myself().await?;
        assert_eq!(user.display_name, "Ada Lovelace");
        assert_eq!(user.email_address, "a@b.com");
        Ok(())
    }

    #[tokio::test]
    async fn test_myself_unauthorized() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = JiraClient::new(&mock_server.uri(), test_auth());

        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "errorMessages": ["Authentication failed"],
                "errors": {}
            })))
            .mount(&mock_server)
            .await;

        let err = client.myself().await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized));
        Ok(())
    }

    #[tokio::test]
    async fn test_myself_forbidden() -> anyhow::Result<()> {
        let mock_server = MockServer::start().await;
        let client = JiraClient::new(&mock_server.uri(), test_auth());

        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let err = client.myself().await.unwrap_err();
        assert!(matches!(err, Error::Forbidden));
        Ok(())
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_connect() {
        // Nothing listens on this port.
        let client = JiraClient::new("http://127.0.0.1:1", test_auth());
        let err = client.myself().await.unwrap_err();
        assert!(matches!(err, Error::Connect(_)));
    }
}
