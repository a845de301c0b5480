//! Ticket creation endpoint

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use bugshot_jira::{JiraAuth, JiraClient};

use super::{ApiError, AppState, Result};

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
}

/// POST /api/create-ticket — file the analyzed bug as a Jira issue.
/// Configuration and input are validated before any network call.
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<Json<Value>> {
    let settings = state.settings.get().await;
    let jira = settings.jira;

    if jira.base_url.is_empty()
        || jira.email.is_empty()
        || jira.api_key.is_empty()
        || jira.project_key.is_empty()
    {
        return Err(ApiError::Config(
            "Jira settings are incomplete. Please configure in Settings.".to_string(),
        ));
    }

    if request.summary.is_empty() || request.description.is_empty() {
        return Err(ApiError::Input(
            "Summary and description are required.".to_string(),
        ));
    }

    let client = JiraClient::new(&jira.base_url, JiraAuth::new(jira.email, jira.api_key));

    let issue = client
        .create_issue(
            &jira.project_key,
            &request.summary,
            &request.description,
            &jira.issue_type,
        )
        .await
        .map_err(|e| {
            ApiError::Service(format!(
                "Failed to create Jira ticket: {}",
                ticket_error_detail(&e)
            ))
        })?;

    let issue_url = client.browse_url(&issue.key);

    Ok(Json(json!({
        "success": true,
        "message": "Jira ticket created successfully!",
        "issueKey": issue.key,
        "issueUrl": issue_url,
    })))
}

/// The structured `errors` map from Jira is already joined by the client;
/// everything else falls back to the transport error text.
fn ticket_error_detail(err: &bugshot_jira::Error) -> String {
    match err {
        bugshot_jira::Error::Api(detail) => detail.clone(),
        other => other.to_string(),
    }
}
