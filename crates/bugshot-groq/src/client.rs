//! Groq chat-completion client

use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::summary::extract_summary;
use crate::types::{
    Analysis, ApiErrorBody, ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl,
    MessageContent,
};

pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Fixed vision-capable model used for both analysis and the probe.
pub const VISION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ANALYSIS_MAX_TOKENS: u32 = 2048;
const ANALYSIS_TEMPERATURE: f32 = 0.3;
const PROBE_MAX_TOKENS: u32 = 10;

pub struct GroqClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GroqClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, GROQ_API_BASE)
    }

    /// Point the client at a different endpoint. Used against mock servers.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Analyze a screenshot: one single-turn multimodal message carrying the
    /// QA prompt and the image as a base64 data URI.
    pub async fn analyze_screenshot(
        &self,
        image: &[u8],
        mime_type: &str,
        notes: &str,
    ) -> Result<Analysis> {
        use base64::Engine;
        let payload = base64::engine::general_purpose::STANDARD.encode(image);
        let data_uri = format!("data:{};base64,{}", mime_type, payload);

        let request = ChatRequest {
            model: VISION_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: analysis_prompt(notes),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_uri },
                    },
                ]),
            }],
            max_tokens: ANALYSIS_MAX_TOKENS,
            temperature: Some(ANALYSIS_TEMPERATURE),
        };

        let response = self.send(request).await?;
        let analysis =
            first_content(response).unwrap_or_else(|| "No analysis generated.".to_string());
        let summary = extract_summary(&analysis);

        Ok(Analysis { analysis, summary })
    }

    /// Minimal one-word completion used as a connection probe. Returns the
    /// trimmed model reply.
    pub async fn ping(&self) -> Result<String> {
        let request = ChatRequest {
            model: VISION_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Text(r#"Say "connected" in one word."#.to_string()),
            }],
            max_tokens: PROBE_MAX_TOKENS,
            temperature: None,
        };

        let response = self.send(request).await?;
        Ok(first_content(response)
            .unwrap_or_default()
            .trim()
            .to_string())
    }

    async fn send(&self, request: ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(Error::Api(format!("HTTP {}: {}", status.as_u16(), detail)));
        }

        Ok(response.json::<ChatResponse>().await?)
    }
}

fn first_content(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
}

fn analysis_prompt(notes: &str) -> String {
    let context = if notes.is_empty() {
        String::new()
    } else {
        format!("\n\nAdditional context from the tester: \"{notes}\"")
    };

    format!(
        "You are an expert QA engineer analyzing a screenshot of a software application for bugs.\n\
         Analyze this screenshot carefully and generate a structured bug report.{context}\n\n\
         Please provide the following in your response:\n\
         1. **Summary**: A concise one-line bug title\n\
         2. **Description**: Detailed description of the issue visible in the screenshot\n\
         3. **Steps to Reproduce**: Numbered steps to reproduce the issue (inferred from the screenshot)\n\
         4. **Expected Result**: What should happen\n\
         5. **Actual Result**: What is actually happening (as seen in the screenshot)\n\
         6. **Severity**: Critical / Major / Minor / Trivial\n\
         7. **Environment**: Any environment details visible in the screenshot\n\n\
         Format your response as a clean, professional bug report."
    )
}
