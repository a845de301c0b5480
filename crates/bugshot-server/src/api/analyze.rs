//! Screenshot analysis endpoint

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::{json, Value};

use bugshot_groq::GroqClient;

use super::{ApiError, AppState, Result, MAX_SCREENSHOT_BYTES};

/// POST /api/analyze — multipart upload with a `screenshot` file and an
/// optional `notes` text field. Returns the full analysis and the extracted
/// one-line summary.
pub async fn analyze_screenshot(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>> {
    let settings = state.settings.get().await;

    if settings.groq.api_key.is_empty() {
        return Err(ApiError::Config(
            "Groq API key not configured. Go to Settings.".to_string(),
        ));
    }

    let mut screenshot: Option<(Vec<u8>, String)> = None;
    let mut notes = String::new();

    while let Some(field) = multipart.next_field().await.map_err(bad_upload)? {
        // Field name is copied out before the field itself is consumed.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("screenshot") => {
                let mime_type = field.content_type().unwrap_or("image/png").to_string();
                let bytes = field.bytes().await.map_err(bad_upload)?;
                screenshot = Some((bytes.to_vec(), mime_type));
            }
            Some("notes") => {
                notes = field.text().await.map_err(bad_upload)?;
            }
            _ => {}
        }
    }

    let (image, mime_type) = match screenshot {
        Some((image, _)) if image.is_empty() => {
            return Err(ApiError::Input("No screenshot uploaded.".to_string()))
        }
        Some(upload) => upload,
        None => return Err(ApiError::Input("No screenshot uploaded.".to_string())),
    };

    if image.len() > MAX_SCREENSHOT_BYTES {
        return Err(ApiError::Input(
            "Screenshot exceeds the 10MB upload limit.".to_string(),
        ));
    }

    let client = GroqClient::with_base_url(&settings.groq.api_key, &state.groq_base_url);

    let result = client
        .analyze_screenshot(&image, &mime_type, &notes)
        .await
        .map_err(|e| ApiError::Service(e.to_string()))?;

    Ok(Json(json!({
        "success": true,
        "analysis": result.analysis,
        "summary": result.summary,
    })))
}

fn bad_upload(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::Input(format!("Invalid upload: {}", err))
}
