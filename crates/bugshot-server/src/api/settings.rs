//! Settings endpoints

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use bugshot_core::models::SettingsUpdate;

use super::{AppState, Result};

/// GET /api/settings — current settings with secrets masked to their last
/// four characters. The real values never leave the server.
pub async fn get_settings(State(state): State<AppState>) -> Json<Value> {
    let masked = state.settings.get().await.masked();
    Json(json!({ "success": true, "settings": masked }))
}

/// POST /api/settings — merge a partial update into the stored record.
/// Masked placeholder values are treated as "unchanged".
pub async fn save_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<Value>> {
    state.settings.update(update).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Settings saved successfully",
    })))
}
