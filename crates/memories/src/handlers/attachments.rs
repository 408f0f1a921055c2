//! Attachment handlers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use memories_core::items::AttachmentsResponse;

use crate::{
    handlers::{ApiError, BearerToken},
    state::AppState,
};

/// Longest accepted caller field name, in bytes.
const MAX_FIELD_NAME_LEN: usize = 255;

/// Largest accepted caller field value, measured as serialized JSON.
const MAX_FIELD_VALUE_BYTES: usize = 32 * 1024;

/// Parse the optional attachment body into caller-supplied fields.
///
/// An empty body means no extra fields. Anything else must be a JSON object
/// whose keys are non-empty and whose values fit in a stored attribute.
fn parse_fields(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(Value::Null) => return Ok(Map::new()),
        Ok(_) => {
            return Err(ApiError::Validation(
                "Invalid request body: expected a JSON object".to_string(),
            ))
        }
        Err(e) => return Err(ApiError::Validation(format!("Invalid request body: {e}"))),
    };

    for (key, value) in &fields {
        check_field(key, value)?;
    }
    Ok(fields)
}

fn check_field(key: &str, value: &Value) -> Result<(), ApiError> {
    if key.is_empty() {
        return Err(ApiError::Validation(
            "Attachment field names must not be empty".to_string(),
        ));
    }
    if key.len() > MAX_FIELD_NAME_LEN {
        return Err(ApiError::Validation(format!(
            "Attachment field name exceeds {MAX_FIELD_NAME_LEN} bytes"
        )));
    }

    let size = serde_json::to_vec(value).map(|v| v.len()).unwrap_or(usize::MAX);
    if size > MAX_FIELD_VALUE_BYTES {
        return Err(ApiError::Validation(format!(
            "Attachment field '{key}' exceeds {MAX_FIELD_VALUE_BYTES} bytes"
        )));
    }
    Ok(())
}

/// Issue an upload URL for a new attachment (POST /items/{itemId}/attachment).
pub async fn create_attachment(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(item_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let fields = parse_fields(&body)?;

    let upload = state.service.attach(&token, &item_id, fields).await?;
    Ok(Json(upload))
}

/// List an item's attachment records, newest first (GET /items/{itemId}/attachments).
pub async fn list_attachments(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let attachments = state.service.get_attachments(&token, &item_id).await?;
    Ok(Json(AttachmentsResponse { attachments }))
}
