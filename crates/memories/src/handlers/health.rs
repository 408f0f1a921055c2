//! Health check endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /healthz - Liveness probe.
///
/// Returns 200 immediately without touching storage.
#[axum::debug_handler]
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
