//! Item CRUD handlers.
//!
//! Each handler resolves the bearer token, hands the request to the
//! [`ItemService`](crate::service::ItemService) and wraps the result in the
//! response envelope.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use memories_core::items::{CreateItemRequest, ItemResponse, ItemsResponse, UpdateItemRequest};

use crate::{
    handlers::{ApiError, BearerToken},
    state::AppState,
};

/// List the caller's items (GET /items).
pub async fn list_items(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let items = state.service.list_items(&token).await?;
    Ok(Json(ItemsResponse { items }))
}

/// Create an item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(request = ?request, "Received create item request");

    let item = state.service.create_item(&token, request).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse { item })))
}

/// Update an item's name, date and description (PATCH /items/{itemId}).
pub async fn update_item(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(item_id): Path<String>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let item = state.service.update_item(&token, &item_id, request).await?;
    Ok(Json(ItemResponse { item }))
}

/// Delete an item (DELETE /items/{itemId}).
pub async fn delete_item(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.delete_item(&token, &item_id).await?;
    Ok(Json(json!({})))
}
