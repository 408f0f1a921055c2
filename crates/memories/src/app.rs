use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        attachments::{create_attachment, list_attachments},
        health::healthz,
        items::{create_item, delete_item, list_items, update_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let item_routes = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{itemId}", patch(update_item).delete(delete_item))
        .route("/items/{itemId}/attachment", post(create_attachment))
        .route("/items/{itemId}/attachments", get(list_attachments))
        .layer(cors);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(item_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
