//! Policy Responder Service
//!
//! Stand-in for a policy inference backend: serves templated policy documents
//! and placeholder analysis over a small JSON HTTP API while no model is loaded.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;

pub use config::Config;
pub use error::{AppError, AppResult};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use models::ServiceInfo;
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        info!(
            "Initialized policy responder state (mock mode, listening on {})",
            config.socket_addr()
        );
        Self {
            service: Arc::new(ServiceInfo::default()),
        }
    }
}

// Fallback handler for 404s
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Not Found" })),
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}

/// Any origin, method and header, credentials included. The request's own
/// values are echoed back since a literal `*` is refused for credentialed calls.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Create the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::service_info))
        .route("/health", get(routes::health))
        .route("/generate-policy", post(routes::generate_policy))
        .route("/analyze-policy", post(routes::analyze_policy))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
