//! Service Metadata Routes
//!
//! Liveness check and the root endpoint directory.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Create metadata routes
pub fn meta_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

/// Liveness probe
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(response))
}

/// Service and endpoint directory
async fn root_handler() -> impl IntoResponse {
    let body = json!({
        "message": "String Analyzer Service",
        "endpoints": {
            "POST /strings": "Analyze and store a string",
            "GET /strings/{string_value}": "Get an analyzed string",
            "GET /strings": "List strings with structured filters",
            "GET /strings/filter-by-natural-language": "Natural-language filtering",
            "DELETE /strings/{string_value}": "Delete a string",
            "GET /health": "Service health check",
        },
    });

    (StatusCode::OK, Json(body))
}
