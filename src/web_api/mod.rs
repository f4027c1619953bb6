//! WebAPI - REST API Endpoints
//!
//! ## Responsibilities
//!
//! - HTTP API routes
//! - Request validation
//! - Response formatting

mod routes;

pub use routes::create_router;

use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

use crate::models::HealthResponse;

/// Health check endpoint, always 200
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        message: "Parking dashboard API is running".to_string(),
    })
}
