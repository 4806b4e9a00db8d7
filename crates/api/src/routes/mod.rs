//! Route handlers for the four services.

pub mod cart;
pub mod checkout;
pub mod health;
pub mod inventory;
pub mod metrics;
pub mod payment;

use axum::Json;
use axum::http::StatusCode;

/// Fallback for unknown routes on every service.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "not found" })),
    )
}
