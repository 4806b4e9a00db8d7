//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inventory::InventoryError;
use payment::PaymentError;
use saga::CheckoutError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Inventory ledger error.
    Inventory(InventoryError),
    /// Payment gateway error.
    Payment(PaymentError),
    /// Checkout saga outcome.
    Checkout(CheckoutError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::Inventory(err) => inventory_error_to_response(err),
            ApiError::Payment(err) => payment_error_to_response(err),
            ApiError::Checkout(err) => checkout_error_to_response(err),
        };
        (status, axum::Json(body)).into_response()
    }
}

fn inventory_error_to_response(err: InventoryError) -> (StatusCode, serde_json::Value) {
    match err {
        InventoryError::InsufficientStock { available } => (
            StatusCode::CONFLICT,
            serde_json::json!({ "error": "insufficient_stock", "available": available }),
        ),
        InventoryError::NonPositiveQuantity => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": err.to_string() }),
        ),
    }
}

fn payment_error_to_response(err: PaymentError) -> (StatusCode, serde_json::Value) {
    let status = match err {
        PaymentError::UnsupportedMethod => StatusCode::BAD_REQUEST,
        PaymentError::Declined(_) => StatusCode::PAYMENT_REQUIRED,
    };
    (status, serde_json::json!({ "error": err.to_string() }))
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, serde_json::Value) {
    let code = err.code();
    match err {
        CheckoutError::InvalidRequest(msg) => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": msg }),
        ),
        CheckoutError::InventoryUnreachable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            serde_json::json!({ "error": code }),
        ),
        CheckoutError::InsufficientStock { available } => (
            StatusCode::CONFLICT,
            serde_json::json!({ "error": code, "available": available }),
        ),
        CheckoutError::ReserveFailed(detail) => (
            StatusCode::CONFLICT,
            serde_json::json!({ "error": code, "details": detail }),
        ),
        CheckoutError::PaymentFailed(detail) => (
            StatusCode::PAYMENT_REQUIRED,
            serde_json::json!({ "error": code, "details": detail }),
        ),
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        ApiError::Inventory(err)
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        ApiError::Payment(err)
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError::Checkout(err)
    }
}
