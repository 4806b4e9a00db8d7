//! Payment gateway endpoint.

use axum::Json;
use axum::extract::State;
use common::Amount;
use payment::PaymentGateway;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize, Default)]
pub struct PayBody {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
}

/// POST /pay — charges an amount via a payment method.
#[tracing::instrument(skip(gateway, body))]
pub async fn pay(
    State(gateway): State<PaymentGateway>,
    Json(body): Json<PayBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let amount = Amount::from_value(body.amount.as_ref())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let method = body.method.unwrap_or_default();

    let message = gateway.charge(&method, amount)?;
    Ok(Json(serde_json::json!({ "message": message })))
}
