//! Checkout saga trigger endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use saga::{CheckoutRequest, CheckoutSaga, InventoryClient, PaymentClient};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize, Default)]
pub struct CheckoutBody {
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub quantity: Option<serde_json::Value>,
    #[serde(default)]
    pub amount: Option<serde_json::Value>,
    #[serde(default)]
    pub method: Option<String>,
}

/// POST /checkout — runs one checkout saga to a terminal outcome.
///
/// Validation happens before any collaborator is contacted; a malformed
/// body never costs a network hop.
#[tracing::instrument(skip(saga, body))]
pub async fn checkout<I, P>(
    State(saga): State<Arc<CheckoutSaga<I, P>>>,
    Json(body): Json<CheckoutBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
    I: InventoryClient + 'static,
    P: PaymentClient + 'static,
{
    let request =
        CheckoutRequest::from_parts(body.item, body.quantity, body.amount, body.method)?;
    let confirmation = saga.checkout(&request).await?;
    Ok(Json(serde_json::json!({ "message": confirmation.message })))
}
