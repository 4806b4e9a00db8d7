//! Inventory ledger endpoints.

use axum::Json;
use axum::extract::{Path, State};
use inventory::StockStore;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize, Default)]
pub struct QuantityBody {
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// GET /inventory/{item} — returns the current stock level.
#[tracing::instrument(skip(store))]
pub async fn get(
    State(store): State<StockStore>,
    Path(item): Path<String>,
) -> Json<serde_json::Value> {
    let stock = store.level(&item);
    Json(serde_json::json!({ "item": item, "stock": stock }))
}

/// PUT /inventory/{item} — sets the absolute stock level.
#[tracing::instrument(skip(store, body))]
pub async fn set(
    State(store): State<StockStore>,
    Path(item): Path<String>,
    Json(body): Json<QuantityBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let quantity = body.quantity.unwrap_or(0);
    if quantity < 0 {
        return Err(ApiError::BadRequest("quantity must be >= 0".to_string()));
    }

    store.set_level(&item, quantity as u64);
    Ok(Json(serde_json::json!({
        "message": format!("{item} stock updated."),
    })))
}

/// POST /inventory/{item}/reserve — atomically decrements stock.
#[tracing::instrument(skip(store, body))]
pub async fn reserve(
    State(store): State<StockStore>,
    Path(item): Path<String>,
    Json(body): Json<QuantityBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let quantity = positive_quantity(&body)?;
    let remaining = store.reserve(&item, quantity)?;
    Ok(Json(serde_json::json!({
        "message": "reserved",
        "item": item,
        "remaining": remaining,
    })))
}

/// POST /inventory/{item}/release — adds reserved stock back.
#[tracing::instrument(skip(store, body))]
pub async fn release(
    State(store): State<StockStore>,
    Path(item): Path<String>,
    Json(body): Json<QuantityBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let quantity = positive_quantity(&body)?;
    let stock = store.release(&item, quantity)?;
    Ok(Json(serde_json::json!({
        "message": "released",
        "item": item,
        "stock": stock,
    })))
}

fn positive_quantity(body: &QuantityBody) -> Result<u64, ApiError> {
    match body.quantity {
        Some(quantity) if quantity > 0 => Ok(quantity as u64),
        _ => Err(ApiError::BadRequest("quantity must be > 0".to_string())),
    }
}
