//! Cart endpoints.

use axum::Json;
use axum::extract::{Path, State};
use cart::CartStore;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Deserialize, Default)]
pub struct AddItemBody {
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// GET /cart/{user} — returns the user's cart.
#[tracing::instrument(skip(store))]
pub async fn view(
    State(store): State<CartStore>,
    Path(user): Path<String>,
) -> Json<serde_json::Value> {
    let cart = store.get(&user);
    Json(serde_json::json!({ "user": user, "cart": cart }))
}

/// POST /cart/{user}/add — adds an item to the user's cart.
#[tracing::instrument(skip(store, body))]
pub async fn add(
    State(store): State<CartStore>,
    Path(user): Path<String>,
    Json(body): Json<AddItemBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let quantity = body.quantity.unwrap_or(0);
    let item = body.item.unwrap_or_default();
    if item.is_empty() || quantity <= 0 {
        return Err(ApiError::BadRequest(
            "item and positive quantity required".to_string(),
        ));
    }

    let cart = store.add(&user, &item, quantity as u64);
    Ok(Json(serde_json::json!({
        "message": "added",
        "user": user,
        "cart": cart,
    })))
}
