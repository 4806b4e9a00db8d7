//! Inventory error types.

use thiserror::Error;

/// Errors that can occur against the stock store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A reservation asked for more than the item has.
    #[error("insufficient_stock: {available} available")]
    InsufficientStock {
        /// Stock level at the time the reservation was rejected.
        available: u64,
    },

    /// Reserve and release require a strictly positive quantity.
    #[error("quantity must be > 0")]
    NonPositiveQuantity,
}
