//! Checkout error taxonomy.

use thiserror::Error;

/// Terminal failure of one checkout call.
///
/// Each variant carries the machine-readable reason code surfaced to the
/// caller via [`CheckoutError::code`]. None of these are retried by the
/// saga.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Client input was malformed; no collaborator was contacted.
    #[error("{0}")]
    InvalidRequest(String),

    /// The inventory service could not be reached during the stock check.
    #[error("inventory unreachable: {0}")]
    InventoryUnreachable(String),

    /// Checked stock was below the requested quantity.
    #[error("insufficient stock: {available} available")]
    InsufficientStock { available: u64 },

    /// The reserve call was rejected or errored after the optimistic
    /// check passed (including the accepted check-then-reserve race).
    #[error("inventory reserve failed: {0}")]
    ReserveFailed(String),

    /// The gateway declined or errored; compensation was attempted.
    #[error("payment failed: {0}")]
    PaymentFailed(String),
}

impl CheckoutError {
    /// Returns the reason code reported to the caller.
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutError::InvalidRequest(_) => "invalid_request",
            CheckoutError::InventoryUnreachable(_) => "inventory_unreachable",
            CheckoutError::InsufficientStock { .. } => "insufficient_stock",
            CheckoutError::ReserveFailed(_) => "inventory_reserve_failed",
            CheckoutError::PaymentFailed(_) => "payment_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_the_wire_taxonomy() {
        assert_eq!(
            CheckoutError::InvalidRequest("x".into()).code(),
            "invalid_request"
        );
        assert_eq!(
            CheckoutError::InventoryUnreachable("x".into()).code(),
            "inventory_unreachable"
        );
        assert_eq!(
            CheckoutError::InsufficientStock { available: 2 }.code(),
            "insufficient_stock"
        );
        assert_eq!(
            CheckoutError::ReserveFailed("x".into()).code(),
            "inventory_reserve_failed"
        );
        assert_eq!(
            CheckoutError::PaymentFailed("x".into()).code(),
            "payment_failed"
        );
    }

    #[test]
    fn insufficient_stock_display_carries_available() {
        let err = CheckoutError::InsufficientStock { available: 2 };
        assert_eq!(err.to_string(), "insufficient stock: 2 available");
    }
}
