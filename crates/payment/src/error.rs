//! Payment error types.

use thiserror::Error;

/// Errors that can occur while charging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// No processor is registered for the requested method.
    #[error("unsupported payment method")]
    UnsupportedMethod,

    /// The processor declined the charge.
    #[error("payment declined: {0}")]
    Declined(String),
}
