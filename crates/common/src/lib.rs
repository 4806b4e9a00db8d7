//! Shared value types used across the checkout services.

pub mod types;

pub use types::{Amount, AmountError, method_display_name};
