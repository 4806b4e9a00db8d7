//! Payment gateway for the checkout system.
//!
//! Charging goes through a registry keyed by payment method identifier.
//! Processors are registered explicitly at startup; there is no refund
//! operation, a charge is final.

pub mod error;
pub mod processor;
pub mod registry;

pub use error::PaymentError;
pub use processor::{CreditCardProcessor, PayPalProcessor, PaymentProcessor};
pub use registry::{PaymentGateway, ProcessorRegistry};
