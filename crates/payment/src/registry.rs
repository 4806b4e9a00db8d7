//! Method-keyed processor registry and the gateway built on it.

use std::collections::HashMap;
use std::sync::Arc;

use common::Amount;

use crate::error::PaymentError;
use crate::processor::{CreditCardProcessor, PayPalProcessor, PaymentProcessor};

/// Maps payment method identifiers to processors.
///
/// Populated explicitly at startup; lookup of an unregistered method is
/// an error, not a fallback.
#[derive(Clone, Default)]
pub struct ProcessorRegistry {
    processors: HashMap<String, Arc<dyn PaymentProcessor>>,
}

impl ProcessorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a processor under a method identifier.
    pub fn register(&mut self, method: &str, processor: Arc<dyn PaymentProcessor>) {
        self.processors.insert(method.to_string(), processor);
    }

    /// Looks up the processor for a method.
    pub fn get(&self, method: &str) -> Result<&Arc<dyn PaymentProcessor>, PaymentError> {
        self.processors
            .get(method)
            .ok_or(PaymentError::UnsupportedMethod)
    }

    /// Returns the registered method identifiers.
    pub fn methods(&self) -> Vec<&str> {
        self.processors.keys().map(String::as_str).collect()
    }
}

/// The payment gateway: selects a processor by method and charges it.
#[derive(Clone)]
pub struct PaymentGateway {
    registry: ProcessorRegistry,
}

impl PaymentGateway {
    /// Creates a gateway over an explicit registry.
    pub fn new(registry: ProcessorRegistry) -> Self {
        Self { registry }
    }

    /// Creates a gateway with the stock method set: `credit_card` and
    /// `paypal`.
    pub fn with_default_processors() -> Self {
        let mut registry = ProcessorRegistry::new();
        registry.register("credit_card", Arc::new(CreditCardProcessor));
        registry.register("paypal", Arc::new(PayPalProcessor));
        Self::new(registry)
    }

    /// Charges `amount` via the processor registered for `method`.
    ///
    /// Returns the processor's confirmation message. There is no refund
    /// counterpart; a successful charge is final.
    pub fn charge(&self, method: &str, amount: Amount) -> Result<String, PaymentError> {
        let processor = self.registry.get(method)?;
        processor.process(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_of_unregistered_method_fails() {
        let registry = ProcessorRegistry::new();
        assert!(matches!(
            registry.get("credit_card"),
            Err(PaymentError::UnsupportedMethod)
        ));
    }

    #[test]
    fn default_gateway_charges_known_methods() {
        let gateway = PaymentGateway::with_default_processors();
        let amount = Amount::new(30.0).unwrap();

        let msg = gateway.charge("credit_card", amount).unwrap();
        assert_eq!(msg, "Processed 30 via Credit Card.");

        let msg = gateway.charge("paypal", amount).unwrap();
        assert_eq!(msg, "Processed 30 via Paypal.");
    }

    #[test]
    fn default_gateway_rejects_unknown_method() {
        let gateway = PaymentGateway::with_default_processors();
        let amount = Amount::new(30.0).unwrap();
        assert_eq!(
            gateway.charge("bitcoin", amount),
            Err(PaymentError::UnsupportedMethod)
        );
    }

    #[test]
    fn methods_lists_registrations() {
        let gateway = PaymentGateway::with_default_processors();
        let mut methods = gateway.registry.methods();
        methods.sort_unstable();
        assert_eq!(methods, ["credit_card", "paypal"]);
    }
}
