//! Payment processor capability and concrete implementations.

use common::{Amount, method_display_name};

use crate::error::PaymentError;

/// A capability that can charge an amount through one payment method.
///
/// Implementations are pure: no partial charges, and success is reported
/// as the confirmation text handed back to the customer.
pub trait PaymentProcessor: Send + Sync {
    /// Charges the amount, returning the confirmation message.
    fn process(&self, amount: Amount) -> Result<String, PaymentError>;
}

fn confirmation(amount: Amount, method: &str) -> String {
    format!("Processed {amount} via {}.", method_display_name(method))
}

/// Credit card payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn process(&self, amount: Amount) -> Result<String, PaymentError> {
        tracing::info!(%amount, method = "credit_card", "processing payment");
        Ok(confirmation(amount, "credit_card"))
    }
}

/// PayPal payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn process(&self, amount: Amount) -> Result<String, PaymentError> {
        tracing::info!(%amount, method = "paypal", "processing payment");
        Ok(confirmation(amount, "paypal"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_card_confirmation_mentions_amount_and_method() {
        let msg = CreditCardProcessor.process(Amount::new(30.0).unwrap()).unwrap();
        assert_eq!(msg, "Processed 30 via Credit Card.");
    }

    #[test]
    fn paypal_confirmation_keeps_fractional_amounts() {
        let msg = PayPalProcessor.process(Amount::new(19.99).unwrap()).unwrap();
        assert_eq!(msg, "Processed 19.99 via Paypal.");
    }
}
