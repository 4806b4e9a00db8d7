//! Payment collaborator contract and the in-process implementation.

use async_trait::async_trait;
use common::Amount;
use payment::PaymentGateway;
use thiserror::Error;

/// Failures reported by the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentClientError {
    /// The gateway answered and declined the charge.
    #[error("declined: {0}")]
    Declined(String),

    /// The gateway did not answer within the call's bounded wait.
    #[error("unreachable: {0}")]
    Unreachable(String),
}

/// The narrow interface the saga holds on the payment gateway.
///
/// No partial charges and no refund operation: once a charge succeeds,
/// this contract offers no way to give the money back.
#[async_trait]
pub trait PaymentClient: Send + Sync {
    /// Charges the amount via the given method, returning the gateway's
    /// confirmation message.
    async fn charge(&self, method: &str, amount: Amount) -> Result<String, PaymentClientError>;
}

/// In-process client over a [`PaymentGateway`].
#[derive(Clone)]
pub struct LocalPaymentClient {
    gateway: PaymentGateway,
}

impl LocalPaymentClient {
    /// Creates a client over the given gateway.
    pub fn new(gateway: PaymentGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl PaymentClient for LocalPaymentClient {
    async fn charge(&self, method: &str, amount: Amount) -> Result<String, PaymentClientError> {
        self.gateway
            .charge(method, amount)
            .map_err(|e| PaymentClientError::Declined(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_client_charges_registered_methods() {
        let client = LocalPaymentClient::new(PaymentGateway::with_default_processors());
        let msg = client
            .charge("credit_card", Amount::new(30.0).unwrap())
            .await
            .unwrap();
        assert_eq!(msg, "Processed 30 via Credit Card.");
    }

    #[tokio::test]
    async fn local_client_declines_unknown_methods() {
        let client = LocalPaymentClient::new(PaymentGateway::with_default_processors());
        let err = client
            .charge("bitcoin", Amount::new(30.0).unwrap())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            PaymentClientError::Declined("unsupported payment method".to_string())
        );
    }
}
