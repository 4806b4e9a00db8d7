//! HTTP implementations of the collaborator contracts.
//!
//! Each outbound call carries a bounded wait; a collaborator that does
//! not answer in time is reported as unreachable, never blocked on
//! indefinitely.

use std::time::Duration;

use async_trait::async_trait;
use common::Amount;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::inventory::{InventoryClient, InventoryClientError};
use super::payment::{PaymentClient, PaymentClientError};

/// Default per-call wait before a collaborator counts as unreachable.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize)]
struct StockBody {
    stock: u64,
}

#[derive(Deserialize)]
struct ReserveBody {
    remaining: u64,
}

#[derive(Deserialize)]
struct ReleaseBody {
    stock: u64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    available: Option<u64>,
}

#[derive(Deserialize)]
struct PayBody {
    message: String,
}

/// Inventory ledger reached over its HTTP surface.
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpInventoryClient {
    /// Creates a client for the ledger at `base_url` with the default
    /// call timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_CALL_TIMEOUT)
    }

    /// Creates a client with an explicit per-call timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl InventoryClient for HttpInventoryClient {
    async fn stock_level(&self, item: &str) -> Result<u64, InventoryClientError> {
        let response = self
            .client
            .get(self.url(&format!("/inventory/{item}")))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| InventoryClientError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(InventoryClientError::Unreachable(format!(
                "status {}",
                response.status()
            )));
        }
        let body: StockBody = response
            .json()
            .await
            .map_err(|e| InventoryClientError::Unreachable(e.to_string()))?;
        Ok(body.stock)
    }

    async fn reserve(&self, item: &str, quantity: u64) -> Result<u64, InventoryClientError> {
        let response = self
            .client
            .post(self.url(&format!("/inventory/{item}/reserve")))
            .timeout(self.timeout)
            .json(&json!({ "quantity": quantity }))
            .send()
            .await
            .map_err(|e| InventoryClientError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body: ReserveBody = response
                .json()
                .await
                .map_err(|e| InventoryClientError::Unreachable(e.to_string()))?;
            return Ok(body.remaining);
        }

        match response.json::<ErrorBody>().await {
            Ok(body) if status == StatusCode::CONFLICT => {
                Err(InventoryClientError::InsufficientStock {
                    available: body.available.unwrap_or(0),
                })
            }
            Ok(body) => Err(InventoryClientError::Rejected(body.error)),
            Err(_) => Err(InventoryClientError::Rejected(format!("status {status}"))),
        }
    }

    async fn release(&self, item: &str, quantity: u64) -> Result<u64, InventoryClientError> {
        let response = self
            .client
            .post(self.url(&format!("/inventory/{item}/release")))
            .timeout(self.timeout)
            .json(&json!({ "quantity": quantity }))
            .send()
            .await
            .map_err(|e| InventoryClientError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryClientError::Rejected(format!("status {status}")));
        }
        let body: ReleaseBody = response
            .json()
            .await
            .map_err(|e| InventoryClientError::Unreachable(e.to_string()))?;
        Ok(body.stock)
    }
}

/// Payment gateway reached over its HTTP surface.
#[derive(Debug, Clone)]
pub struct HttpPaymentClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpPaymentClient {
    /// Creates a client for the gateway at `base_url` with the default
    /// call timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_CALL_TIMEOUT)
    }

    /// Creates a client with an explicit per-call timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl PaymentClient for HttpPaymentClient {
    async fn charge(&self, method: &str, amount: Amount) -> Result<String, PaymentClientError> {
        let response = self
            .client
            .post(format!("{}/pay", self.base_url.trim_end_matches('/')))
            .timeout(self.timeout)
            .json(&json!({ "method": method, "amount": amount }))
            .send()
            .await
            .map_err(|e| PaymentClientError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body: PayBody = response
                .json()
                .await
                .map_err(|e| PaymentClientError::Unreachable(e.to_string()))?;
            return Ok(body.message);
        }

        match response.json::<ErrorBody>().await {
            Ok(body) => Err(PaymentClientError::Declined(body.error)),
            Err(_) => Err(PaymentClientError::Declined(format!("status {status}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = HttpInventoryClient::new("http://127.0.0.1:5001/");
        assert_eq!(
            client.url("/inventory/widget"),
            "http://127.0.0.1:5001/inventory/widget"
        );
    }

    #[tokio::test]
    async fn dead_port_reports_unreachable() {
        // Port 1 is never listening.
        let client =
            HttpInventoryClient::with_timeout("http://127.0.0.1:1", Duration::from_millis(300));
        let err = client.stock_level("widget").await.unwrap_err();
        assert!(matches!(err, InventoryClientError::Unreachable(_)));
    }
}
