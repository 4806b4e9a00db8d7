//! Inventory collaborator contract and the in-process implementation.

use async_trait::async_trait;
use inventory::{InventoryError, StockStore};
use thiserror::Error;

/// Failures reported by the inventory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryClientError {
    /// The ledger rejected a reservation for lack of stock.
    #[error("insufficient_stock: {available} available")]
    InsufficientStock { available: u64 },

    /// The ledger answered but refused the request.
    #[error("inventory rejected the request: {0}")]
    Rejected(String),

    /// The ledger did not answer within the call's bounded wait.
    #[error("unreachable: {0}")]
    Unreachable(String),
}

/// The narrow interface the saga holds on the inventory ledger.
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Reads the current stock level; unknown items report 0.
    async fn stock_level(&self, item: &str) -> Result<u64, InventoryClientError>;

    /// Atomically reserves stock, returning the remaining level.
    async fn reserve(&self, item: &str, quantity: u64) -> Result<u64, InventoryClientError>;

    /// Releases previously reserved stock, returning the new level.
    async fn release(&self, item: &str, quantity: u64) -> Result<u64, InventoryClientError>;
}

/// In-process client over a shared [`StockStore`].
///
/// Used when the orchestrator and the ledger run in one process, and by
/// tests that need a real ledger without the HTTP hop.
#[derive(Debug, Clone)]
pub struct LocalInventoryClient {
    store: StockStore,
}

impl LocalInventoryClient {
    /// Creates a client over the given store.
    pub fn new(store: StockStore) -> Self {
        Self { store }
    }
}

impl From<InventoryError> for InventoryClientError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::InsufficientStock { available } => {
                InventoryClientError::InsufficientStock { available }
            }
            InventoryError::NonPositiveQuantity => {
                InventoryClientError::Rejected(err.to_string())
            }
        }
    }
}

#[async_trait]
impl InventoryClient for LocalInventoryClient {
    async fn stock_level(&self, item: &str) -> Result<u64, InventoryClientError> {
        Ok(self.store.level(item))
    }

    async fn reserve(&self, item: &str, quantity: u64) -> Result<u64, InventoryClientError> {
        Ok(self.store.reserve(item, quantity)?)
    }

    async fn release(&self, item: &str, quantity: u64) -> Result<u64, InventoryClientError> {
        Ok(self.store.release(item, quantity)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_client_reads_and_reserves() {
        let store = StockStore::new();
        store.set_level("widget", 5);
        let client = LocalInventoryClient::new(store.clone());

        assert_eq!(client.stock_level("widget").await.unwrap(), 5);
        assert_eq!(client.reserve("widget", 3).await.unwrap(), 2);
        assert_eq!(store.level("widget"), 2);
        assert_eq!(client.release("widget", 3).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn local_client_maps_overdraw_to_insufficient_stock() {
        let store = StockStore::new();
        store.set_level("widget", 2);
        let client = LocalInventoryClient::new(store);

        let err = client.reserve("widget", 3).await.unwrap_err();
        assert_eq!(err, InventoryClientError::InsufficientStock { available: 2 });
    }
}
