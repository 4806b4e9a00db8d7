//! Internally-synchronized stock store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::InventoryError;

/// Per-item stock counts, shared by cloning.
///
/// The map is the one shared mutable resource in the system, so every
/// mutation happens under a single write lock: interleaved
/// reserve/release/set calls against the same item are linearizable and
/// a level can never go negative. Unknown items read as 0 and are
/// created implicitly on first write.
#[derive(Debug, Clone, Default)]
pub struct StockStore {
    levels: Arc<RwLock<HashMap<String, u64>>>,
}

impl StockStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current stock level for an item; unknown items are 0.
    pub fn level(&self, item: &str) -> u64 {
        self.levels
            .read()
            .unwrap()
            .get(item)
            .copied()
            .unwrap_or(0)
    }

    /// Sets the absolute stock level for an item.
    pub fn set_level(&self, item: &str, quantity: u64) {
        self.levels
            .write()
            .unwrap()
            .insert(item.to_string(), quantity);
        tracing::debug!(item, quantity, "stock level set");
    }

    /// Atomically reserves `quantity` units of an item.
    ///
    /// The check and the decrement happen under one write lock, so two
    /// concurrent reservations can never jointly overdraw the item.
    /// Returns the remaining stock on success.
    pub fn reserve(&self, item: &str, quantity: u64) -> Result<u64, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::NonPositiveQuantity);
        }
        let mut levels = self.levels.write().unwrap();
        let current = levels.get(item).copied().unwrap_or(0);
        if current < quantity {
            return Err(InventoryError::InsufficientStock { available: current });
        }
        let remaining = current - quantity;
        levels.insert(item.to_string(), remaining);
        tracing::debug!(item, quantity, remaining, "stock reserved");
        Ok(remaining)
    }

    /// Unconditionally adds `quantity` units back to an item.
    ///
    /// Used as the compensating half of a reservation; safe to call even
    /// when the paired reservation never happened, it merely increments.
    /// Returns the new stock level.
    pub fn release(&self, item: &str, quantity: u64) -> Result<u64, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::NonPositiveQuantity);
        }
        let mut levels = self.levels.write().unwrap();
        let current = levels.get(item).copied().unwrap_or(0);
        let stock = current.saturating_add(quantity);
        levels.insert(item.to_string(), stock);
        tracing::debug!(item, quantity, stock, "stock released");
        Ok(stock)
    }

    /// Returns a point-in-time copy of all stock levels.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.levels.read().unwrap().clone()
    }
}
