//! Per-user shopping cart store.
//!
//! A cart maps item names to quantities; adding the same item again
//! accumulates. Carts live only in memory and are created implicitly on
//! first add.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Item name → quantity for one user.
pub type Cart = HashMap<String, u64>;

/// Internally-synchronized user → cart map, shared by cloning.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    carts: Arc<RwLock<HashMap<String, Cart>>>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of an item to a user's cart, creating the cart if
    /// needed, and returns a copy of the updated cart.
    pub fn add(&self, user: &str, item: &str, quantity: u64) -> Cart {
        let mut carts = self.carts.write().unwrap();
        let cart = carts.entry(user.to_string()).or_default();
        *cart.entry(item.to_string()).or_insert(0) += quantity;
        tracing::debug!(user, item, quantity, "item added to cart");
        cart.clone()
    }

    /// Returns a copy of a user's cart; unknown users have an empty cart.
    pub fn get(&self, user: &str) -> Cart {
        self.carts
            .read()
            .unwrap()
            .get(user)
            .cloned()
            .unwrap_or_default()
    }
}
