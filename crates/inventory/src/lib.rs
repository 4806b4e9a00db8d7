//! Inventory ledger for the checkout system.
//!
//! Holds per-item stock counts behind an internally-synchronized store.
//! Reserve is an atomic check-and-decrement: concurrent reservations can
//! never jointly drive a stock level below zero. Release is the paired
//! compensating increment.

pub mod error;
pub mod store;

pub use error::InventoryError;
pub use store::StockStore;
