//! Collaborator contracts and their in-process and HTTP implementations.

pub mod http;
pub mod inventory;
pub mod payment;

pub use http::{HttpInventoryClient, HttpPaymentClient};
pub use inventory::{InventoryClient, InventoryClientError, LocalInventoryClient};
pub use payment::{LocalPaymentClient, PaymentClient, PaymentClientError};
