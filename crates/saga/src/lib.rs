//! Checkout saga for coordinating a purchase across independent services.
//!
//! One checkout drives a fixed sequence of calls against the inventory
//! ledger and the payment gateway, compensating when a later step fails:
//!
//! 1. Check stock (optimistic read, no state change)
//! 2. Reserve stock (atomic check-and-decrement, the actual safety gate)
//! 3. Charge the payment method
//! 4. On payment failure only: release the reservation (best-effort)
//!
//! Every failure is terminal for the current call and reported with a
//! specific reason code; nothing is retried. There is no durable saga
//! log: a crash mid-saga leaves reserved stock with no record.

pub mod checkout;
pub mod clients;
pub mod error;
pub mod request;
pub mod state;

pub use checkout::{CheckoutConfirmation, CheckoutSaga};
pub use clients::{
    HttpInventoryClient, HttpPaymentClient, InventoryClient, InventoryClientError,
    LocalInventoryClient, LocalPaymentClient, PaymentClient, PaymentClientError,
};
pub use error::CheckoutError;
pub use request::CheckoutRequest;
pub use state::SagaStep;
