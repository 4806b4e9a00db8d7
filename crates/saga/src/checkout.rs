//! Checkout saga coordinator.

use crate::clients::inventory::InventoryClient;
use crate::clients::payment::PaymentClient;
use crate::error::CheckoutError;
use crate::request::CheckoutRequest;
use crate::state::SagaStep;

/// Successful checkout result returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfirmation {
    /// The gateway's confirmation text, e.g.
    /// `"Processed 30 via Credit Card."`.
    pub message: String,
}

/// Drives one checkout across the inventory and payment collaborators.
///
/// The sequence is strictly check → reserve → charge, with a single
/// compensating release when the charge fails after a successful
/// reservation. The stock check is an optimistic read to skip needless
/// reserve/release round trips; the reserve call re-validates
/// availability and is the actual safety gate, so the race between the
/// two calls is accepted and surfaces as a reserve failure. The saga
/// holds no state between calls.
pub struct CheckoutSaga<I, P> {
    inventory: I,
    payment: P,
}

impl<I, P> CheckoutSaga<I, P>
where
    I: InventoryClient,
    P: PaymentClient,
{
    /// Creates a saga over the two collaborator clients.
    pub fn new(inventory: I, payment: P) -> Self {
        Self { inventory, payment }
    }

    /// Executes one checkout to a terminal outcome.
    ///
    /// The request is already validated by construction, so a failure
    /// here always reflects a collaborator outcome, never bad input.
    #[tracing::instrument(
        skip(self, request),
        fields(item = %request.item, quantity = request.quantity, method = %request.method)
    )]
    pub async fn checkout(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutConfirmation, CheckoutError> {
        metrics::counter!("checkout_total").increment(1);
        let saga_start = std::time::Instant::now();

        let result = self.run(request).await;

        metrics::histogram!("checkout_duration_seconds")
            .record(saga_start.elapsed().as_secs_f64());
        match &result {
            Ok(confirmation) => {
                metrics::counter!("checkout_completed").increment(1);
                tracing::info!(message = %confirmation.message, "checkout completed");
            }
            Err(e) => {
                metrics::counter!("checkout_failed", "reason" => e.code()).increment(1);
                tracing::warn!(reason = e.code(), error = %e, "checkout failed");
            }
        }
        result
    }

    async fn run(&self, request: &CheckoutRequest) -> Result<CheckoutConfirmation, CheckoutError> {
        let mut step = SagaStep::CheckingStock;
        tracing::info!(step = %step, "saga step started");

        // Optimistic read; no state changed anywhere if it fails.
        let available = self
            .inventory
            .stock_level(&request.item)
            .await
            .map_err(|e| CheckoutError::InventoryUnreachable(e.to_string()))?;
        if available < request.quantity {
            return Err(CheckoutError::InsufficientStock { available });
        }

        step = SagaStep::Reserving;
        tracing::info!(step = %step, "saga step started");

        // The reserve re-validates availability atomically; stock may
        // have dropped since the check, which counts as a reserve
        // failure with nothing to compensate.
        self.inventory
            .reserve(&request.item, request.quantity)
            .await
            .map_err(|e| CheckoutError::ReserveFailed(e.to_string()))?;

        step = SagaStep::Charging;
        tracing::info!(step = %step, "saga step started");

        match self.payment.charge(&request.method, request.amount).await {
            Ok(message) => {
                tracing::debug!(step = %SagaStep::Done, "saga reached terminal step");
                Ok(CheckoutConfirmation { message })
            }
            Err(charge_err) => {
                step = SagaStep::Releasing;
                tracing::info!(step = %step, "saga step started");

                // One attempt, outcome not surfaced. A failure here
                // leaves stock short until someone reconciles by hand.
                if let Err(release_err) = self
                    .inventory
                    .release(&request.item, request.quantity)
                    .await
                {
                    metrics::counter!("checkout_release_failed").increment(1);
                    tracing::warn!(
                        item = %request.item,
                        quantity = request.quantity,
                        error = %release_err,
                        "compensating release failed; stock is short until reconciled"
                    );
                }

                Err(CheckoutError::PaymentFailed(charge_err.to_string()))
            }
        }
    }
}
