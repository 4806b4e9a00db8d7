//! Saga step state machine.

/// The step a checkout saga is currently executing.
///
/// Transitions are linear, with one compensation branch:
/// ```text
/// CheckingStock ──► Reserving ──► Charging ──┬──► Done
///                                            └──► Releasing ──► Done
/// ```
/// A step exists only for the duration of one checkout call; nothing is
/// persisted between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SagaStep {
    /// Optimistic stock read before reserving.
    #[default]
    CheckingStock,

    /// Atomic check-and-decrement against the ledger.
    Reserving,

    /// Charging the payment gateway.
    Charging,

    /// Compensating a reservation after a payment failure.
    Releasing,

    /// Terminal; the outcome is returned exactly once.
    Done,
}

impl SagaStep {
    /// Returns true if this is the terminal step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SagaStep::Done)
    }

    /// Returns true if the step only runs as compensation.
    pub fn is_compensation(&self) -> bool {
        matches!(self, SagaStep::Releasing)
    }

    /// Returns the step name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SagaStep::CheckingStock => "checking_stock",
            SagaStep::Reserving => "reserving",
            SagaStep::Charging => "charging",
            SagaStep::Releasing => "releasing",
            SagaStep::Done => "done",
        }
    }
}

impl std::fmt::Display for SagaStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_step_is_checking_stock() {
        assert_eq!(SagaStep::default(), SagaStep::CheckingStock);
    }

    #[test]
    fn only_done_is_terminal() {
        assert!(!SagaStep::CheckingStock.is_terminal());
        assert!(!SagaStep::Reserving.is_terminal());
        assert!(!SagaStep::Charging.is_terminal());
        assert!(!SagaStep::Releasing.is_terminal());
        assert!(SagaStep::Done.is_terminal());
    }

    #[test]
    fn only_releasing_is_compensation() {
        assert!(SagaStep::Releasing.is_compensation());
        assert!(!SagaStep::Charging.is_compensation());
        assert!(!SagaStep::Done.is_compensation());
    }

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(SagaStep::CheckingStock.to_string(), "checking_stock");
        assert_eq!(SagaStep::Reserving.to_string(), "reserving");
        assert_eq!(SagaStep::Charging.to_string(), "charging");
        assert_eq!(SagaStep::Releasing.to_string(), "releasing");
        assert_eq!(SagaStep::Done.to_string(), "done");
    }
}
