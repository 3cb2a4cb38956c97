//! Per-deployment sequence counters.
//!
//! Every replica numbers child entities of a deployment with the same
//! ordinals because the counter lives in ledger state and only advances
//! inside committed transactions.

/// Mutable handle onto one deployment's counter.
///
/// Borrowed from the state for the duration of a single transaction step.
pub struct Sequence<'a> {
    counter: &'a mut u64,
}

impl<'a> Sequence<'a> {
    #[must_use]
    pub fn new(counter: &'a mut u64) -> Self {
        Self { counter }
    }

    /// Increment the counter and return the new ordinal.
    pub fn advance(&mut self) -> u64 {
        *self.counter += 1;
        *self.counter
    }
}
