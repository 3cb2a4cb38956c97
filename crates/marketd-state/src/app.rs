//! The capability interface implemented by every ledger module.
//!
//! The host router offers each transaction and query to its modules in
//! turn. Admission (`check_tx`) may run any number of times for the same
//! transaction; `deliver_tx` runs once, at the transaction's position in
//! the block, and must re-validate before touching state.

use marketd_types::{
    RequestQuery, ResponseCheckTx, ResponseDeliverTx, ResponseQuery, TxPayload,
};

use crate::State;

/// Per-transaction context supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxContext {
    /// Height of the block being built or applied.
    pub height: u64,
}

impl TxContext {
    #[must_use]
    pub fn at_height(height: u64) -> Self {
        Self { height }
    }
}

/// A pluggable transaction and query handler.
pub trait Application {
    /// Module name used in tags and log lines.
    fn name(&self) -> &str;

    /// Whether this module owns `tx`.
    fn accept_tx(&self, tx: &TxPayload) -> bool;

    /// Admission-time validation. Must not mutate state.
    fn check_tx(&self, state: &dyn State, ctx: &TxContext, tx: &TxPayload) -> ResponseCheckTx;

    /// Commit-time application.
    fn deliver_tx(
        &self,
        state: &mut dyn State,
        ctx: &TxContext,
        tx: &TxPayload,
    ) -> ResponseDeliverTx;

    /// Whether this module owns the query namespace of `req`.
    fn accept_query(&self, req: &RequestQuery) -> bool;

    fn query(&self, state: &dyn State, req: &RequestQuery) -> ResponseQuery;
}
