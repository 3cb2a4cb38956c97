//! Create-order application at commit time.
//!
//! 1. Re-run validation against live state (no mutation on failure)
//! 2. Build the OPEN order from the request
//! 3. Persist it
//! 4. Advance the deployment's sequence counter
//!
//! Steps 2-4 run only after step 1 passes, so a request that became
//! invalid since admission leaves state untouched. The counter moves only
//! once the order is stored, so a failed save leaves it where it was.

use marketd_state::State;
use marketd_types::{LedgerError, Order, Result, TxCreateOrder};

use crate::validator::validate_create_order;

/// Outcome of a committed create-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedOrder {
    /// The stored record.
    pub order: Order,
    /// Deployment sequence ordinal consumed by this creation.
    pub ordinal: u64,
}

/// Validate and apply a create-order request.
///
/// The advanced ordinal is reported but not folded into the stored
/// identifier; the caller-supplied `order_id` is stored unchanged.
///
/// # Errors
/// The validation rejection, or a store error if persisting fails. Neither
/// advances the sequence.
pub fn apply_create_order(state: &mut dyn State, tx: &TxCreateOrder) -> Result<CreatedOrder> {
    if let Err(err) = validate_create_order(&*state, tx) {
        if err.is_rejection() {
            tracing::warn!(
                order = %tx.order_id,
                reason = %err,
                "Create order rejected at commit"
            );
        }
        return Err(err);
    }

    let deployment = tx.deployment.as_ref().ok_or(LedgerError::NoDeployment)?;
    let order = Order::open(tx.order_id.clone(), tx.end_at);
    state.order_mut().save(order.clone())?;
    let ordinal = state.sequence_for(deployment).advance();

    tracing::info!(
        order = %order.id,
        group = %order.group(),
        owner = %deployment.owner.short(),
        ordinal,
        end_at = order.end_at,
        "Order opened"
    );

    Ok(CreatedOrder { order, ordinal })
}
