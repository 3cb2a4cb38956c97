//! Create-order validation.
//!
//! The same checks run at admission and again immediately before commit.
//! They only read state, and they read it live: nothing is cached between
//! calls, so a commit always sees every earlier commit of the block.
//!
//! ## Check Order
//!
//! 1. a deployment is referenced
//! 2. the deployment exists
//! 3. the deployment is ACTIVE
//! 4. the addressed group exists
//! 5. the group is OPEN
//! 6. the group has no OPEN order
//! 7. the supplied order id addresses that group
//!
//! The first failing check decides the rejection. A store failure at any
//! step is returned as-is, never as a rejection.

use marketd_state::State;
use marketd_types::{LedgerError, Order, Result, TxCreateOrder};

/// Validate a create-order request against current state.
///
/// # Errors
/// A rejection (`LedgerError::is_rejection`) naming the first failed check,
/// or the store's own error if a read fails.
pub fn validate_create_order(state: &dyn State, tx: &TxCreateOrder) -> Result<()> {
    let (Some(deployment_id), Some(group_id)) = (tx.deployment.as_ref(), tx.group_id()) else {
        return Err(LedgerError::NoDeployment);
    };

    let deployment = state
        .deployment()
        .get(deployment_id)?
        .ok_or(LedgerError::DeploymentNotFound)?;
    if !deployment.is_active() {
        return Err(LedgerError::DeploymentNotActive);
    }

    let group = state
        .deployment_group()
        .get(&group_id)?
        .ok_or(LedgerError::GroupNotFound)?;
    if !group.is_open() {
        return Err(LedgerError::GroupNotOpen);
    }

    // At most one OPEN order per group.
    let others = state.order().for_group(&group.id)?;
    if others.iter().any(Order::is_open) {
        return Err(LedgerError::OrderExistsForGroup);
    }

    if !tx.order_id.belongs_to(&group.id) {
        return Err(LedgerError::OrderGroupMismatch {
            order: tx.order_id.path(),
            group: group.id.path(),
        });
    }

    tracing::debug!(
        order = %tx.order_id,
        group = %group.id,
        existing = others.len(),
        "Create order valid"
    );
    Ok(())
}
