//! Store contracts consumed by the ledger modules.
//!
//! A lookup that finds nothing is `Ok(None)`; `Err` is reserved for the
//! store itself failing. Callers rely on that split to keep validation
//! rejections apart from infrastructure errors.

use marketd_types::{
    Deployment, DeploymentGroup, DeploymentGroupId, DeploymentId, Order, OrderId, Result,
};

use crate::Sequence;

/// Read access to deployments.
pub trait DeploymentStore {
    fn get(&self, id: &DeploymentId) -> Result<Option<Deployment>>;
}

/// Read access to deployment groups.
pub trait DeploymentGroupStore {
    fn get(&self, id: &DeploymentGroupId) -> Result<Option<DeploymentGroup>>;
}

/// Read/write access to orders.
pub trait OrderStore {
    fn get(&self, id: &OrderId) -> Result<Option<Order>>;

    /// Every order addressed to `group`, in the store's native order.
    fn for_group(&self, group: &DeploymentGroupId) -> Result<Vec<Order>>;

    /// Every order, in the store's native order.
    fn all(&self) -> Result<Vec<Order>>;

    /// Insert or replace the order keyed by `order.id`.
    fn save(&mut self, order: Order) -> Result<()>;
}

/// The ledger state handle passed into every module call.
///
/// Implementations must not cache across calls: each accessor reflects
/// every write committed so far, including earlier transactions of the
/// block being applied.
pub trait State {
    fn deployment(&self) -> &dyn DeploymentStore;

    fn deployment_group(&self) -> &dyn DeploymentGroupStore;

    fn order(&self) -> &dyn OrderStore;

    fn order_mut(&mut self) -> &mut dyn OrderStore;

    /// Counter used to number child entities of `deployment`.
    fn sequence_for(&mut self, deployment: &DeploymentId) -> Sequence<'_>;

    /// Read the counter without advancing it.
    fn current_sequence(&self, deployment: &DeploymentId) -> u64;

    /// Committed version (block height) of this state.
    fn version(&self) -> u64;
}
