//! In-memory reference state.
//!
//! `MemState` implements every store contract over ordered maps, so
//! enumeration order is the identifier order on every replica. It is the
//! state used by tests and by hosts that keep the ledger in memory.
//!
//! ## Determinism
//!
//! [`MemState::state_hash`] commits to the full contents (deployments,
//! groups, orders, sequence counters) in canonical order. Two replicas that
//! applied the same transaction log produce the same hash.

use std::collections::BTreeMap;

use marketd_types::{
    Deployment, DeploymentGroup, DeploymentGroupId, DeploymentId, LedgerError, Order, OrderId,
    Result,
};
use sha2::{Digest, Sha256};

use crate::{DeploymentGroupStore, DeploymentStore, OrderStore, Sequence, State};

/// SHA-256 commitment to the full state contents.
pub type StateHash = [u8; 32];

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Injected failure switches, used to exercise infrastructure error paths.
#[derive(Debug, Clone, Copy, Default)]
struct Faults {
    reads: bool,
    writes: bool,
}

/// One ordered map of records plus its failure switches.
#[derive(Debug, Clone)]
pub(crate) struct Table<K, V> {
    rows: BTreeMap<K, V>,
    faults: Faults,
    name: &'static str,
}

impl<K: Ord, V: Clone> Table<K, V> {
    fn new(name: &'static str) -> Self {
        Self {
            rows: BTreeMap::new(),
            faults: Faults::default(),
            name,
        }
    }

    fn read(&self) -> Result<&BTreeMap<K, V>> {
        if self.faults.reads {
            return Err(LedgerError::Store(format!("{} table unreadable", self.name)));
        }
        Ok(&self.rows)
    }

    fn lookup(&self, key: &K) -> Result<Option<V>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.faults.writes {
            return Err(LedgerError::Store(format!("{} table unwritable", self.name)));
        }
        self.rows.insert(key, value);
        Ok(())
    }

    /// Number of records, bypassing fault injection.
    fn len(&self) -> usize {
        self.rows.len()
    }
}

impl DeploymentStore for Table<DeploymentId, Deployment> {
    fn get(&self, id: &DeploymentId) -> Result<Option<Deployment>> {
        self.lookup(id)
    }
}

impl DeploymentGroupStore for Table<DeploymentGroupId, DeploymentGroup> {
    fn get(&self, id: &DeploymentGroupId) -> Result<Option<DeploymentGroup>> {
        self.lookup(id)
    }
}

impl OrderStore for Table<OrderId, Order> {
    fn get(&self, id: &OrderId) -> Result<Option<Order>> {
        self.lookup(id)
    }

    fn for_group(&self, group: &DeploymentGroupId) -> Result<Vec<Order>> {
        // Orders of one group are contiguous in identifier order.
        let start = group.order(0);
        Ok(self
            .read()?
            .range(start..)
            .take_while(|(id, _)| id.belongs_to(group))
            .map(|(_, order)| order.clone())
            .collect())
    }

    fn all(&self) -> Result<Vec<Order>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn save(&mut self, order: Order) -> Result<()> {
        self.insert(order.id.clone(), order)
    }
}

// ---------------------------------------------------------------------------
// MemState
// ---------------------------------------------------------------------------

/// In-memory ledger state.
#[derive(Debug, Clone)]
pub struct MemState {
    deployments: Table<DeploymentId, Deployment>,
    groups: Table<DeploymentGroupId, DeploymentGroup>,
    orders: Table<OrderId, Order>,
    sequences: BTreeMap<DeploymentId, u64>,
    version: u64,
}

impl MemState {
    /// Create an empty state at version 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deployments: Table::new("deployment"),
            groups: Table::new("deployment-group"),
            orders: Table::new("order"),
            sequences: BTreeMap::new(),
            version: 0,
        }
    }

    /// Insert or replace a deployment. Used by the deployment module and
    /// by genesis loading.
    pub fn put_deployment(&mut self, deployment: Deployment) -> Result<()> {
        self.deployments.insert(deployment.id.clone(), deployment)
    }

    /// Insert or replace a deployment group.
    pub fn put_group(&mut self, group: DeploymentGroup) -> Result<()> {
        self.groups.insert(group.id.clone(), group)
    }

    /// Number of stored orders.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Seal the current contents: bump the version and return the hash.
    pub fn commit(&mut self) -> StateHash {
        self.version += 1;
        let hash = self.state_hash();
        tracing::debug!(
            version = self.version,
            orders = self.orders.len(),
            state_hash = hex::encode(hash),
            "State committed"
        );
        hash
    }

    /// Deterministic hash over the full contents.
    ///
    /// Depends only on stored records and counters, not on the version, so
    /// an aborted transaction can be detected by comparing hashes.
    #[must_use]
    pub fn state_hash(&self) -> StateHash {
        let mut hasher = Sha256::new();
        hasher.update(b"marketd:state_root:v1:");

        hasher.update((self.deployments.rows.len() as u64).to_le_bytes());
        for deployment in self.deployments.rows.values() {
            put_str(&mut hasher, &deployment.id.path());
            put_str(&mut hasher, &deployment.state.to_string());
        }

        hasher.update((self.groups.rows.len() as u64).to_le_bytes());
        for group in self.groups.rows.values() {
            put_str(&mut hasher, &group.id.path());
            put_str(&mut hasher, &group.state.to_string());
        }

        hasher.update((self.orders.rows.len() as u64).to_le_bytes());
        for order in self.orders.rows.values() {
            put_str(&mut hasher, &order.id.path());
            put_str(&mut hasher, &order.state.to_string());
            hasher.update(order.end_at.to_le_bytes());
        }

        hasher.update((self.sequences.len() as u64).to_le_bytes());
        for (deployment, value) in &self.sequences {
            put_str(&mut hasher, &deployment.path());
            hasher.update(value.to_le_bytes());
        }

        let result = hasher.finalize();
        let mut root = [0u8; 32];
        root.copy_from_slice(&result);
        root
    }
}

/// Length-prefixed so adjacent fields cannot alias.
fn put_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

impl Default for MemState {
    fn default() -> Self {
        Self::new()
    }
}

impl State for MemState {
    fn deployment(&self) -> &dyn DeploymentStore {
        &self.deployments
    }

    fn deployment_group(&self) -> &dyn DeploymentGroupStore {
        &self.groups
    }

    fn order(&self) -> &dyn OrderStore {
        &self.orders
    }

    fn order_mut(&mut self) -> &mut dyn OrderStore {
        &mut self.orders
    }

    fn sequence_for(&mut self, deployment: &DeploymentId) -> Sequence<'_> {
        Sequence::new(self.sequences.entry(deployment.clone()).or_insert(0))
    }

    fn current_sequence(&self, deployment: &DeploymentId) -> u64 {
        self.sequences.get(deployment).copied().unwrap_or(0)
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Test helpers: fixtures and fault injection.
#[cfg(any(test, feature = "test-helpers"))]
impl MemState {
    /// A state holding one deployment in `state` with groups `1..=groups`,
    /// all in `group_state`.
    pub fn with_deployment(
        id: &DeploymentId,
        state: marketd_types::DeploymentState,
        groups: u32,
        group_state: marketd_types::DeploymentGroupState,
    ) -> Self {
        let mut mem = Self::new();
        mem.seed_deployment(id, state, groups, group_state);
        mem
    }

    /// Add one deployment and its groups to this state.
    pub fn seed_deployment(
        &mut self,
        id: &DeploymentId,
        state: marketd_types::DeploymentState,
        groups: u32,
        group_state: marketd_types::DeploymentGroupState,
    ) {
        self.deployments
            .rows
            .insert(id.clone(), Deployment::new(id.clone(), state));
        for gseq in 1..=groups {
            let group = DeploymentGroup::new(id.group(gseq), group_state);
            self.groups.rows.insert(group.id.clone(), group);
        }
    }

    /// Store an order directly, bypassing the order module.
    pub fn seed_order(&mut self, order: Order) {
        self.orders.rows.insert(order.id.clone(), order);
    }

    pub fn fail_deployment_reads(&mut self, on: bool) {
        self.deployments.faults.reads = on;
    }

    pub fn fail_group_reads(&mut self, on: bool) {
        self.groups.faults.reads = on;
    }

    pub fn fail_order_reads(&mut self, on: bool) {
        self.orders.faults.reads = on;
    }

    pub fn fail_order_writes(&mut self, on: bool) {
        self.orders.faults.writes = on;
    }
}
