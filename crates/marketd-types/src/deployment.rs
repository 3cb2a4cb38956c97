//! Deployment and deployment-group records.
//!
//! Both are owned by the deployment module; the order module only reads
//! them to decide whether an order may be opened.

use serde::{Deserialize, Serialize};

use crate::{DeploymentGroupId, DeploymentId};

/// Lifecycle state of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum DeploymentState {
    Active,
    Closed,
}

impl std::fmt::Display for DeploymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Lifecycle state of a deployment group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum DeploymentGroupState {
    /// Accepting a new order.
    Open,
    /// An order is outstanding.
    Ordered,
    /// A provider has been matched.
    Matched,
    Closed,
}

impl std::fmt::Display for DeploymentGroupState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Ordered => write!(f, "ORDERED"),
            Self::Matched => write!(f, "MATCHED"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

/// A requested workload on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: DeploymentId,
    pub state: DeploymentState,
}

impl Deployment {
    #[must_use]
    pub fn new(id: DeploymentId, state: DeploymentState) -> Self {
        Self { id, state }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == DeploymentState::Active
    }
}

/// One biddable resource group of a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentGroup {
    pub id: DeploymentGroupId,
    pub state: DeploymentGroupState,
}

impl DeploymentGroup {
    #[must_use]
    pub fn new(id: DeploymentGroupId, state: DeploymentGroupState) -> Self {
        Self { id, state }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == DeploymentGroupState::Open
    }
}
