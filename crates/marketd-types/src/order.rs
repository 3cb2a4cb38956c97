//! Order records.
//!
//! An order asks the marketplace to match one deployment group with a
//! provider. The order module only ever creates orders in [`OrderState::Open`];
//! later transitions belong to the matching and lease modules.

use serde::{Deserialize, Serialize};

use crate::{DeploymentGroupId, OrderId};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderState {
    Open,
    Matched,
    Closed,
    Canceled,
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Matched => write!(f, "MATCHED"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Canceled => write!(f, "CANCELED"),
        }
    }
}

/// A market order opened against one deployment group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub state: OrderState,
    /// Block height after which the order expires.
    pub end_at: u64,
}

impl Order {
    /// A freshly created order.
    #[must_use]
    pub fn open(id: OrderId, end_at: u64) -> Self {
        Self {
            id,
            state: OrderState::Open,
            end_at,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == OrderState::Open
    }

    #[must_use]
    pub fn group(&self) -> DeploymentGroupId {
        self.id.group()
    }
}

/// Collection envelope returned by list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orders {
    pub items: Vec<Order>,
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy(id: OrderId, state: OrderState) -> Self {
        Self {
            id,
            state,
            end_at: 100,
        }
    }
}
