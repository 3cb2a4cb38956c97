//! Transaction payloads.
//!
//! The host decodes every transaction into one [`TxPayload`] variant and
//! offers it to each module in turn; a module claims only the variants it
//! owns.

use serde::{Deserialize, Serialize};

use crate::{Address, DeploymentGroupId, DeploymentId, OrderId};

/// Opens a market order for one group of an active deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxCreateOrder {
    pub deployment: Option<DeploymentId>,
    pub group_seq: u32,
    /// Identifier assigned by the caller.
    pub order_id: OrderId,
    /// Block height after which the order expires.
    pub end_at: u64,
}

impl TxCreateOrder {
    /// The group this request targets, if a deployment was given.
    #[must_use]
    pub fn group_id(&self) -> Option<DeploymentGroupId> {
        self.deployment.as_ref().map(|d| d.group(self.group_seq))
    }
}

/// Moves tokens between accounts. Owned by the account module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxTransfer {
    pub from: Address,
    pub to: Address,
    pub amount: u64,
}

/// Registers a deployment and its groups. Owned by the deployment module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxCreateDeployment {
    pub id: DeploymentId,
    pub group_count: u32,
}

/// Closes a deployment. Owned by the deployment module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxCloseDeployment {
    pub deployment: DeploymentId,
}

/// Every transaction kind the ledger understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxPayload {
    Transfer(TxTransfer),
    CreateDeployment(TxCreateDeployment),
    CloseDeployment(TxCloseDeployment),
    CreateOrder(TxCreateOrder),
}

impl TxPayload {
    /// Short name for log lines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer(_) => "transfer",
            Self::CreateDeployment(_) => "create-deployment",
            Self::CloseDeployment(_) => "close-deployment",
            Self::CreateOrder(_) => "create-order",
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl TxCreateOrder {
    /// A request for order `oseq` of group `gseq` in `deployment`, with
    /// an identifier consistent with the targeted group.
    pub fn for_group(deployment: &DeploymentId, gseq: u32, oseq: u32) -> Self {
        Self {
            deployment: Some(deployment.clone()),
            group_seq: gseq,
            order_id: deployment.group(gseq).order(oseq),
            end_at: 100,
        }
    }
}
