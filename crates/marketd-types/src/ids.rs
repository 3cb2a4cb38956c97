//! Identifiers for ledger entities.
//!
//! Every identifier is a composite key rooted at the deployment owner's
//! address. Child identifiers embed their parent, so an [`OrderId`] can
//! always be walked back to its group and deployment without a store
//! lookup. All identifiers are totally ordered by
//! `(owner, dseq, gseq, oseq)`, which is also the store's native
//! enumeration order.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{LedgerError, constants};

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// Raw account address of a deployment owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Address(pub Vec<u8>);

impl Address {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// First four bytes in hex, for log lines.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..self.0.len().min(4)])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl FromStr for Address {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(LedgerError::InvalidPath {
                path: s.to_string(),
                reason: "empty owner address".to_string(),
            });
        }
        // Lower-case only, matching `Display`, so each owner has one spelling.
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(LedgerError::InvalidPath {
                path: s.to_string(),
                reason: "owner address must be lower-case hex".to_string(),
            });
        }
        hex::decode(s)
            .map(Self)
            .map_err(|e| LedgerError::InvalidPath {
                path: s.to_string(),
                reason: format!("owner address is not hex: {e}"),
            })
    }
}

// ---------------------------------------------------------------------------
// DeploymentId
// ---------------------------------------------------------------------------

/// Identifies a deployment: the owner plus the owner's deployment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct DeploymentId {
    pub owner: Address,
    pub dseq: u64,
}

impl DeploymentId {
    #[must_use]
    pub fn new(owner: Address, dseq: u64) -> Self {
        Self { owner, dseq }
    }

    /// The identifier of group `gseq` within this deployment.
    #[must_use]
    pub fn group(&self, gseq: u32) -> DeploymentGroupId {
        DeploymentGroupId {
            owner: self.owner.clone(),
            dseq: self.dseq,
            gseq,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        format!("{}{sep}{}", self.owner, self.dseq, sep = constants::PATH_SEPARATOR)
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ---------------------------------------------------------------------------
// DeploymentGroupId
// ---------------------------------------------------------------------------

/// Identifies one resource group of a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct DeploymentGroupId {
    pub owner: Address,
    pub dseq: u64,
    pub gseq: u32,
}

impl DeploymentGroupId {
    #[must_use]
    pub fn deployment(&self) -> DeploymentId {
        DeploymentId {
            owner: self.owner.clone(),
            dseq: self.dseq,
        }
    }

    /// The identifier of order `oseq` within this group.
    #[must_use]
    pub fn order(&self, oseq: u32) -> OrderId {
        OrderId {
            owner: self.owner.clone(),
            dseq: self.dseq,
            gseq: self.gseq,
            oseq,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.owner,
            self.dseq,
            self.gseq,
            sep = constants::PATH_SEPARATOR
        )
    }
}

impl fmt::Display for DeploymentGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Identifies one order: `(owner, dseq, gseq, oseq)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrderId {
    pub owner: Address,
    pub dseq: u64,
    pub gseq: u32,
    pub oseq: u32,
}

impl OrderId {
    #[must_use]
    pub fn group(&self) -> DeploymentGroupId {
        DeploymentGroupId {
            owner: self.owner.clone(),
            dseq: self.dseq,
            gseq: self.gseq,
        }
    }

    #[must_use]
    pub fn deployment(&self) -> DeploymentId {
        DeploymentId {
            owner: self.owner.clone(),
            dseq: self.dseq,
        }
    }

    /// Whether this order is addressed to `group`.
    #[must_use]
    pub fn belongs_to(&self, group: &DeploymentGroupId) -> bool {
        self.owner == group.owner && self.dseq == group.dseq && self.gseq == group.gseq
    }

    /// Query-path form: `<owner-hex>/<dseq>/<gseq>/<oseq>`.
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.owner,
            self.dseq,
            self.gseq,
            self.oseq,
            sep = constants::PATH_SEPARATOR
        )
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
