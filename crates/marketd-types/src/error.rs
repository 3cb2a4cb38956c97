//! Error types for the marketd ledger modules.
//!
//! All errors use the `MKT_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by family:
//! - 1xx: Transaction rejections (deterministic, user-facing, never retried)
//! - 2xx: Query input errors
//! - 9xx: Infrastructure / internal errors (store, codec, configuration)
//!
//! Rejections and infrastructure failures must never be confused: a replica
//! that rejects a transaction because its store failed would diverge from
//! one whose store did not. [`LedgerError::is_rejection`] is the single
//! place that draws the line.

use thiserror::Error;

use crate::Code;

/// Central error enum for all marketd operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // =================================================================
    // Transaction Rejections (1xx)
    // =================================================================
    /// The create-order request carried no deployment reference.
    #[error("MKT_ERR_100: No deployment specified")]
    NoDeployment,

    /// The referenced deployment is not in the store.
    #[error("MKT_ERR_101: Deployment not found")]
    DeploymentNotFound,

    /// The referenced deployment exists but is not ACTIVE.
    #[error("MKT_ERR_102: Deployment not in active state")]
    DeploymentNotActive,

    /// The addressed deployment group is not in the store.
    #[error("MKT_ERR_103: Group not found")]
    GroupNotFound,

    /// The addressed deployment group exists but is not OPEN.
    #[error("MKT_ERR_104: Group not in open state")]
    GroupNotOpen,

    /// The group already has an OPEN order.
    #[error("MKT_ERR_105: Order already exists for group")]
    OrderExistsForGroup,

    /// The supplied order identifier addresses a different group.
    #[error("MKT_ERR_106: Order id {order} does not match group {group}")]
    OrderGroupMismatch { order: String, group: String },

    // =================================================================
    // Query Errors (2xx)
    // =================================================================
    /// A query path suffix could not be parsed into an order key.
    #[error("MKT_ERR_200: Invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    // =================================================================
    // Infrastructure (9xx)
    // =================================================================
    /// A store read or write failed.
    #[error("MKT_ERR_900: Store error: {0}")]
    Store(String),

    /// Serialization / deserialization error.
    #[error("MKT_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (empty module name, malformed prefix, etc.).
    #[error("MKT_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

impl LedgerError {
    /// Whether this is a deterministic validation rejection rather than an
    /// infrastructure failure.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::NoDeployment
                | Self::DeploymentNotFound
                | Self::DeploymentNotActive
                | Self::GroupNotFound
                | Self::GroupNotOpen
                | Self::OrderExistsForGroup
                | Self::OrderGroupMismatch { .. }
        )
    }

    /// The response code reported to the host for this error.
    #[must_use]
    pub fn code(&self) -> Code {
        if self.is_rejection() {
            Code::InvalidTransaction
        } else {
            Code::Error
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let msg = format!("{}", LedgerError::DeploymentNotActive);
        assert!(msg.starts_with("MKT_ERR_102"), "Got: {msg}");
        assert!(msg.contains("Deployment not in active state"));
    }

    #[test]
    fn rejections_map_to_invalid_transaction() {
        let rejections = [
            LedgerError::NoDeployment,
            LedgerError::DeploymentNotFound,
            LedgerError::DeploymentNotActive,
            LedgerError::GroupNotFound,
            LedgerError::GroupNotOpen,
            LedgerError::OrderExistsForGroup,
            LedgerError::OrderGroupMismatch {
                order: "a/1/1/1".into(),
                group: "a/1/2".into(),
            },
        ];
        for err in rejections {
            assert!(err.is_rejection(), "{err}");
            assert_eq!(err.code(), Code::InvalidTransaction);
        }
    }

    #[test]
    fn infrastructure_maps_to_error() {
        let failures = [
            LedgerError::Store("disk gone".into()),
            LedgerError::Serialization("bad".into()),
            LedgerError::Configuration("bad".into()),
            LedgerError::InvalidPath {
                path: "x".into(),
                reason: "bad".into(),
            },
        ];
        for err in failures {
            assert!(!err.is_rejection(), "{err}");
            assert_eq!(err.code(), Code::Error);
        }
    }

    #[test]
    fn invalid_path_carries_offending_text() {
        let err = LedgerError::InvalidPath {
            path: "nope/x".into(),
            reason: "expected 4 components".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("nope/x"));
        assert!(msg.contains("expected 4 components"));
    }

    #[test]
    fn all_errors_have_mkt_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(LedgerError::NoDeployment),
            Box::new(LedgerError::GroupNotOpen),
            Box::new(LedgerError::Store("test".into())),
            Box::new(LedgerError::Configuration("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("MKT_ERR_"),
                "Error missing MKT_ERR_ prefix: {msg}"
            );
        }
    }
}
