//! Response envelopes returned to the host application.
//!
//! Every module call ends in exactly one [`Code`]. Log strings are free
//! text for humans and are never parsed.

use serde::{Deserialize, Serialize};

use crate::{LedgerError, constants};

/// Outcome code of a transaction or query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Code {
    #[default]
    Ok,
    UnknownTransaction,
    UnknownQuery,
    InvalidTransaction,
    Error,
    NotFound,
}

impl Code {
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::UnknownTransaction => write!(f, "UNKNOWN_TRANSACTION"),
            Self::UnknownQuery => write!(f, "UNKNOWN_QUERY"),
            Self::InvalidTransaction => write!(f, "INVALID_TRANSACTION"),
            Self::Error => write!(f, "ERROR"),
            Self::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

/// Key/value pair attached to a delivered transaction for indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The standard tag pair identifying the handling module and tx type.
    #[must_use]
    pub fn new_tags(app_name: &str, tx_type: &str) -> Vec<Self> {
        vec![
            Self::new(constants::TAG_NAME_APP, app_name),
            Self::new(constants::TAG_NAME_TX_TYPE, tx_type),
        ]
    }
}

/// Result of admission-time validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCheckTx {
    pub code: Code,
    pub log: String,
}

impl ResponseCheckTx {
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn unknown_transaction() -> Self {
        Self {
            code: Code::UnknownTransaction,
            log: "unknown transaction".to_string(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code.is_ok()
    }
}

impl From<LedgerError> for ResponseCheckTx {
    fn from(err: LedgerError) -> Self {
        Self {
            code: err.code(),
            log: err.to_string(),
        }
    }
}

/// Result of commit-time application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDeliverTx {
    pub code: Code,
    pub log: String,
    pub tags: Vec<Tag>,
}

impl ResponseDeliverTx {
    #[must_use]
    pub fn with_tags(tags: Vec<Tag>) -> Self {
        Self {
            tags,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn unknown_transaction() -> Self {
        Self {
            code: Code::UnknownTransaction,
            log: "unknown transaction".to_string(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code.is_ok()
    }
}

impl From<LedgerError> for ResponseDeliverTx {
    fn from(err: LedgerError) -> Self {
        Self {
            code: err.code(),
            log: err.to_string(),
            tags: Vec::new(),
        }
    }
}

/// A read-only query addressed by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQuery {
    pub path: String,
}

impl RequestQuery {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Result of a query: an encoded payload stamped with the state version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseQuery {
    pub code: Code,
    pub log: String,
    pub value: Vec<u8>,
    pub height: u64,
}

impl ResponseQuery {
    #[must_use]
    pub fn value(value: Vec<u8>, height: u64) -> Self {
        Self {
            value,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn not_found(log: String) -> Self {
        Self {
            code: Code::NotFound,
            log,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn unknown_query() -> Self {
        Self {
            code: Code::UnknownQuery,
            log: "invalid key".to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code.is_ok()
    }
}

impl From<LedgerError> for ResponseQuery {
    fn from(err: LedgerError) -> Self {
        Self {
            code: err.code(),
            log: err.to_string(),
            ..Self::default()
        }
    }
}
