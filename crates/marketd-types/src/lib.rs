//! # marketd-types
//!
//! Shared types, errors, and configuration for the **marketd** ledger modules.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`DeploymentId`], [`DeploymentGroupId`], [`OrderId`]
//! - **Deployment model**: [`Deployment`], [`DeploymentState`], [`DeploymentGroup`], [`DeploymentGroupState`]
//! - **Order model**: [`Order`], [`OrderState`], [`Orders`]
//! - **Transactions**: [`TxPayload`], [`TxCreateOrder`] and the payloads owned by other modules
//! - **Responses**: [`Code`], [`ResponseCheckTx`], [`ResponseDeliverTx`], [`ResponseQuery`], [`Tag`]
//! - **Configuration**: [`OrderAppConfig`]
//! - **Errors**: [`LedgerError`] with `MKT_ERR_` prefix codes
//! - **Codec**: JSON encoding for the query response channel
//! - **Constants**: module names, query prefixes, tag keys

pub mod codec;
pub mod config;
pub mod constants;
pub mod deployment;
pub mod error;
pub mod ids;
pub mod order;
pub mod response;
pub mod tx;

// Re-export all primary types at crate root for ergonomic imports:
//   use marketd_types::{Order, OrderId, TxCreateOrder, ...};

pub use config::*;
pub use deployment::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use response::*;
pub use tx::*;

// Constants are accessed via `marketd_types::constants::FOO` and the codec
// via `marketd_types::codec::encode` (not re-exported to avoid name collisions).
