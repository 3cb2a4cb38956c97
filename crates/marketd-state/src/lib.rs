//! # marketd-state
//!
//! **Ledger state plumbing** shared by every marketd module.
//!
//! ## Architecture
//!
//! Modules never own ledger state. The host hands each call an explicit
//! handle and takes it back when the call returns:
//! 1. **State**: the handle, exposing one store per entity kind plus the
//!    per-deployment sequence counters and the committed version
//! 2. **Stores**: `DeploymentStore`, `DeploymentGroupStore`, `OrderStore`
//! 3. **Sequence**: monotonic per-deployment counter handle
//! 4. **Application**: the capability interface every module implements
//! 5. **MemState**: the reference in-memory state with deterministic hashing
//!
//! ## Call Flow
//!
//! ```text
//! host → Application.accept_tx() → check_tx(&State) ... deliver_tx(&mut State)
//!      → MemState.commit() → state hash
//! ```

pub mod app;
pub mod memory;
pub mod sequence;
pub mod store;

pub use app::{Application, TxContext};
pub use memory::{MemState, StateHash};
pub use sequence::Sequence;
pub use store::{DeploymentGroupStore, DeploymentStore, OrderStore, State};
