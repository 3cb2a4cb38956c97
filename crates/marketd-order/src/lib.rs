//! # marketd-order
//!
//! **Order lifecycle module**: opens market orders against active
//! deployments and answers queries over order records.
//!
//! ## Architecture
//!
//! 1. **OrderApp**: dispatcher that claims `CreateOrder` transactions and the
//!    order query namespace, and implements [`Application`]
//! 2. **Validator**: ordered, read-only checks on a create-order request
//! 3. **Committer**: re-validates, advances the deployment sequence and
//!    persists the new OPEN order
//! 4. **Query**: point lookup and list-all over the order store
//! 5. **Path**: parses the key suffix of an order query path
//!
//! ## Transaction Flow
//!
//! ```text
//! check_tx   → validate_create_order(&State)                       (any number of times)
//! deliver_tx → apply_create_order(&mut State)
//!                → validate_create_order → sequence.advance() → order.save()
//! ```
//!
//! Validation always reads live state, so a second create for the same
//! group in the same block sees the first one's OPEN order.
//!
//! [`Application`]: marketd_state::Application

pub mod app;
pub mod committer;
pub mod path;
pub mod query;
pub mod validator;

pub use app::OrderApp;
pub use committer::{CreatedOrder, apply_create_order};
pub use path::{OrderQuery, parse_order_path};
pub use query::{resolve_all, resolve_by_key};
pub use validator::validate_create_order;
