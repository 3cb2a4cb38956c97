//! The order module as seen by the host router.

use marketd_state::{Application, State, TxContext};
use marketd_types::{
    OrderAppConfig, RequestQuery, ResponseCheckTx, ResponseDeliverTx, ResponseQuery, Result, Tag,
    TxCreateOrder, TxPayload, constants,
};

use crate::{
    committer::apply_create_order,
    path::{OrderQuery, parse_order_path},
    query::{resolve_all, resolve_by_key},
    validator::validate_create_order,
};

/// Order lifecycle module.
///
/// Holds only its configuration; ledger state arrives with every call.
#[derive(Debug, Clone, Default)]
pub struct OrderApp {
    config: OrderAppConfig,
}

impl OrderApp {
    /// Build the module from a validated configuration.
    ///
    /// # Errors
    /// `Configuration` if `config` fails [`OrderAppConfig::validate`].
    pub fn new(config: OrderAppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    fn check_create(
        &self,
        state: &dyn State,
        ctx: &TxContext,
        tx: &TxCreateOrder,
    ) -> ResponseCheckTx {
        match validate_create_order(state, tx) {
            Ok(()) => ResponseCheckTx::ok(),
            Err(err) => {
                if err.is_rejection() {
                    tracing::debug!(
                        app = %self.name(),
                        height = ctx.height,
                        order = %tx.order_id,
                        reason = %err,
                        "Create order not admitted"
                    );
                } else {
                    tracing::warn!(
                        app = %self.name(),
                        height = ctx.height,
                        error = %err,
                        "Create order admission failed"
                    );
                }
                err.into()
            }
        }
    }

    fn deliver_create(
        &self,
        state: &mut dyn State,
        ctx: &TxContext,
        tx: &TxCreateOrder,
    ) -> ResponseDeliverTx {
        match apply_create_order(state, tx) {
            Ok(_) => ResponseDeliverTx::with_tags(Tag::new_tags(
                self.name(),
                constants::TX_TYPE_CREATE_ORDER,
            )),
            Err(err) => {
                if !err.is_rejection() {
                    tracing::warn!(
                        app = %self.name(),
                        height = ctx.height,
                        order = %tx.order_id,
                        error = %err,
                        "Create order commit failed"
                    );
                }
                err.into()
            }
        }
    }

    fn unclaimed(&self, tx: &TxPayload) {
        tracing::debug!(app = %self.name(), kind = tx.kind(), "Transaction not claimed");
    }
}

impl Application for OrderApp {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn accept_tx(&self, tx: &TxPayload) -> bool {
        matches!(tx, TxPayload::CreateOrder(_))
    }

    fn check_tx(&self, state: &dyn State, ctx: &TxContext, tx: &TxPayload) -> ResponseCheckTx {
        match tx {
            TxPayload::CreateOrder(tx) => self.check_create(state, ctx, tx),
            other => {
                self.unclaimed(other);
                ResponseCheckTx::unknown_transaction()
            }
        }
    }

    fn deliver_tx(
        &self,
        state: &mut dyn State,
        ctx: &TxContext,
        tx: &TxPayload,
    ) -> ResponseDeliverTx {
        match tx {
            TxPayload::CreateOrder(tx) => self.deliver_create(state, ctx, tx),
            other => {
                self.unclaimed(other);
                ResponseDeliverTx::unknown_transaction()
            }
        }
    }

    fn accept_query(&self, req: &RequestQuery) -> bool {
        req.path.starts_with(&self.config.query_prefix)
    }

    fn query(&self, state: &dyn State, req: &RequestQuery) -> ResponseQuery {
        let Some(suffix) = req.path.strip_prefix(&self.config.query_prefix) else {
            return ResponseQuery::unknown_query();
        };

        match parse_order_path(suffix) {
            Ok(OrderQuery::All) => resolve_all(state),
            Ok(OrderQuery::One(id)) => resolve_by_key(state, &id),
            Err(err) => err.into(),
        }
    }
}
