//! Order queries.
//!
//! Both resolvers encode their result with the response codec and stamp
//! it with the state version it was read at. A missing order is the
//! `NOT_FOUND` outcome; only store and codec failures produce `ERROR`.

use marketd_state::State;
use marketd_types::{OrderId, Orders, ResponseQuery, codec};
use serde::Serialize;

/// Look up one order.
pub fn resolve_by_key(state: &dyn State, id: &OrderId) -> ResponseQuery {
    match state.order().get(id) {
        Ok(Some(order)) => encoded(&order, state.version()),
        Ok(None) => ResponseQuery::not_found(format!("order {} not found", id.path())),
        Err(err) => {
            tracing::warn!(order = %id, error = %err, "Order lookup failed");
            err.into()
        }
    }
}

/// List every order in the store's native order.
pub fn resolve_all(state: &dyn State) -> ResponseQuery {
    match state.order().all() {
        Ok(items) => encoded(&Orders { items }, state.version()),
        Err(err) => {
            tracing::warn!(error = %err, "Order listing failed");
            err.into()
        }
    }
}

fn encoded<T: Serialize>(value: &T, height: u64) -> ResponseQuery {
    match codec::encode(value) {
        Ok(bytes) => ResponseQuery::value(bytes, height),
        Err(err) => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use marketd_state::MemState;
    use marketd_types::*;

    use super::*;

    fn d1() -> DeploymentId {
        DeploymentId::new(Address::new(vec![0xd1; 20]), 1)
    }

    fn with_orders(n: u32) -> MemState {
        let mut mem =
            MemState::with_deployment(&d1(), DeploymentState::Active, n, DeploymentGroupState::Open);
        for gseq in 1..=n {
            mem.seed_order(Order::open(d1().group(gseq).order(1), u64::from(gseq) * 10));
        }
        mem
    }

    #[test]
    fn found_order_is_encoded_at_version() {
        let mut mem = with_orders(2);
        mem.commit();
        mem.commit();

        let id = d1().group(2).order(1);
        let resp = resolve_by_key(&mem, &id);
        assert_eq!(resp.code, Code::Ok);
        assert_eq!(resp.height, 2);
        let order: Order = codec::decode(&resp.value).unwrap();
        assert_eq!(order, Order::open(id, 20));
    }

    #[test]
    fn missing_order_is_not_found() {
        let mem = with_orders(1);
        let id = d1().group(1).order(2);
        let resp = resolve_by_key(&mem, &id);
        assert_eq!(resp.code, Code::NotFound);
        assert!(resp.log.contains(&id.path()), "{}", resp.log);
        assert!(resp.value.is_empty());
    }

    #[test]
    fn list_all_roundtrips() {
        let mem = with_orders(3);
        let resp = resolve_all(&mem);
        assert_eq!(resp.code, Code::Ok);
        let coll: Orders = codec::decode(&resp.value).unwrap();
        assert_eq!(coll.items, mem.order().all().unwrap());
        assert_eq!(coll.items.len(), 3);
    }

    #[test]
    fn list_all_empty_store() {
        let mem = MemState::new();
        let coll: Orders = codec::decode(&resolve_all(&mem).value).unwrap();
        assert!(coll.items.is_empty());
    }

    #[test]
    fn store_failure_is_error_not_not_found() {
        let mut mem = with_orders(1);
        mem.fail_order_reads(true);
        assert_eq!(resolve_by_key(&mem, &d1().group(1).order(1)).code, Code::Error);
        assert_eq!(resolve_all(&mem).code, Code::Error);
    }
}
