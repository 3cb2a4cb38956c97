//! Exercises `MemState` purely through the `State` handle, the way a
//! module sees it: a `&dyn State` for reads and a `&mut dyn State` for
//! writes, never the concrete type.

use marketd_state::{MemState, State};
use marketd_types::*;

fn owner() -> Address {
    Address::new(vec![0x42; 20])
}

fn genesis() -> MemState {
    let mut mem = MemState::new();
    let d = DeploymentId::new(owner(), 1);
    mem.put_deployment(Deployment::new(d.clone(), DeploymentState::Active))
        .unwrap();
    mem.put_group(DeploymentGroup::new(d.group(1), DeploymentGroupState::Open))
        .unwrap();
    mem.put_group(DeploymentGroup::new(d.group(2), DeploymentGroupState::Closed))
        .unwrap();
    mem
}

/// What a module does at commit time, minus validation.
fn open_order(state: &mut dyn State, id: OrderId) -> u64 {
    let ordinal = state.sequence_for(&id.deployment()).advance();
    state.order_mut().save(Order::open(id, 500)).unwrap();
    ordinal
}

fn open_orders_in(state: &dyn State, group: &DeploymentGroupId) -> usize {
    state
        .order()
        .for_group(group)
        .unwrap()
        .iter()
        .filter(|o| o.is_open())
        .count()
}

#[test]
fn writes_are_visible_to_the_next_read() {
    let mut mem = genesis();
    let group = DeploymentId::new(owner(), 1).group(1);

    assert_eq!(open_orders_in(&mem, &group), 0);
    assert_eq!(open_order(&mut mem, group.order(1)), 1);
    assert_eq!(open_orders_in(&mem, &group), 1);
    assert_eq!(open_order(&mut mem, group.order(2)), 2);
    assert_eq!(open_orders_in(&mem, &group), 2);
}

#[test]
fn group_states_read_back() {
    let mem = genesis();
    let state: &dyn State = &mem;
    let d = DeploymentId::new(owner(), 1);

    assert!(state.deployment().get(&d).unwrap().unwrap().is_active());
    assert!(state.deployment_group().get(&d.group(1)).unwrap().unwrap().is_open());
    assert!(!state.deployment_group().get(&d.group(2)).unwrap().unwrap().is_open());
}

#[test]
fn replicas_agree_after_identical_logs() {
    let mut a = genesis();
    let mut b = genesis();
    let group = DeploymentId::new(owner(), 1).group(1);

    for oseq in 1..=3 {
        open_order(&mut a, group.order(oseq));
        open_order(&mut b, group.order(oseq));
        assert_eq!(a.commit(), b.commit());
    }
    assert_eq!(a.version(), 3);
    assert_eq!(b.version(), 3);
}

#[test]
fn replicas_diverge_on_different_logs() {
    let mut a = genesis();
    let mut b = genesis();
    let group = DeploymentId::new(owner(), 1).group(1);

    open_order(&mut a, group.order(1));
    open_order(&mut b, group.order(2));
    assert_ne!(a.commit(), b.commit());
}
