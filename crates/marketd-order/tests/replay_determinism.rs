//! Replay determinism tests.
//!
//! Every replica applies the same transaction log in the same order and
//! must end with identical responses and identical state hashes. The logs
//! are generated from a seeded RNG so failures reproduce.

use marketd_order::OrderApp;
use marketd_state::{Application, MemState, State, StateHash, TxContext};
use marketd_types::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

const DEPLOYMENTS: u64 = 3;
const GROUPS: u32 = 4;

fn owner() -> Address {
    Address::new(vec![0x5e; 20])
}

/// Deployment 1..=DEPLOYMENTS; even ones are closed. Group 4 of each is
/// already matched.
fn genesis() -> MemState {
    let mut mem = MemState::new();
    for dseq in 1..=DEPLOYMENTS {
        let id = DeploymentId::new(owner(), dseq);
        let state = if dseq % 2 == 0 {
            DeploymentState::Closed
        } else {
            DeploymentState::Active
        };
        mem.seed_deployment(&id, state, GROUPS - 1, DeploymentGroupState::Open);
        mem.put_group(DeploymentGroup::new(
            id.group(GROUPS),
            DeploymentGroupState::Matched,
        ))
        .unwrap();
    }
    mem
}

/// A mix of create-order requests (valid, duplicate, unknown targets,
/// missing deployment) and transactions owned by other modules.
fn random_log(seed: u64, blocks: usize, per_block: usize) -> Vec<Vec<TxPayload>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..blocks)
        .map(|_| {
            (0..per_block)
                .map(|_| {
                    let dseq = rng.gen_range(1..=DEPLOYMENTS + 1);
                    let deployment = DeploymentId::new(owner(), dseq);
                    let gseq = rng.gen_range(1..=GROUPS + 1);
                    let oseq = rng.gen_range(1..=3);
                    match rng.gen_range(0..10) {
                        0 => TxPayload::Transfer(TxTransfer {
                            from: owner(),
                            to: Address::new(vec![1; 20]),
                            amount: rng.gen_range(1..1000),
                        }),
                        1 => TxPayload::CreateOrder(TxCreateOrder {
                            deployment: None,
                            ..TxCreateOrder::for_group(&deployment, gseq, oseq)
                        }),
                        _ => TxPayload::CreateOrder(TxCreateOrder::for_group(
                            &deployment,
                            gseq,
                            oseq,
                        )),
                    }
                })
                .collect()
        })
        .collect()
}

struct Replica {
    app: OrderApp,
    state: MemState,
}

impl Replica {
    fn new() -> Self {
        Self {
            app: OrderApp::default(),
            state: genesis(),
        }
    }

    /// Apply blocks, returning per-tx codes and per-block hashes.
    fn replay(&mut self, log: &[Vec<TxPayload>]) -> (Vec<Code>, Vec<StateHash>) {
        let mut codes = Vec::new();
        let mut hashes = Vec::new();
        for (height, block) in (1u64..).zip(log) {
            let ctx = TxContext::at_height(height);
            for tx in block {
                if !self.app.accept_tx(tx) {
                    continue;
                }
                // Admission first, as a mempool would, then commit.
                let _ = self.app.check_tx(&self.state, &ctx, tx);
                codes.push(self.app.deliver_tx(&mut self.state, &ctx, tx).code);
            }
            hashes.push(self.state.commit());
        }
        (codes, hashes)
    }
}

fn assert_at_most_one_open_per_group(state: &MemState) {
    for dseq in 1..=DEPLOYMENTS + 1 {
        for gseq in 1..=GROUPS + 1 {
            let group = DeploymentId::new(owner(), dseq).group(gseq);
            let open = state
                .order()
                .for_group(&group)
                .unwrap()
                .iter()
                .filter(|o| o.is_open())
                .count();
            assert!(open <= 1, "group {group} has {open} open orders");
        }
    }
}

#[test]
fn replicas_converge_on_same_log() {
    for seed in [1, 7, 42, 1337] {
        let log = random_log(seed, 20, 8);
        let mut a = Replica::new();
        let mut b = Replica::new();

        let (codes_a, hashes_a) = a.replay(&log);
        let (codes_b, hashes_b) = b.replay(&log);

        assert_eq!(codes_a, codes_b, "seed {seed}: responses diverged");
        assert_eq!(hashes_a, hashes_b, "seed {seed}: state diverged");
        assert_eq!(a.state.version(), 20);
    }
}

#[test]
fn open_order_invariant_holds_under_random_logs() {
    for seed in 0..16 {
        let mut replica = Replica::new();
        let (codes, _) = replica.replay(&random_log(seed, 15, 10));
        assert_at_most_one_open_per_group(&replica.state);

        // Every committed creation consumed exactly one sequence ordinal.
        let committed = codes.iter().filter(|c| c.is_ok()).count() as u64;
        let advanced: u64 = (1..=DEPLOYMENTS + 1)
            .map(|dseq| replica.state.current_sequence(&DeploymentId::new(owner(), dseq)))
            .sum();
        assert_eq!(committed, advanced, "seed {seed}");
        assert_eq!(replica.state.order_count() as u64, committed, "seed {seed}");
    }
}

#[test]
fn only_active_open_groups_receive_orders() {
    let mut replica = Replica::new();
    replica.replay(&random_log(99, 30, 10));

    for order in replica.state.order().all().unwrap() {
        let deployment = replica
            .state
            .deployment()
            .get(&order.id.deployment())
            .unwrap()
            .unwrap();
        assert!(deployment.is_active(), "order {} on closed deployment", order.id);
        assert!(order.id.gseq < GROUPS, "order {} on matched group", order.id);
    }
}

#[test]
fn check_tx_never_mutates() {
    let log = random_log(5, 5, 10);
    let app = OrderApp::default();
    let state = genesis();
    let before = state.state_hash();
    let ctx = TxContext::at_height(1);

    for tx in log.iter().flatten() {
        let first = app.check_tx(&state, &ctx, tx);
        let second = app.check_tx(&state, &ctx, tx);
        assert_eq!(first, second);
    }
    assert_eq!(state.state_hash(), before);
}
