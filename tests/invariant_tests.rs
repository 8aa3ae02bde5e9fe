//! Property tests over random play.
//!
//! Each case deals a seeded starter match and feeds it an arbitrary
//! sequence of requests, legal or not. Structural invariants must hold
//! after every request.

mod common;

use common::{assert_lanes_within_capacity, assert_unique_residency};
use influence_ccg::core::MatchState;
use influence_ccg::games::starter::{self, STARTER_DECK};
use influence_ccg::rules::{MatchActions, MatchEngine};
use influence_ccg::selection::eligible_targets;
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Request {
    /// Play the n-th legal card, wrapping.
    Play(usize),
    /// Play the n-th card in hand, legal or not.
    PlayAny(usize),
    Pass,
    EndTurn,
    /// Resolve a pending selection against the n-th eligible target.
    Resolve(usize),
    Cancel,
}

fn request() -> impl Strategy<Value = Request> {
    prop_oneof![
        4 => any::<usize>().prop_map(Request::Play),
        1 => any::<usize>().prop_map(Request::PlayAny),
        1 => Just(Request::Pass),
        2 => Just(Request::EndTurn),
        2 => any::<usize>().prop_map(Request::Resolve),
        1 => Just(Request::Cancel),
    ]
}

fn apply(engine: &mut MatchEngine, request: Request) {
    let player = match (engine.state().pending, engine.state().current_player()) {
        (Some(pending), _) => pending.acting_player,
        (None, Some(player)) => player,
        (None, None) => return,
    };
    match request {
        Request::Play(n) => {
            let legal = engine.legal_plays(player);
            if !legal.is_empty() {
                engine.submit_play(player, legal[n % legal.len()]);
            }
        }
        Request::PlayAny(n) => {
            let hand = &engine.state().player(player).hand;
            if !hand.is_empty() {
                let uid = hand[n % hand.len()].uid;
                engine.submit_play(player, uid);
            }
        }
        Request::Pass => {
            engine.submit_pass(player);
        }
        Request::EndTurn => {
            engine.end_turn(player);
        }
        Request::Resolve(n) => {
            let targets: Vec<_> = eligible_targets(engine.state(), player.other())
                .map(|c| c.uid)
                .collect();
            let target = (!targets.is_empty()).then(|| targets[n % targets.len()]);
            engine.resolve_selection(player, target);
        }
        Request::Cancel => {
            engine.cancel_selection(player);
        }
    }
}

fn check(state: &MatchState) {
    assert_unique_residency(state);
    assert_lanes_within_capacity(state);
    assert_eq!(state.all_uids().count(), STARTER_DECK.len() * 2);

    let wins: u32 = state.players.iter().map(|(_, p)| p.round_wins).sum();
    assert!(wins < state.round + 1);
    if let Some(pending) = state.pending {
        assert_eq!(state.current_player(), Some(pending.acting_player));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariants_hold_under_random_play(
        seed in any::<u64>(),
        requests in prop::collection::vec(request(), 1..200),
    ) {
        let mut engine = starter::new_match(seed).unwrap();
        check(engine.state());

        for request in requests {
            apply(&mut engine, request);
            check(engine.state());
            if engine.result().is_some() {
                break;
            }
        }
    }

    #[test]
    fn prop_same_seed_same_match(
        seed in any::<u64>(),
        requests in prop::collection::vec(request(), 1..60),
    ) {
        let mut a = starter::new_match(seed).unwrap();
        let mut b = starter::new_match(seed).unwrap();

        for request in requests {
            apply(&mut a, request);
            apply(&mut b, request);
        }
        prop_assert_eq!(a.state(), b.state());
    }
}
