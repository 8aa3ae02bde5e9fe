//! Performance benchmarks for the match engine.
//!
//! Measures three things:
//!
//! 1. **Full match** - deal a starter match and play it out with a greedy policy
//! 2. **Fork** - clone a mid-game engine for lookahead
//! 3. **Snapshot** - encode and decode a mid-game snapshot as JSON

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use influence_ccg::games::starter;
use influence_ccg::rules::{MatchActions, MatchEngine, MatchSnapshot};
use influence_ccg::selection::eligible_targets;

/// Requests issued before giving up on a match.
const MAX_STEPS: usize = 2_000;

/// Play the first legal card, resolving steals against the first eligible
/// target; pass when nothing is playable.
fn greedy_step(engine: &mut MatchEngine) -> bool {
    if let Some(pending) = engine.state().pending {
        let victim = pending.acting_player.other();
        let target = if pending.needs_target() {
            eligible_targets(engine.state(), victim).next().map(|c| c.uid)
        } else {
            pending.target
        };
        engine.resolve_selection(pending.acting_player, target);
        return true;
    }
    let Some(player) = engine.state().current_player() else {
        return false;
    };
    match engine.legal_plays(player).first() {
        Some(&uid) => engine.submit_play(player, uid),
        None => engine.submit_pass(player),
    };
    true
}

fn play_out(engine: &mut MatchEngine) -> usize {
    let mut steps = 0;
    while steps < MAX_STEPS && greedy_step(engine) {
        steps += 1;
    }
    steps
}

fn mid_game(seed: u64) -> MatchEngine {
    let mut engine = starter::new_match(seed).expect("starter match");
    for _ in 0..12 {
        greedy_step(&mut engine);
    }
    engine
}

fn bench_full_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_match");

    for seed in [1_u64, 42, 1337] {
        group.bench_with_input(BenchmarkId::new("greedy", seed), &seed, |b, &seed| {
            b.iter(|| {
                let mut engine = starter::new_match(seed).expect("starter match");
                black_box(play_out(&mut engine))
            });
        });
    }

    group.finish();
}

fn bench_fork(c: &mut Criterion) {
    let mut engine = mid_game(7);

    c.bench_function("fork_mid_game", |b| {
        b.iter(|| black_box(engine.fork()));
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = mid_game(7);
    let json = engine.snapshot().to_json().expect("encode");

    c.bench_function("snapshot_encode", |b| {
        b.iter(|| black_box(engine.snapshot().to_json().expect("encode")));
    });
    c.bench_function("snapshot_decode", |b| {
        b.iter(|| black_box(MatchSnapshot::from_json(&json).expect("decode")));
    });
}

criterion_group!(benches, bench_full_match, bench_fork, bench_snapshot);
criterion_main!(benches);
