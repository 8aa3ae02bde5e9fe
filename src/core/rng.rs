//! Deterministic random number generation for chance mechanics.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Engine code only sees the [`RandomSource`] trait
//! - **Forkable**: Independent branches for AI lookahead
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use influence_ccg::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_die(6);
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same rolls
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_die(6), roll);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness consumed by the rules engine.
///
/// One source is shared per match so that replays are reproducible given
/// the same seed and the same event order.
pub trait RandomSource {
    /// Roll a die with `sides` faces. Returns a value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Pick an index in `0..len`. `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Shuffle a slice in place.
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Serializable state for snapshots, if the source supports it.
    fn checkpoint(&self) -> Option<GameRngState> {
        None
    }
}

/// Deterministic RNG with forking for AI lookahead.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(1..=sides.max(1))
    }

    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    fn checkpoint(&self) -> Option<GameRngState> {
        Some(self.state())
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Scripted source that replays predetermined die rolls.
///
/// Shuffles are no-ops and index picks always return 0, so deck order is
/// exactly the order the decks were built in. Once the script runs out,
/// every roll returns `fallback`.
#[derive(Clone, Debug, Default)]
pub struct FixedRng {
    rolls: VecDeque<u32>,
    fallback: u32,
}

impl FixedRng {
    /// Create a source that returns `rolls` in order, then 1 forever.
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback: 1,
        }
    }

    /// Create a source that always rolls `value`.
    #[must_use]
    pub fn always(value: u32) -> Self {
        Self {
            rolls: VecDeque::new(),
            fallback: value,
        }
    }

    /// Number of scripted rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for FixedRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let value = self.rolls.pop_front().unwrap_or(self.fallback);
        value.clamp(1, sides.max(1))
    }

    fn gen_index(&mut self, _len: usize) -> usize {
        0
    }

    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}
