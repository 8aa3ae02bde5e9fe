//! Core engine types: players, uids, state, RNG, configuration, errors.
//!
//! This module contains the building blocks every other module leans on.
//! It owns the match aggregate but none of the rules that mutate it.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;
pub mod uid;

pub use config::{LaneCapacity, MatchConfig};
pub use error::{ConfigError, EngineError, RegistryError, Result};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{FixedRng, GameRng, GameRngState, RandomSource};
pub use state::{MatchPhase, MatchState, PlayerFlags, PlayerState};
pub use uid::CardUid;
