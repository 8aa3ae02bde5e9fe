//! Match rules: the engine facade, the turn state machine and the
//! AI-facing action surface.
//!
//! - [`MatchEngine`]: Owns a match and validates every request
//! - [`MatchActions`]: Legal-play, cost, play, pass and end-turn operations
//! - [`turn`]: Turn hand-over, round scoring and match termination

pub mod actions;
pub mod engine;
pub mod turn;

pub use actions::{ActionOutcome, GameResult, MatchActions, Rejection};
pub use engine::{MatchEngine, MatchSnapshot};
