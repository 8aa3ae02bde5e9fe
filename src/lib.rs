//! # influence-ccg
//!
//! Rules engine for a turn-based, two-player influence card game.
//!
//! The engine owns match state, resolves card effects through a typed
//! event queue, enforces the action-point economy, evaluates hidden traps
//! and continuous auras, and drives rounds to a match result.
//!
//! ## Design Principles
//!
//! 1. **One Aggregate**: Everything a match is made of lives in
//!    [`MatchState`], owned by a [`MatchEngine`]. No globals.
//!
//! 2. **Events Are Data**: Cards produce [`EffectEvent`]s; only the
//!    processor mutates state. Reactions go to the head of the queue,
//!    consequences to the tail.
//!
//! 3. **Recompute On Read**: Derived influence is never cached on a card.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im` for AI forks.
//!
//! - **Deterministic RNG**: ChaCha8 behind [`RandomSource`], captured in
//!   snapshots so replays are exact.
//!
//! - **Explicit Observers**: UI notifications go through [`SignalSink`]
//!   subscribers.
//!
//! ## Modules
//!
//! - `core`: Players, uids, state, RNG, configuration, errors
//! - `cards`: Card definitions, instances and catalog
//! - `zones`: Board lanes and permanent slots
//! - `economy`: AP costs
//! - `triggers`: Traps
//! - `aura`: Derived influence
//! - `effects`: Event taxonomy, queue, processor, card effect registry
//! - `selection`: Pending selections and the dice-based steal
//! - `signals`: Engine-to-UI notifications
//! - `rules`: Turn state machine, engine facade and AI surface
//! - `games`: Bundled starter content

pub mod aura;
pub mod cards;
pub mod core;
pub mod economy;
pub mod effects;
pub mod games;
pub mod rules;
pub mod selection;
pub mod signals;
pub mod triggers;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    CardUid, EngineError, GameRng, GameRngState, MatchConfig, MatchPhase, MatchState, PlayerId, PlayerMap,
    RandomSource, Result,
};

pub use crate::cards::{Card, CardCatalog, CardDefinition, CardId, CardKind, CardTag, Placement};

pub use crate::zones::{Board, Lane, PermanentSlot};

pub use crate::aura::AuraCalculator;

pub use crate::effects::{CardEffectRegistry, EffectEvent, EffectKey, EffectProcessor, EffectQueue};

pub use crate::triggers::{Trap, TrapKind, TrapRegistry};

pub use crate::selection::{PendingSelection, SelectionKind, StealVariant};

pub use crate::signals::{SignalHub, SignalSink, UiSignal};

pub use crate::rules::{ActionOutcome, GameResult, MatchActions, MatchEngine, MatchSnapshot, Rejection};
