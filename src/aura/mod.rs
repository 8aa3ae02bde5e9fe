//! Continuous influence modifiers.
//!
//! Auras are derived from board composition and permanent slots and are
//! recomputed on every read.

pub mod calculator;
pub mod rules;

pub use calculator::AuraCalculator;
pub use rules::{AuraRule, AuraScope, STANDARD_AURAS};
