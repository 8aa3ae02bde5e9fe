//! Pending selections: multi-step interactions awaiting external input.
//!
//! A selection is a state flag, not a blocking call. START records a
//! [`PendingSelection`] and returns; the match stays suspended for the
//! acting player until a RESOLVE or a cancellation arrives.

pub mod steal;

pub use steal::{eligible_targets, resolve_steal, start_steal, StealRoll};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::core::{CardUid, PlayerId};

/// Dice-based steal variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StealVariant {
    /// Target chosen by the player; threshold is the target's strength.
    Bribe,
    /// Target chosen automatically; threshold derived from the victim's board.
    Blackmail,
}

/// What a pending selection is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionKind {
    Steal(StealVariant),
}

/// An interaction suspended until external input arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingSelection {
    pub kind: SelectionKind,
    pub acting_player: PlayerId,
    /// Pre-selected target, if the engine picked one.
    pub target: Option<CardUid>,
    /// Fixed threshold, if not derived from the target.
    pub required_roll: Option<i32>,
}

impl PendingSelection {
    /// Does this selection still need a target from outside?
    #[must_use]
    pub fn needs_target(&self) -> bool {
        self.target.is_none()
    }
}
