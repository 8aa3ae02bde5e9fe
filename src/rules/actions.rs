//! The AI-facing surface of the engine.
//!
//! [`MatchActions`] is everything an automated opponent is allowed to call.
//! Requests that break the rules come back as [`ActionOutcome::Rejected`]
//! with a log entry; they never error or panic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CardUid, PlayerId};
use crate::zones::Lane;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self == GameResult::Winner(player)
    }
}

/// Why a request was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the match is over")]
    GameOver,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("{0} has already passed this round")]
    AlreadyPassed(PlayerId),

    #[error("a selection is pending")]
    SelectionPending,

    #[error("no selection is pending for {0}")]
    NoSelection(PlayerId),

    #[error("{0} is not in hand")]
    NotInHand(CardUid),

    #[error("the {0} lane is full")]
    LaneFull(Lane),

    #[error("{needed} AP needed, {available} available")]
    InsufficientAp { needed: u32, available: u32 },
}

/// Outcome of a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Rejected(Rejection),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    /// The rejection, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ActionOutcome::Applied => None,
            ActionOutcome::Rejected(r) => Some(r),
        }
    }
}

/// Operations available to an automated opponent.
///
/// ## Example
///
/// ```
/// use influence_ccg::games::starter;
/// use influence_ccg::rules::MatchActions;
///
/// let mut engine = starter::new_match(7).unwrap();
/// let player = engine.state().current_player().unwrap();
///
/// if let Some(&uid) = engine.legal_plays(player).first() {
///     assert!(engine.cost_of(player, uid).is_some());
///     assert!(engine.submit_play(player, uid).is_applied());
/// }
/// ```
pub trait MatchActions {
    /// Cards in `player`'s hand that can be played right now.
    fn legal_plays(&self, player: PlayerId) -> Vec<CardUid>;

    /// AP cost of a card in `player`'s hand.
    fn cost_of(&self, player: PlayerId, uid: CardUid) -> Option<u32>;

    /// Play a card from hand.
    fn submit_play(&mut self, player: PlayerId, uid: CardUid) -> ActionOutcome;

    /// Pass for the rest of the round.
    fn submit_pass(&mut self, player: PlayerId) -> ActionOutcome;

    /// Hand the turn over.
    fn end_turn(&mut self, player: PlayerId) -> ActionOutcome;

    /// Final result, once the match is over.
    fn result(&self) -> Option<GameResult>;
}
