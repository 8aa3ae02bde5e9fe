//! On-demand influence computation.
//!
//! Nothing here is cached: every call walks the current board. A card's
//! strength is its modified influence plus per-card aura bonuses, floored
//! at zero; a deactivated card has strength zero and is skipped by
//! composition rules.

use crate::cards::Card;
use crate::core::{CardUid, MatchState, PlayerId};
use crate::zones::{Board, Lane};

use super::rules::{AuraRule, AuraScope, STANDARD_AURAS};

/// Computes derived influence from a rule table.
///
/// ## Example
///
/// ```
/// use influence_ccg::aura::AuraCalculator;
/// use influence_ccg::core::{MatchConfig, MatchState, PlayerId};
///
/// let state = MatchState::new(MatchConfig::default());
/// assert_eq!(AuraCalculator::standard().derived_influence(&state, PlayerId::ONE), 0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AuraCalculator {
    rules: &'static [AuraRule],
}

impl Default for AuraCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

impl AuraCalculator {
    /// Calculator over [`STANDARD_AURAS`].
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            rules: STANDARD_AURAS,
        }
    }

    /// Calculator over a custom rule table.
    #[must_use]
    pub const fn with_rules(rules: &'static [AuraRule]) -> Self {
        Self { rules }
    }

    /// Strength of one card on `board`.
    #[must_use]
    pub fn strength_on(&self, board: &Board, card: &Card) -> i32 {
        if !card.is_active() {
            return 0;
        }
        let bonus: i32 = self
            .rules
            .iter()
            .map(|rule| match rule.scope {
                AuraScope::Card(f) if card.is_government() => f(board, card),
                _ => 0,
            })
            .sum();
        (card.modified_influence() + bonus).max(0)
    }

    /// Strength of a card wherever it sits on either board.
    ///
    /// Returns `None` if the card is not on a board.
    #[must_use]
    pub fn card_strength(&self, state: &MatchState, uid: CardUid) -> Option<i32> {
        let (owner, _, card) = state.board_card(uid)?;
        Some(self.strength_on(&state.player(owner).board, card))
    }

    /// Sum of player-level aura bonuses.
    #[must_use]
    pub fn player_bonus(&self, board: &Board) -> i32 {
        self.rules
            .iter()
            .map(|rule| match rule.scope {
                AuraScope::Player(f) => f(board),
                AuraScope::Card(_) => 0,
            })
            .sum()
    }

    /// A player's total influence for round scoring.
    #[must_use]
    pub fn derived_influence(&self, state: &MatchState, player: PlayerId) -> i32 {
        let board = &state.player(player).board;
        let cards: i32 = board
            .lane(Lane::Government)
            .iter()
            .map(|card| self.strength_on(board, card))
            .sum();
        cards + self.player_bonus(board)
    }
}
