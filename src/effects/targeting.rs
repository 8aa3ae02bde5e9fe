//! Strongest/weakest target selection.
//!
//! Strength is the aura calculator's per-card figure. Ties go to the card
//! placed earliest, i.e. the one nearest the front of the lane.

use crate::aura::AuraCalculator;
use crate::cards::Card;
use crate::core::{CardUid, MatchState, PlayerId};
use crate::zones::Lane;

/// Which extreme to pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    Strongest,
    Weakest,
}

/// Pick a card from `player`'s government lane.
///
/// Only cards accepted by `filter` are considered.
#[must_use]
pub fn pick_government(
    state: &MatchState,
    auras: &AuraCalculator,
    player: PlayerId,
    pick: Pick,
    filter: impl Fn(&Card) -> bool,
) -> Option<CardUid> {
    let board = &state.player(player).board;
    let mut best: Option<(i32, CardUid)> = None;
    for card in board.lane(Lane::Government).iter().filter(|c| filter(c)) {
        let strength = auras.strength_on(board, card);
        let better = match (best, pick) {
            (None, _) => true,
            (Some((s, _)), Pick::Strongest) => strength > s,
            (Some((s, _)), Pick::Weakest) => strength < s,
        };
        if better {
            best = Some((strength, card.uid));
        }
    }
    best.map(|(_, uid)| uid)
}

/// Strongest government card, any state.
#[must_use]
pub fn strongest_government(state: &MatchState, auras: &AuraCalculator, player: PlayerId) -> Option<CardUid> {
    pick_government(state, auras, player, Pick::Strongest, |_| true)
}

/// Weakest government card, any state.
#[must_use]
pub fn weakest_government(state: &MatchState, auras: &AuraCalculator, player: PlayerId) -> Option<CardUid> {
    pick_government(state, auras, player, Pick::Weakest, |_| true)
}

/// Active and unprotected: a card an opponent can act on.
#[must_use]
pub fn is_vulnerable(card: &Card) -> bool {
    card.is_active() && !card.protected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use crate::core::MatchConfig;

    fn board_of(influences: &[i32]) -> (MatchState, Vec<CardUid>) {
        let mut state = MatchState::new(MatchConfig::default());
        let caps = state.config.lane_capacity;
        let mut uids = Vec::new();
        for (i, &inf) in influences.iter().enumerate() {
            let uid = state.alloc_uid();
            let def = CardDefinition::government(CardId::new(i as u32), "M", 1, inf);
            state.players[PlayerId::TWO]
                .board
                .place(Lane::Government, Card::from_definition(&def, uid, PlayerId::TWO), &caps)
                .unwrap();
            uids.push(uid);
        }
        (state, uids)
    }

    #[test]
    fn test_ties_break_to_earliest() {
        let (state, uids) = board_of(&[3, 5, 5, 1, 1]);
        let auras = AuraCalculator::standard();

        assert_eq!(strongest_government(&state, &auras, PlayerId::TWO), Some(uids[1]));
        assert_eq!(weakest_government(&state, &auras, PlayerId::TWO), Some(uids[3]));
    }

    #[test]
    fn test_filter_and_empty_lane() {
        let (mut state, uids) = board_of(&[2, 4]);
        let auras = AuraCalculator::standard();
        state.board_card_mut(uids[1]).unwrap().protected = true;

        let pick = pick_government(&state, &auras, PlayerId::TWO, Pick::Strongest, is_vulnerable);
        assert_eq!(pick, Some(uids[0]));
        assert_eq!(strongest_government(&state, &auras, PlayerId::ONE), None);
    }
}
