//! AP cost lookup and afford-check.

use crate::cards::Card;
use crate::core::{MatchState, PlayerId};

/// Cards at or above this tier cost 2 AP.
pub const HEAVY_TIER: u8 = 3;

/// AP cost of playing `card`. Always at least 1.
///
/// Cost currently depends on the card alone.
#[must_use]
pub fn cost(card: &Card, _state: &MatchState, _player: PlayerId) -> u32 {
    if card.tier >= HEAVY_TIER {
        2
    } else {
        1
    }
}

/// Can `player` pay for `card` right now?
#[must_use]
pub fn can_afford(state: &MatchState, player: PlayerId, card: &Card) -> bool {
    state.player(player).ap >= cost(card, state, player)
}
