//! Table-driven aura rules.
//!
//! Each rule is independent and additive. Per-card rules adjust the
//! strength of one government-lane card; player rules add a flat amount to
//! a player's derived influence. Rules read only the board they are
//! evaluated against.

use crate::cards::{Card, CardTag};
use crate::zones::{Board, Lane, PermanentSlot};

/// Where a rule applies.
#[derive(Clone, Copy)]
pub enum AuraScope {
    /// Bonus for one active government-lane card.
    Card(fn(&Board, &Card) -> i32),
    /// Flat bonus for the whole board.
    Player(fn(&Board) -> i32),
}

/// A named aura rule.
#[derive(Clone, Copy)]
pub struct AuraRule {
    pub name: &'static str,
    pub scope: AuraScope,
}

impl std::fmt::Debug for AuraRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = match self.scope {
            AuraScope::Card(_) => "card",
            AuraScope::Player(_) => "player",
        };
        f.debug_struct("AuraRule")
            .field("name", &self.name)
            .field("scope", &scope)
            .finish()
    }
}

/// The rules every match is played with.
pub static STANDARD_AURAS: &[AuraRule] = &[
    AuraRule {
        name: "coalition",
        scope: AuraScope::Card(coalition),
    },
    AuraRule {
        name: "martial_law",
        scope: AuraScope::Card(martial_law),
    },
    AuraRule {
        name: "press_synergy",
        scope: AuraScope::Player(press_synergy),
    },
    AuraRule {
        name: "mandate",
        scope: AuraScope::Player(mandate),
    },
    AuraRule {
        name: "propaganda",
        scope: AuraScope::Player(propaganda),
    },
    AuraRule {
        name: "grassroots",
        scope: AuraScope::Player(grassroots),
    },
];

const COALITION_TIER: u8 = 2;
const COALITION_MIN: usize = 2;
const GRASSROOTS_MIN: usize = 3;
const MANDATE_BONUS: i32 = 2;

fn active_in(board: &Board, lane: Lane) -> impl Iterator<Item = &Card> {
    board.lane(lane).iter().filter(|c| c.is_active())
}

fn permanent_has(board: &Board, slot: PermanentSlot, tag: CardTag) -> bool {
    board.permanent(slot).is_some_and(|c| c.has_tag(tag))
}

fn coalition(board: &Board, card: &Card) -> i32 {
    if card.tier != COALITION_TIER {
        return 0;
    }
    let members = active_in(board, Lane::Government)
        .filter(|c| c.tier == COALITION_TIER)
        .count();
    i32::from(members >= COALITION_MIN)
}

fn martial_law(board: &Board, card: &Card) -> i32 {
    i32::from(card.tier == 1 && permanent_has(board, PermanentSlot::Government, CardTag::Martial))
}

fn press_synergy(board: &Board) -> i32 {
    i32::from(active_in(board, Lane::Public).any(|c| c.has_tag(CardTag::Media)))
}

fn mandate(board: &Board) -> i32 {
    if permanent_has(board, PermanentSlot::Government, CardTag::Mandate) {
        MANDATE_BONUS
    } else {
        0
    }
}

fn propaganda(board: &Board) -> i32 {
    if !permanent_has(board, PermanentSlot::Public, CardTag::Propaganda) {
        return 0;
    }
    active_in(board, Lane::Public).count() as i32
}

fn grassroots(board: &Board) -> i32 {
    i32::from(active_in(board, Lane::Public).count() >= GRASSROOTS_MIN)
}
