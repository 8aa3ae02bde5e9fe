//! Card instances - runtime card state.
//!
//! A `Card` is one physical copy of a definition dealt into a match. It
//! carries its definition's identity alongside a match-unique uid and the
//! mutable fields effects write to: deactivation, protection and temporary
//! buffs/debuffs.
//!
//! Modifiers are board-scoped. [`Card::reset_runtime`] wipes them whenever a
//! card leaves the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{CardDefinition, CardId, CardKind, CardTag, Placement};
use crate::core::player::PlayerId;
use crate::core::uid::CardUid;

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique instance ID for this match.
    pub uid: CardUid,

    /// Template this instance was built from.
    pub template: CardId,

    pub name: String,
    pub kind: CardKind,
    pub tier: u8,

    /// Influence printed on the card.
    pub base_influence: i32,

    pub tags: SmallVec<[CardTag; 2]>,
    pub placement: Placement,

    /// Seat whose deck the card was dealt from. Control is positional:
    /// a card belongs to whichever board it sits on.
    pub owner: PlayerId,

    /// Effect dispatch key, resolved by the card effect registry.
    pub effect_key: Option<String>,

    // === Runtime state ===
    pub deactivated: bool,
    pub protected: bool,
    pub temp_buffs: i32,
    pub temp_debuffs: i32,
}

impl Card {
    /// Instantiate a definition.
    #[must_use]
    pub fn from_definition(def: &CardDefinition, uid: CardUid, owner: PlayerId) -> Self {
        Self {
            uid,
            template: def.id,
            name: def.name.clone(),
            kind: def.kind,
            tier: def.tier,
            base_influence: def.influence,
            tags: def.tags.clone(),
            placement: def.placement,
            owner,
            effect_key: def.effect_key.clone(),
            deactivated: false,
            protected: false,
            temp_buffs: 0,
            temp_debuffs: 0,
        }
    }

    /// Is this a government card?
    #[must_use]
    pub fn is_government(&self) -> bool {
        self.kind == CardKind::Government
    }

    /// Check for a tag.
    #[must_use]
    pub fn has_tag(&self, tag: CardTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Active means not deactivated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.deactivated
    }

    /// Printed influence plus temporary modifiers, floored at zero.
    ///
    /// Auras are not included; see [`crate::aura::AuraCalculator`].
    #[must_use]
    pub fn modified_influence(&self) -> i32 {
        if self.deactivated {
            return 0;
        }
        (self.base_influence + self.temp_buffs - self.temp_debuffs).max(0)
    }

    /// Clear all board-scoped runtime state.
    pub fn reset_runtime(&mut self) {
        self.deactivated = false;
        self.protected = false;
        self.temp_buffs = 0;
        self.temp_debuffs = 0;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.uid)
    }
}
