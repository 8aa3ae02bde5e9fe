//! Trap kinds and their predicates.
//!
//! A trap is a hidden reactive trigger registered by one player against
//! the other. Each kind pairs a predicate over the placed card with the
//! events it produces when it springs.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::cards::{Card, Placement};
use crate::core::PlayerId;
use crate::effects::EffectEvent;
use crate::zones::Lane;

/// Minimum tier a government card needs to trip a scandal.
pub const SCANDAL_MIN_TIER: u8 = 2;

/// Influence removed by an ambush.
pub const AMBUSH_DEBUFF: i32 = 2;

/// Every trap the engine knows.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TrapKind {
    /// Deactivates a government card of tier 2 or higher.
    Scandal,
    /// Debuffs any government card.
    Ambush,
    /// Destroys a card played into the public lane.
    MediaLeak,
    /// Costs the player of a special card 1 AP.
    Filibuster,
}

impl TrapKind {
    /// Does this trap react to `card` being placed?
    #[must_use]
    pub fn matches(self, card: &Card) -> bool {
        match self {
            TrapKind::Scandal => card.is_government() && card.tier >= SCANDAL_MIN_TIER,
            TrapKind::Ambush => card.is_government(),
            TrapKind::MediaLeak => card.placement == Placement::Lane(Lane::Public),
            TrapKind::Filibuster => !card.is_government(),
        }
    }

    /// Events produced when the trap springs on `card`, placed by `placer`.
    #[must_use]
    pub fn response(self, placer: PlayerId, card: &Card) -> Vec<EffectEvent> {
        match self {
            TrapKind::Scandal => vec![EffectEvent::DeactivateCard { uid: card.uid }],
            TrapKind::Ambush => vec![EffectEvent::DebuffCard {
                uid: card.uid,
                amount: AMBUSH_DEBUFF,
            }],
            TrapKind::MediaLeak => vec![EffectEvent::DestroyCard { uid: card.uid }],
            TrapKind::Filibuster => vec![EffectEvent::AdjustAp {
                player: placer,
                delta: -1,
            }],
        }
    }
}

/// A registered trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trap {
    pub kind: TrapKind,
    /// Player who set the trap.
    pub owner: PlayerId,
}

impl Trap {
    #[must_use]
    pub const fn new(kind: TrapKind, owner: PlayerId) -> Self {
        Self { kind, owner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use crate::core::CardUid;
    use crate::zones::PermanentSlot;

    fn gov(tier: u8) -> Card {
        let def = CardDefinition::government(CardId::new(1), "Minister", tier, 3);
        Card::from_definition(&def, CardUid(1), PlayerId::ONE)
    }

    fn special(placement: Placement) -> Card {
        let def = CardDefinition::special(CardId::new(2), "Pundit", placement);
        Card::from_definition(&def, CardUid(2), PlayerId::ONE)
    }

    #[test]
    fn test_scandal_needs_tier_two() {
        assert!(!TrapKind::Scandal.matches(&gov(1)));
        assert!(TrapKind::Scandal.matches(&gov(2)));
        assert!(!TrapKind::Scandal.matches(&special(Placement::Lane(Lane::Public))));
    }

    #[test]
    fn test_leak_and_filibuster() {
        let pundit = special(Placement::Lane(Lane::Public));
        let decree = special(Placement::Permanent(PermanentSlot::Government));

        assert!(TrapKind::MediaLeak.matches(&pundit));
        assert!(!TrapKind::MediaLeak.matches(&decree));
        assert!(TrapKind::Filibuster.matches(&decree));
        assert!(!TrapKind::Filibuster.matches(&gov(3)));
    }

    #[test]
    fn test_responses() {
        let card = gov(2);
        assert_eq!(
            TrapKind::Ambush.response(PlayerId::ONE, &card),
            vec![EffectEvent::DebuffCard { uid: card.uid, amount: 2 }]
        );
        assert_eq!(
            TrapKind::Filibuster.response(PlayerId::TWO, &card),
            vec![EffectEvent::AdjustAp { player: PlayerId::TWO, delta: -1 }]
        );
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("media_leak".parse::<TrapKind>(), Ok(TrapKind::MediaLeak));
        assert_eq!(TrapKind::Scandal.as_ref(), "scandal");
        assert!("honeypot".parse::<TrapKind>().is_err());
    }
}
