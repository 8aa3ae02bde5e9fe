//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card template:
//! its name, kind, tier, base influence, tags, where it goes when played
//! and which effect key it dispatches to.
//!
//! Instance-specific data (uid, modifiers, deactivation) is stored
//! separately in [`Card`](super::Card).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::effects::EffectKey;
use crate::zones::{Lane, PermanentSlot};

/// Unique identifier for a card definition.
///
/// This identifies the template (e.g., "Party Whip"), not a specific
/// instance dealt into a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Broad card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum CardKind {
    /// Sits in the government lane and contributes influence.
    Government,
    /// Everything else: public figures, instants, permanents.
    Special,
}

/// Tags read by aura rules and the steal modifiers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CardTag {
    Media,
    Mandate,
    Propaganda,
    Martial,
    Watchdog,
}

/// Where a card lands when it is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    Lane(Lane),
    Permanent(PermanentSlot),
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use influence_ccg::cards::{CardDefinition, CardId, CardKind, CardTag};
/// use influence_ccg::effects::EffectKey;
///
/// let whip = CardDefinition::government(CardId::new(1), "Party Whip", 2, 3)
///     .with_effect(EffectKey::Rally);
///
/// assert_eq!(whip.kind, CardKind::Government);
/// assert_eq!(whip.effect_key.as_deref(), Some("rally"));
/// assert!(!whip.has_tag(CardTag::Media));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name. Also the lookup key of the legacy effect alias table.
    pub name: String,

    pub kind: CardKind,

    /// Power tier, 1..=3. Drives AP cost and some aura rules.
    pub tier: u8,

    /// Influence contributed while in the government lane.
    pub influence: i32,

    #[serde(default)]
    pub tags: SmallVec<[CardTag; 2]>,

    pub placement: Placement,

    /// Effect dispatch key; see [`EffectKey`].
    #[serde(default)]
    pub effect_key: Option<String>,
}

impl CardDefinition {
    /// A government card played into the government lane.
    #[must_use]
    pub fn government(id: CardId, name: impl Into<String>, tier: u8, influence: i32) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Government,
            tier,
            influence,
            tags: SmallVec::new(),
            placement: Placement::Lane(Lane::Government),
            effect_key: None,
        }
    }

    /// A special card with the given placement and no influence.
    #[must_use]
    pub fn special(id: CardId, name: impl Into<String>, placement: Placement) -> Self {
        Self {
            id,
            name: name.into(),
            kind: CardKind::Special,
            tier: 1,
            influence: 0,
            tags: SmallVec::new(),
            placement,
            effect_key: None,
        }
    }

    /// Set the tier (builder pattern).
    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: CardTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Dispatch to a known effect key (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, key: EffectKey) -> Self {
        self.effect_key = Some(key.as_ref().to_string());
        self
    }

    /// Set a raw effect key string, e.g. from imported content.
    #[must_use]
    pub fn with_effect_key(mut self, key: impl Into<String>) -> Self {
        self.effect_key = Some(key.into());
        self
    }

    /// Check for a tag.
    #[must_use]
    pub fn has_tag(&self, tag: CardTag) -> bool {
        self.tags.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_government_defaults() {
        let card = CardDefinition::government(CardId::new(3), "Backbencher", 1, 2);
        assert_eq!(card.placement, Placement::Lane(Lane::Government));
        assert_eq!(card.influence, 2);
        assert!(card.effect_key.is_none());
    }

    #[test]
    fn test_special_placement() {
        let card = CardDefinition::special(
            CardId::new(9),
            "State Broadcaster",
            Placement::Permanent(PermanentSlot::Public),
        )
        .with_tag(CardTag::Propaganda)
        .with_tag(CardTag::Propaganda);

        assert_eq!(card.kind, CardKind::Special);
        assert_eq!(card.tags.len(), 1);
        assert!(card.has_tag(CardTag::Propaganda));
    }

    #[test]
    fn test_tag_string_form() {
        assert_eq!(CardTag::Watchdog.as_ref(), "watchdog");
        assert_eq!(CardTag::from_str("media").unwrap(), CardTag::Media);
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::government(CardId::new(1), "Whip", 2, 3)
            .with_tag(CardTag::Martial)
            .with_effect(EffectKey::Rally);
        let json = serde_json::to_string(&card).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
