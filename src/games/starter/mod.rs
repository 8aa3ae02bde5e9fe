//! Starter card set.
//!
//! A compact set of government, public, instant and permanent cards that
//! between them touch every effect key, trap kind and aura tag. Two cards
//! ("Spin Doctor" and "Old Guard") carry no effect key and are served by
//! the legacy alias table, as are "Leaked Memo" and "Backroom Deal".
//!
//! ```
//! use influence_ccg::games::starter::StarterBuilder;
//!
//! let engine = StarterBuilder::new().hand_size(4).build(1).unwrap();
//! assert_eq!(engine.state().players.iter().map(|(_, p)| p.hand.len()).sum::<usize>(), 8);
//! ```

mod catalog;

pub use catalog::{ids, starter_catalog, STARTER_DECK};

use crate::cards::CardId;
use crate::core::{GameRng, MatchConfig, PlayerMap, RandomSource, Result};
use crate::effects::CardEffectRegistry;
use crate::rules::MatchEngine;

/// Both players get [`STARTER_DECK`].
#[must_use]
pub fn starter_decks() -> PlayerMap<Vec<CardId>> {
    PlayerMap::with_value(STARTER_DECK.to_vec())
}

/// A default match with starter decks.
pub fn new_match(seed: u64) -> Result<MatchEngine> {
    StarterBuilder::new().build(seed)
}

/// Builder for starter matches.
#[derive(Clone, Debug)]
pub struct StarterBuilder {
    config: MatchConfig,
    decks: PlayerMap<Vec<CardId>>,
}

impl Default for StarterBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            decks: starter_decks(),
        }
    }
}

impl StarterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn hand_size(mut self, size: usize) -> Self {
        self.config = self.config.with_hand_size(size);
        self
    }

    /// Use explicit deck lists (front of the list is the top of the deck
    /// when the RNG does not shuffle).
    #[must_use]
    pub fn decks(mut self, decks: PlayerMap<Vec<CardId>>) -> Self {
        self.decks = decks;
        self
    }

    /// Build with a seeded RNG.
    pub fn build(self, seed: u64) -> Result<MatchEngine> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build with any random source.
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> Result<MatchEngine<R>> {
        MatchEngine::with_rng(
            self.config,
            starter_catalog(),
            CardEffectRegistry::standard(),
            self.decks,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{CardUid, PlayerId};
    use crate::effects::EffectKey;
    use strum::IntoEnumIterator;

    #[test]
    fn test_catalog_is_valid() {
        let registry = CardEffectRegistry::standard();
        assert!(registry.validate_catalog(&starter_catalog()).is_ok());
    }

    #[test]
    fn test_every_key_is_reachable() {
        let catalog = starter_catalog();
        let registry = CardEffectRegistry::standard();
        let reachable: Vec<_> = catalog
            .iter()
            .filter_map(|def| match &def.effect_key {
                Some(key) => key.parse::<EffectKey>().ok(),
                None => {
                    let card = Card::from_definition(def, CardUid(0), PlayerId::ONE);
                    registry.key_for(&card).ok().flatten()
                }
            })
            .collect();

        for key in EffectKey::iter() {
            assert!(reachable.contains(&key), "{key} not in starter set");
        }
    }

    #[test]
    fn test_deck_cards_exist() {
        let catalog = starter_catalog();
        assert_eq!(STARTER_DECK.len(), 30);
        assert!(STARTER_DECK.iter().all(|id| catalog.contains(*id)));
    }
}
