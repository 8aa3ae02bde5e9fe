//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition a match may deal and
//! instantiates decks from lists of definition ids.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use influence_ccg::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::government(CardId::new(1), "Backbencher", 1, 2));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Backbencher");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Register a card definition (builder pattern).
    #[must_use]
    pub fn with(mut self, card: CardDefinition) -> Self {
        self.register(card);
        self
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        let mut defs: Vec<_> = self.cards.values().collect();
        defs.sort_by_key(|d| d.id);
        defs.into_iter()
    }

    /// Find a definition by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.values().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Placement;
    use crate::zones::Lane;

    #[test]
    fn test_register_and_get() {
        let catalog = CardCatalog::new()
            .with(CardDefinition::government(CardId::new(1), "A", 1, 1))
            .with(CardDefinition::special(CardId::new(2), "B", Placement::Lane(Lane::Instant)));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(CardId::new(2)));
        assert!(catalog.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::government(CardId::new(1), "A", 1, 1));
        catalog.register(CardDefinition::government(CardId::new(1), "B", 1, 1));
    }

    #[test]
    fn test_iteration_is_ordered() {
        let catalog = CardCatalog::new()
            .with(CardDefinition::government(CardId::new(5), "E", 1, 1))
            .with(CardDefinition::government(CardId::new(2), "B", 1, 1))
            .with(CardDefinition::government(CardId::new(9), "I", 1, 1));

        let ids: Vec<_> = catalog.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_find_by_name() {
        let catalog = CardCatalog::new().with(CardDefinition::government(CardId::new(1), "Whip", 2, 3));
        assert_eq!(catalog.find_by_name("Whip").map(|c| c.id), Some(CardId::new(1)));
        assert!(catalog.find_by_name("Nobody").is_none());
    }
}
