//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores the card catalog and builds decks from it.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::DeckInstance;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use triad_agent::cards::{CardRegistry, CardDefinition, CardId};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Geezard", [1, 5, 4, 1]));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Geezard");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
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

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All registered IDs in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Build a deck from card IDs. Returns `None` if any ID is unknown.
    #[must_use]
    pub fn deck(&self, ids: &[CardId]) -> Option<DeckInstance> {
        let cards = ids
            .iter()
            .map(|id| self.get(*id).map(CardDefinition::card))
            .collect::<Option<Vec<_>>>()?;
        Some(DeckInstance::new(cards))
    }
}
