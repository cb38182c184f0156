//! Card definitions - static card data.
//!
//! `CardDefinition` holds the catalog entry for a card: name, the four side
//! values and a precomputed desirability score. `Card` is the compact copy
//! that lives inside decks and on the board during search.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

/// Playable card data, cheap to copy into snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Side values indexed by `Side::index()`: up, left, down, right.
    pub sides: [u8; 4],
    /// Desirability in `[0, 1]`, higher is better to hold.
    pub optimizer_score: f32,
}

impl Card {
    /// Anonymous card with the given values.
    #[must_use]
    pub const fn new(sides: [u8; 4], optimizer_score: f32) -> Self {
        Self {
            id: CardId(0),
            sides,
            optimizer_score,
        }
    }

    /// Value printed on a side.
    #[inline]
    #[must_use]
    pub fn value(&self, side: Side) -> u8 {
        self.sides[side.index()]
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use triad_agent::cards::{CardDefinition, CardId};
///
/// let card = CardDefinition::new(CardId::new(1), "Dodo", [4, 2, 3, 4]);
/// assert!((card.optimizer_score - 13.0 / 40.0).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Side values: up, left, down, right.
    pub sides: [u8; 4],

    /// Precomputed desirability. Defaults to the normalized side sum.
    pub optimizer_score: f32,
}

impl CardDefinition {
    /// Create a new card definition scored by its side sum.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, sides: [u8; 4]) -> Self {
        let total: u32 = sides.iter().map(|&v| u32::from(v)).sum();
        Self {
            id,
            name: name.into(),
            sides,
            optimizer_score: total as f32 / 40.0,
        }
    }

    /// Override the desirability score (builder pattern).
    #[must_use]
    pub fn with_optimizer_score(mut self, score: f32) -> Self {
        self.optimizer_score = score;
        self
    }

    /// Compact copy for decks and boards.
    #[must_use]
    pub fn card(&self) -> Card {
        Card {
            id: self.id,
            sides: self.sides,
            optimizer_score: self.optimizer_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_values_by_side() {
        let card = Card::new([1, 2, 3, 4], 0.25);
        assert_eq!(card.value(Side::Up), 1);
        assert_eq!(card.value(Side::Left), 2);
        assert_eq!(card.value(Side::Down), 3);
        assert_eq!(card.value(Side::Right), 4);
    }

    #[test]
    fn test_card_definition_builder() {
        let def = CardDefinition::new(CardId::new(7), "Ifrit", [9, 8, 6, 2])
            .with_optimizer_score(0.9);

        assert_eq!(def.name, "Ifrit");
        let card = def.card();
        assert_eq!(card.id, CardId::new(7));
        assert_eq!(card.sides, [9, 8, 6, 2]);
        assert_eq!(card.optimizer_score, 0.9);
    }

    #[test]
    fn test_card_definition_serialization() {
        let def = CardDefinition::new(CardId::new(1), "Test", [1, 1, 1, 1]);

        let json = serde_json::to_string(&def).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(def, deserialized);
    }
}
