//! Built-in card pool for tests, benches and the arena.

use crate::cards::{CardDefinition, CardId, CardRegistry};
use crate::core::{DeckInstance, SearchRng, MAX_AVAILABLE_CARDS};

const STARTER_CARDS: &[(&str, [u8; 4])] = &[
    ("Geezard", [1, 5, 4, 1]),
    ("Funguar", [5, 3, 1, 1]),
    ("Bite Bug", [1, 5, 3, 3]),
    ("Red Bat", [6, 2, 1, 1]),
    ("Blobra", [2, 5, 1, 3]),
    ("Gayla", [2, 4, 4, 1]),
    ("Gesper", [1, 1, 5, 4]),
    ("Fastitocalon-F", [3, 1, 2, 5]),
    ("Blood Soul", [2, 1, 6, 1]),
    ("Caterchipillar", [4, 3, 4, 2]),
    ("Cockatrice", [2, 6, 2, 1]),
    ("Grat", [7, 1, 3, 1]),
    ("Buel", [6, 3, 2, 2]),
    ("Mesmerize", [5, 4, 3, 3]),
    ("Glacial Eye", [6, 3, 1, 4]),
    ("Belhelmel", [3, 5, 4, 3]),
    ("Thrustaevis", [5, 2, 3, 5]),
    ("Anacondaur", [5, 3, 5, 1]),
    ("Creeps", [5, 5, 2, 2]),
    ("Grendel", [4, 5, 5, 2]),
    ("Ifrit", [9, 8, 6, 2]),
    ("Shiva", [6, 4, 9, 7]),
    ("Quezacotl", [2, 4, 9, 9]),
    ("Siren", [8, 2, 6, 10]),
];

/// Registry holding the built-in card pool, IDs starting at 1.
#[must_use]
pub fn starter_registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for (idx, (name, sides)) in STARTER_CARDS.iter().enumerate() {
        registry.register(CardDefinition::new(CardId::new(idx as u32 + 1), *name, *sides));
    }
    registry
}

/// Deal two disjoint five-card hands from `registry`.
///
/// Returns `None` if the registry holds fewer than ten cards.
#[must_use]
pub fn deal(registry: &CardRegistry, rng: &mut SearchRng) -> Option<(DeckInstance, DeckInstance)> {
    let mut ids = registry.ids();
    if ids.len() < MAX_AVAILABLE_CARDS * 2 {
        return None;
    }
    rng.shuffle(&mut ids);

    let blue = registry.deck(&ids[..MAX_AVAILABLE_CARDS])?;
    let red = registry.deck(&ids[MAX_AVAILABLE_CARDS..MAX_AVAILABLE_CARDS * 2])?;
    Some((blue, red))
}
