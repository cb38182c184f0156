//! Simulation snapshot: board, decks and game status.
//!
//! ## SimulationState
//!
//! Everything the search needs to continue a game:
//! - 9 board cells, each empty or holding a placed card and its owner
//! - One deck per side with a bit mask of unplayed hand slots
//! - Cards-placed counter, status tag, optional forced next card
//!
//! Snapshots are plain values. Every search branch and rollout worker
//! works on its own `clone()`; nothing is shared mutably.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Side, BOARD_SIZE};
use super::player::{GameStatus, Owner};
use crate::cards::Card;

/// Hand slots per deck.
pub const MAX_AVAILABLE_CARDS: usize = 5;

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub card: Card,
    pub owner: Owner,
}

impl PlacedCard {
    #[must_use]
    pub const fn new(card: Card, owner: Owner) -> Self {
        Self { card, owner }
    }

    /// Value printed on the given side.
    #[must_use]
    pub fn value(&self, side: Side) -> u8 {
        self.card.value(side)
    }
}

/// One side's hand during a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckInstance {
    cards: SmallVec<[Card; MAX_AVAILABLE_CARDS]>,
    /// Bit `i` set while hand slot `i` has not been played.
    pub available_mask: u8,
    /// Cards this side has placed so far.
    pub num_placed: u8,
}

impl DeckInstance {
    /// Create a deck with every slot available.
    ///
    /// Extra cards beyond `MAX_AVAILABLE_CARDS` are ignored.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: SmallVec<[Card; MAX_AVAILABLE_CARDS]> =
            cards.into_iter().take(MAX_AVAILABLE_CARDS).collect();
        let available_mask = ((1u16 << cards.len()) - 1) as u8;
        Self {
            cards,
            available_mask,
            num_placed: 0,
        }
    }

    /// Card in a hand slot, whether or not it has been played.
    #[must_use]
    pub fn card(&self, slot: usize) -> Option<&Card> {
        self.cards.get(slot)
    }

    #[must_use]
    pub fn is_available(&self, slot: usize) -> bool {
        slot < MAX_AVAILABLE_CARDS && self.available_mask & (1 << slot) != 0
    }

    #[must_use]
    pub fn num_available(&self) -> u32 {
        self.available_mask.count_ones()
    }

    /// Unplayed cards with their slots, ascending.
    pub fn available(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.is_available(*slot))
    }

    /// Take a card out of the hand. Returns `None` if the slot was not available.
    pub fn take(&mut self, slot: usize) -> Option<Card> {
        if !self.is_available(slot) {
            return None;
        }
        self.available_mask &= !(1 << slot);
        self.num_placed += 1;
        self.cards.get(slot).copied()
    }
}

/// Complete game snapshot consumed by the search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub board: [Option<PlacedCard>; BOARD_SIZE],
    pub deck_blue: DeckInstance,
    pub deck_red: DeckInstance,
    pub cards_placed: u8,
    pub status: GameStatus,
    /// Hand slot the side to move must play next, if a rule pins it.
    pub forced_card: Option<usize>,
}

impl SimulationState {
    /// Empty board with Blue to move.
    #[must_use]
    pub fn new(deck_blue: DeckInstance, deck_red: DeckInstance) -> Self {
        Self {
            board: [None; BOARD_SIZE],
            deck_blue,
            deck_red,
            cards_placed: 0,
            status: GameStatus::InProgressBlue,
            forced_card: None,
        }
    }

    /// Set which side moves first.
    #[must_use]
    pub fn with_first_turn(mut self, owner: Owner) -> Self {
        self.status = GameStatus::turn_of(owner);
        self
    }

    /// Snapshot with colors swapped: decks trade places, every board card
    /// changes owner and the status is retold from the other side.
    ///
    /// Hand slots and cells keep their indices, so a move chosen on the
    /// mirrored snapshot applies unchanged to this one.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut board = self.board;
        for placed in board.iter_mut().flatten() {
            placed.owner = placed.owner.opponent();
        }
        Self {
            board,
            deck_blue: self.deck_red.clone(),
            deck_red: self.deck_blue.clone(),
            cards_placed: self.cards_placed,
            status: self.status.mirrored(),
            forced_card: self.forced_card,
        }
    }

    #[must_use]
    pub fn deck(&self, owner: Owner) -> &DeckInstance {
        match owner {
            Owner::Blue => &self.deck_blue,
            Owner::Red => &self.deck_red,
        }
    }

    pub fn deck_mut(&mut self, owner: Owner) -> &mut DeckInstance {
        match owner {
            Owner::Blue => &mut self.deck_blue,
            Owner::Red => &mut self.deck_red,
        }
    }

    /// Side to move, `None` when the game is over.
    #[must_use]
    pub fn to_move(&self) -> Option<Owner> {
        self.status.to_move()
    }

    /// Deck of the side to move.
    #[must_use]
    pub fn acting_deck(&self) -> Option<&DeckInstance> {
        self.to_move().map(|owner| self.deck(owner))
    }

    #[must_use]
    pub fn is_cell_empty(&self, cell: usize) -> bool {
        matches!(self.board.get(cell), Some(None))
    }

    /// Bit mask of empty cells.
    #[must_use]
    pub fn empty_cells_mask(&self) -> u16 {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .fold(0, |mask, (cell, _)| mask | (1 << cell))
    }

    /// Board cells currently owned by `owner`.
    #[must_use]
    pub fn count_owned(&self, owner: Owner) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|placed| placed.owner == owner)
            .count()
    }
}
