//! Moves and legal-action masks.
//!
//! A move is a (hand slot, board cell) pair. Legal moves are reported by
//! the rules engine as two independent bit masks, one over hand slots and
//! one over cells; every combination of a set card bit and a set cell bit
//! is a candidate move.

use serde::{Deserialize, Serialize};

use super::board::BOARD_SIZE;
use super::state::MAX_AVAILABLE_CARDS;

/// A single card placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Slot in the acting side's hand.
    pub card: usize,
    /// Target board cell.
    pub cell: usize,
}

impl Move {
    #[must_use]
    pub const fn new(card: usize, cell: usize) -> Self {
        Self { card, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {} -> cell {}", self.card, self.cell)
    }
}

/// Legal cells and cards for the side to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMask {
    /// Bit `i` set when cell `i` is empty.
    pub cells: u16,
    pub num_cells: u32,
    /// Bit `i` set when hand slot `i` may be played.
    pub cards: u8,
    pub num_cards: u32,
}

impl ActionMask {
    /// Build from raw masks, deriving the counts.
    #[must_use]
    pub fn from_masks(cells: u16, cards: u8) -> Self {
        Self {
            cells,
            num_cells: cells.count_ones(),
            cards,
            num_cards: cards.count_ones(),
        }
    }

    /// True when no move can be formed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_cells == 0 || self.num_cards == 0
    }

    #[must_use]
    pub fn has_cell(&self, cell: usize) -> bool {
        cell < BOARD_SIZE && self.cells & (1 << cell) != 0
    }

    #[must_use]
    pub fn has_card(&self, card: usize) -> bool {
        card < MAX_AVAILABLE_CARDS && self.cards & (1 << card) != 0
    }

    /// Candidate moves in search order: card slots ascending, then cells.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        (0..MAX_AVAILABLE_CARDS)
            .filter(|&card| self.has_card(card))
            .flat_map(move |card| {
                (0..BOARD_SIZE)
                    .filter(|&cell| self.has_cell(cell))
                    .map(move |cell| Move::new(card, cell))
            })
    }
}

/// Position of the `n`-th (0-based) set bit of `mask`, scanning upward
/// from bit 0. Returns `None` if fewer than `n + 1` bits are set.
///
/// ```
/// use triad_agent::core::nth_set_bit;
///
/// assert_eq!(nth_set_bit(0b1010_0100, 0), Some(2));
/// assert_eq!(nth_set_bit(0b1010_0100, 2), Some(7));
/// assert_eq!(nth_set_bit(0b1010_0100, 3), None);
/// ```
#[must_use]
pub fn nth_set_bit(mask: u32, n: u32) -> Option<usize> {
    let mut remaining = n;
    let mut bits = mask;
    let mut position = 0;
    while bits != 0 {
        if bits & 1 != 0 {
            if remaining == 0 {
                return Some(position);
            }
            remaining -= 1;
        }
        bits >>= 1;
        position += 1;
    }
    None
}
