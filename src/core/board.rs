//! Board geometry: the 3x3 grid, card sides and the neighbor lookup table.
//!
//! Cells are numbered row-major from the top-left corner:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

use serde::{Deserialize, Serialize};

/// Cells per board row.
pub const BOARD_SIDE: usize = 3;

/// Total number of board cells.
pub const BOARD_SIZE: usize = BOARD_SIDE * BOARD_SIDE;

/// One of the four sides of a placed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Up,
    Left,
    Down,
    Right,
}

impl Side {
    /// All sides, in value-array order.
    pub const ALL: [Side; 4] = [Side::Up, Side::Left, Side::Down, Side::Right];

    /// Index into a card's side values.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The side facing this one on an adjacent card.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Up => Side::Down,
            Side::Left => Side::Right,
            Side::Down => Side::Up,
            Side::Right => Side::Left,
        }
    }
}

/// Neighbor cell for every (cell, side) pair, `None` at the board edge.
///
/// Built at compile time and shared read-only by every search thread.
pub static NEIGHBORS: [[Option<usize>; 4]; BOARD_SIZE] = build_neighbors();

const fn build_neighbors() -> [[Option<usize>; 4]; BOARD_SIZE] {
    let mut table = [[None; 4]; BOARD_SIZE];
    let mut cell = 0;
    while cell < BOARD_SIZE {
        let row = cell / BOARD_SIDE;
        let col = cell % BOARD_SIDE;

        if row > 0 {
            table[cell][Side::Up.index()] = Some(cell - BOARD_SIDE);
        }
        if col > 0 {
            table[cell][Side::Left.index()] = Some(cell - 1);
        }
        if row + 1 < BOARD_SIDE {
            table[cell][Side::Down.index()] = Some(cell + BOARD_SIDE);
        }
        if col + 1 < BOARD_SIDE {
            table[cell][Side::Right.index()] = Some(cell + 1);
        }
        cell += 1;
    }
    table
}

/// Neighbor of `cell` across `side`.
#[inline]
#[must_use]
pub fn neighbor(cell: usize, side: Side) -> Option<usize> {
    NEIGHBORS[cell][side.index()]
}
