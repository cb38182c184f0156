//! Card owners and game status tags.
//!
//! Search code always evaluates positions from Blue's point of view; a
//! caller playing Red presents the snapshot with colors swapped.

use serde::{Deserialize, Serialize};

/// Owner of a deck or a placed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Blue,
    Red,
}

impl Owner {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Owner {
        match self {
            Owner::Blue => Owner::Red,
            Owner::Red => Owner::Blue,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Blue => write!(f, "Blue"),
            Owner::Red => write!(f, "Red"),
        }
    }
}

/// Progress of a game, always tagged relative to Blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgressBlue,
    InProgressRed,
    BlueWins,
    BlueDraw,
    BlueLost,
}

impl GameStatus {
    /// The side to move, or `None` once the game is over.
    #[must_use]
    pub const fn to_move(self) -> Option<Owner> {
        match self {
            GameStatus::InProgressBlue => Some(Owner::Blue),
            GameStatus::InProgressRed => Some(Owner::Red),
            _ => None,
        }
    }

    /// Is the game over?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }

    /// In-progress tag for the given side.
    #[must_use]
    pub const fn turn_of(owner: Owner) -> GameStatus {
        match owner {
            Owner::Blue => GameStatus::InProgressBlue,
            Owner::Red => GameStatus::InProgressRed,
        }
    }

    /// The same status told from Red's side.
    #[must_use]
    pub const fn mirrored(self) -> GameStatus {
        match self {
            GameStatus::InProgressBlue => GameStatus::InProgressRed,
            GameStatus::InProgressRed => GameStatus::InProgressBlue,
            GameStatus::BlueWins => GameStatus::BlueLost,
            GameStatus::BlueDraw => GameStatus::BlueDraw,
            GameStatus::BlueLost => GameStatus::BlueWins,
        }
    }
}
