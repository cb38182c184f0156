//! Win/draw statistics produced by every search branch.

use serde::{Deserialize, Serialize};

use crate::core::GameStatus;

/// Wins, draws and games played for a branch.
///
/// Counts are `f32` because rollout fractions and heuristic scores are
/// blended into them. Invariant: `games >= wins + draws >= 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub wins: f32,
    pub draws: f32,
    pub games: f32,
}

impl Outcome {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const WIN: Self = Self::new(1.0, 0.0, 1.0);
    pub const DRAW: Self = Self::new(0.0, 1.0, 1.0);
    pub const LOSS: Self = Self::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(wins: f32, draws: f32, games: f32) -> Self {
        Self { wins, draws, games }
    }

    /// Fixed outcome of a finished game, `None` while in progress.
    #[must_use]
    pub const fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::BlueWins => Some(Self::WIN),
            GameStatus::BlueDraw => Some(Self::DRAW),
            GameStatus::BlueLost => Some(Self::LOSS),
            GameStatus::InProgressBlue | GameStatus::InProgressRed => None,
        }
    }

    /// Fraction of games won, 0 when no games were played.
    #[must_use]
    pub fn win_ratio(&self) -> f32 {
        if self.games > 0.0 {
            self.wins / self.games
        } else {
            0.0
        }
    }

    /// Fraction of games drawn, 0 when no games were played.
    #[must_use]
    pub fn draw_ratio(&self) -> f32 {
        if self.games > 0.0 {
            self.draws / self.games
        } else {
            0.0
        }
    }

    /// Strictly higher win ratio. Equal ratios are not better.
    #[must_use]
    pub fn is_better_than(&self, other: &Outcome) -> bool {
        self.win_ratio() > other.win_ratio()
    }
}

impl std::ops::Add for Outcome {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.wins + rhs.wins, self.draws + rhs.draws, self.games + rhs.games)
    }
}

impl std::ops::AddAssign for Outcome {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "win {:.1}% draw {:.1}%",
            self.win_ratio() * 100.0,
            self.draw_ratio() * 100.0
        )
    }
}
