//! Rule modifiers: hooks that alter capture math and card scoring.
//!
//! A modifier declares which hooks it uses through `ModifierFeatures`; the
//! rules engine only calls hooks whose feature bit is active.

use crate::cards::Card;
use crate::core::SimulationState;

/// Set of hook groups a modifier participates in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierFeatures(u8);

impl ModifierFeatures {
    pub const NONE: Self = Self(0);
    /// Rewrites the compared values before a capture check.
    pub const CAPTURE_WEIGHTS: Self = Self(0x1);
    /// Overrides the capture decision.
    pub const CAPTURE_MATH: Self = Self(0x2);
    /// Adjusts card desirability.
    pub const CARD_SCORE: Self = Self(0x4);
    /// Runs after each placement.
    pub const POST_PLACE: Self = Self(0x8);

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr for ModifierFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// A rule modifier.
///
/// Every hook has a no-op default; implement only the ones named in
/// `features()`.
pub trait RuleModifier: Send + Sync + std::fmt::Debug {
    /// Short display name.
    fn name(&self) -> &'static str;

    /// Hook groups this modifier uses.
    fn features(&self) -> ModifierFeatures;

    /// Adjust a card's desirability score.
    fn on_score_card(&self, _card: &Card, _score: &mut f32) {}

    /// Rewrite compared values. `reverse_active` is set when any active
    /// modifier overrides capture math.
    fn on_check_capture_weights(
        &self,
        _reverse_active: bool,
        _capturing: &mut i32,
        _defending: &mut i32,
    ) {
    }

    /// Override the capture decision.
    fn on_check_capture_math(&self, _capturing: i32, _defending: i32, _captured: &mut bool) {}

    /// Inspect or adjust state after a card has been placed and captures
    /// resolved, with the turn already passed to the next side.
    fn on_post_place(&self, _state: &mut SimulationState) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_union_and_contains() {
        let f = ModifierFeatures::CAPTURE_MATH | ModifierFeatures::CARD_SCORE;
        assert!(f.contains(ModifierFeatures::CAPTURE_MATH));
        assert!(f.contains(ModifierFeatures::CARD_SCORE));
        assert!(!f.contains(ModifierFeatures::CAPTURE_WEIGHTS));
        assert!(!f.contains(ModifierFeatures::NONE));
        assert_eq!(ModifierFeatures::default(), ModifierFeatures::NONE);
    }
}
