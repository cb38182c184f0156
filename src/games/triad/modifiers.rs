//! Rule modifiers for the reference game.

use crate::cards::Card;
use crate::core::SimulationState;
use crate::rules::{ModifierFeatures, RuleModifier};

/// Lower values capture higher ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse;

impl RuleModifier for Reverse {
    fn name(&self) -> &'static str {
        "Reverse"
    }

    fn features(&self) -> ModifierFeatures {
        ModifierFeatures::CAPTURE_MATH | ModifierFeatures::CARD_SCORE
    }

    fn on_score_card(&self, _card: &Card, score: &mut f32) {
        *score = 1.0 - *score;
    }

    fn on_check_capture_math(&self, capturing: i32, defending: i32, captured: &mut bool) {
        *captured = capturing < defending;
    }
}

/// A 1 captures an A (10); under `Reverse`, an A captures a 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallenAce;

impl RuleModifier for FallenAce {
    fn name(&self) -> &'static str {
        "Fallen Ace"
    }

    fn features(&self) -> ModifierFeatures {
        ModifierFeatures::CAPTURE_WEIGHTS
    }

    fn on_check_capture_weights(
        &self,
        reverse_active: bool,
        capturing: &mut i32,
        defending: &mut i32,
    ) {
        if !reverse_active && *capturing == 1 && *defending == 10 {
            *capturing = 11;
        } else if reverse_active && *capturing == 10 && *defending == 1 {
            *capturing = 0;
        }
    }
}

/// Cards must be played in hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Order;

impl RuleModifier for Order {
    fn name(&self) -> &'static str {
        "Order"
    }

    fn features(&self) -> ModifierFeatures {
        ModifierFeatures::POST_PLACE
    }

    fn on_post_place(&self, state: &mut SimulationState) {
        state.forced_card = state
            .acting_deck()
            .and_then(|deck| deck.available().next().map(|(slot, _)| slot));
    }
}
