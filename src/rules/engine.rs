//! Rules engine trait for game implementations.
//!
//! The agents never mutate a board directly. They ask the engine:
//! - Which cells and hand slots are legal
//! - To place a card (which resolves captures and advances the turn)
//! - Whether one value captures another under the active modifiers
//! - To play a full game between two agents

use crate::agents::Agent;
use crate::cards::Card;
use crate::core::{ActionMask, Move, SimulationState};

use super::modifier::{ModifierFeatures, RuleModifier};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `place_card`: Must leave the state untouched when it returns `false`
/// - `place_card`: Must set a terminal status once the board is full
/// - Engines are shared read-only by parallel rollout workers
pub trait RulesEngine: Sync {
    /// Active rule modifiers, in evaluation order.
    fn modifiers(&self) -> &[Box<dyn RuleModifier>];

    /// Place hand slot `card` of the side to move onto `cell`.
    ///
    /// Returns `false` (and leaves `state` unchanged) if the move is illegal.
    fn place_card(&self, state: &mut SimulationState, card: usize, cell: usize) -> bool;

    // === Convenience Methods ===

    /// Union of the active modifiers' features.
    fn features(&self) -> ModifierFeatures {
        self.modifiers()
            .iter()
            .fold(ModifierFeatures::NONE, |acc, m| acc | m.features())
    }

    /// Legal cells and hand slots for the side to move.
    ///
    /// A forced card restricts the card mask to that slot.
    fn available_actions(&self, state: &SimulationState) -> ActionMask {
        let Some(deck) = state.acting_deck() else {
            return ActionMask::default();
        };

        let cards = match state.forced_card {
            Some(slot) if deck.is_available(slot) => 1 << slot,
            _ => deck.available_mask,
        };

        ActionMask::from_masks(state.empty_cells_mask(), cards)
    }

    /// Does `capturing` beat `defending` under the active modifiers?
    fn can_capture(&self, capturing: i32, defending: i32) -> bool {
        let features = self.features();
        let reverse_active = features.contains(ModifierFeatures::CAPTURE_MATH);
        let mut capturing = capturing;
        let mut defending = defending;

        if features.contains(ModifierFeatures::CAPTURE_WEIGHTS) {
            for m in self.modifiers() {
                if m.features().contains(ModifierFeatures::CAPTURE_WEIGHTS) {
                    m.on_check_capture_weights(reverse_active, &mut capturing, &mut defending);
                }
            }
        }

        let mut captured = capturing > defending;

        if reverse_active {
            for m in self.modifiers() {
                if m.features().contains(ModifierFeatures::CAPTURE_MATH) {
                    m.on_check_capture_math(capturing, defending, &mut captured);
                }
            }
        }

        captured
    }

    /// Card desirability after every modifier's scoring hook.
    fn score_card(&self, card: &Card) -> f32 {
        let mut score = card.optimizer_score;
        for m in self.modifiers() {
            if m.features().contains(ModifierFeatures::CARD_SCORE) {
                m.on_score_card(card, &mut score);
            }
        }
        score
    }

    /// Play until the game ends, asking `pick` for every move.
    ///
    /// Stops early, leaving the game in progress, if `pick` yields no move
    /// or an illegal one.
    fn play_out<F>(&self, state: &mut SimulationState, mut pick: F)
    where
        Self: Sized,
        F: FnMut(&Self, &SimulationState) -> Option<Move>,
    {
        while !state.status.is_terminal() {
            let Some(mv) = pick(self, state) else {
                break;
            };
            if !self.place_card(state, mv.card, mv.cell) {
                break;
            }
        }
    }

    /// Play a full game with one agent per side.
    ///
    /// Agents value positions for Blue, so Red's agent is shown the
    /// mirrored snapshot and plays as Blue there.
    fn run_simulation<B, R>(&self, state: &mut SimulationState, blue: &mut B, red: &mut R)
    where
        Self: Sized,
        B: Agent<Self> + ?Sized,
        R: Agent<Self> + ?Sized,
    {
        use crate::core::Owner;

        self.play_out(state, |engine, s| match s.to_move() {
            Some(Owner::Blue) => blue.find_next_move(engine, s).action,
            Some(Owner::Red) => red.find_next_move(engine, &s.mirrored()).action,
            None => None,
        });
    }

    /// Play a full game with one agent controlling both sides.
    ///
    /// The agent sees every snapshot as is; meant for perspective-free
    /// policies such as the random rollout agent.
    fn run_self_play<A>(&self, state: &mut SimulationState, agent: &mut A)
    where
        Self: Sized,
        A: Agent<Self> + ?Sized,
    {
        self.play_out(state, |engine, s| agent.find_next_move(engine, s).action);
    }
}
