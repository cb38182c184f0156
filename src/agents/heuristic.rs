//! Static positional score blended into rollout estimates.
//!
//! Three components, all in `[0, 1]` and taken from Blue's side:
//! - defense: how hard Blue's exposed sides are to capture
//! - capture: share of the board Blue holds, saturating at five cells
//! - deck: mean modifier-adjusted desirability of Blue's remaining hand

use crate::core::{neighbor, HeuristicWeights, Owner, Side, SimulationState};
use crate::rules::RulesEngine;

use super::leaf::LeafEvaluator;
use super::outcome::Outcome;

const MIN_CARD_VALUE: i32 = 1;
const MAX_CARD_VALUE: i32 = 10;
const CAPTURE_SATURATION: f32 = 5.0;

/// Positional scorer with configurable weights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeuristicScorer {
    weights: HeuristicWeights,
}

impl HeuristicScorer {
    #[must_use]
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Weighted mean of defense, deck and capture scores.
    #[must_use]
    pub fn state_score<E: RulesEngine>(&self, engine: &E, state: &SimulationState) -> f32 {
        let (defense, capture) = Self::board_score(engine, state);
        let deck = Self::deck_score(engine, state);
        let w = &self.weights;

        (defense * w.defense + deck * w.deck + capture * w.capture) / (w.defense + w.deck + w.capture)
    }

    /// `(defense, capture)` for Blue's cards on the board.
    #[must_use]
    pub fn board_score<E: RulesEngine>(engine: &E, state: &SimulationState) -> (f32, f32) {
        let mut capturing_sum = 0.0;
        let mut num_blue = 0usize;

        for (cell, placed) in state.board.iter().enumerate() {
            let Some(placed) = placed.filter(|p| p.owner == Owner::Blue) else {
                continue;
            };

            let mut capturing_values = 0u32;
            let mut open_sides = 0u32;
            for side in Side::ALL {
                let open = neighbor(cell, side).is_some_and(|n| state.board[n].is_none());
                if !open {
                    continue;
                }
                let defending = i32::from(placed.value(side));
                capturing_values += (MIN_CARD_VALUE..=MAX_CARD_VALUE)
                    .filter(|&capturing| engine.can_capture(capturing, defending))
                    .count() as u32;
                open_sides += 1;
            }

            if open_sides > 0 {
                capturing_sum += capturing_values as f32 / (open_sides as f32 * MAX_CARD_VALUE as f32);
            }
            num_blue += 1;
        }

        if num_blue == 0 {
            return (0.0, 0.0);
        }
        let defense = 1.0 - capturing_sum / num_blue as f32;
        let capture = (num_blue as f32 / CAPTURE_SATURATION).min(1.0);
        (defense, capture)
    }

    /// Mean modifier-adjusted optimizer score of Blue's unplayed cards.
    #[must_use]
    pub fn deck_score<E: RulesEngine>(engine: &E, state: &SimulationState) -> f32 {
        let (total, count) = state
            .deck_blue
            .available()
            .fold((0.0, 0usize), |(total, count), (_, card)| {
                (total + engine.score_card(card), count + 1)
            });

        if count == 0 {
            0.0
        } else {
            total / count as f32
        }
    }

    /// Blend weight after Blue has placed `num_placed` cards. Never negative.
    #[must_use]
    pub fn blend_weight(&self, num_placed: u8) -> f32 {
        let decay_steps = f32::from(num_placed) - 1.0;
        (self.weights.state_weight - decay_steps * self.weights.state_weight_decay).max(0.0)
    }

    /// Mix the positional score into a rollout estimate.
    ///
    /// The draw fraction passes through; the result is normalized to one game.
    #[must_use]
    pub fn blend<E: RulesEngine>(&self, engine: &E, state: &SimulationState, rollout: Outcome) -> Outcome {
        let weight = self.blend_weight(state.deck_blue.num_placed);
        let score = if weight > 0.0 {
            self.state_score(engine, state)
        } else {
            0.0
        };

        let wins = rollout.win_ratio() * (1.0 - weight) + score * weight;
        Outcome::new(wins.min(1.0), rollout.draw_ratio(), 1.0)
    }
}

/// Wraps another evaluator and blends the positional score into its estimates.
#[derive(Debug)]
pub struct ScoredEstimator<L> {
    inner: L,
    scorer: HeuristicScorer,
}

impl<L> ScoredEstimator<L> {
    #[must_use]
    pub fn new(inner: L, weights: HeuristicWeights) -> Self {
        Self {
            inner,
            scorer: HeuristicScorer::new(weights),
        }
    }

    #[must_use]
    pub fn scorer(&self) -> &HeuristicScorer {
        &self.scorer
    }

    #[must_use]
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<E: RulesEngine, L: LeafEvaluator<E>> LeafEvaluator<E> for ScoredEstimator<L> {
    fn name(&self) -> &'static str {
        "CarloScored"
    }

    fn initialize(&mut self, engine: &E, session_seed: u64) {
        self.inner.initialize(engine, session_seed);
    }

    fn is_initialized(&self) -> bool {
        self.inner.is_initialized()
    }

    fn should_estimate(&self, state: &SimulationState, depth: usize) -> bool {
        self.inner.should_estimate(state, depth)
    }

    fn estimate(&mut self, engine: &E, state: &SimulationState) -> Outcome {
        let rollout = self.inner.estimate(engine, state);
        self.scorer.blend(engine, state, rollout)
    }

    fn take_playouts(&mut self) -> u64 {
        self.inner.take_playouts()
    }
}
