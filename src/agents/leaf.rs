//! Leaf evaluators: where the graph explorer stops expanding.
//!
//! The explorer asks its evaluator at every non-terminal node whether to
//! keep expanding or to return an estimate instead. Evaluators compose:
//! - `Exhaustive`: never estimates, the explorer searches to game end
//! - `RolloutEstimator`: random playouts below the root
//! - `AdaptiveEstimator`: rollouts only while the remaining tree is large
//! - `ScoredEstimator`: blends a positional score into another estimate

use crate::core::SimulationState;
use crate::rules::RulesEngine;

use super::outcome::Outcome;

/// Decides when to stop expanding and how to value the cut-off branch.
pub trait LeafEvaluator<E: RulesEngine>: Send {
    /// Name of the strategy this evaluator gives the explorer.
    fn name(&self) -> &'static str;

    /// (Re)build seeded state for a new session.
    fn initialize(&mut self, engine: &E, session_seed: u64);

    /// True once `initialize` has run.
    fn is_initialized(&self) -> bool;

    /// Estimate this non-terminal node instead of expanding it?
    fn should_estimate(&self, state: &SimulationState, depth: usize) -> bool;

    /// Value of a non-terminal node, normalized to one game.
    fn estimate(&mut self, engine: &E, state: &SimulationState) -> Outcome;

    /// Playouts run since the last call, drained by the explorer for stats.
    fn take_playouts(&mut self) -> u64 {
        0
    }
}

/// Full-depth search with no estimates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exhaustive;

impl<E: RulesEngine> LeafEvaluator<E> for Exhaustive {
    fn name(&self) -> &'static str {
        "GraphExplorer"
    }

    fn initialize(&mut self, _engine: &E, _session_seed: u64) {}

    fn is_initialized(&self) -> bool {
        true
    }

    fn should_estimate(&self, _state: &SimulationState, _depth: usize) -> bool {
        false
    }

    fn estimate(&mut self, _engine: &E, state: &SimulationState) -> Outcome {
        Outcome::from_status(state.status).unwrap_or(Outcome::ZERO)
    }
}
