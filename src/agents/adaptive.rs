//! Board-fill thresholds for switching from rollouts to exhaustive search.
//!
//! Reachable-state counts with `n` cards still to place:
//! - forced card each ply: `n!` (only the cell varies)
//! - free choice: the product over `k = 1..=n` of
//!   `k * floor((k + 2) / 2) * floor((k + 1) / 2)`, i.e. cells times the
//!   hand sizes of the two sides as they alternate

use log::debug;

use crate::core::{SimulationState, BOARD_SIZE};
use crate::rules::RulesEngine;

use super::leaf::LeafEvaluator;
use super::outcome::Outcome;

/// Reachable states with `to_place` plies left and a forced card each ply.
#[must_use]
pub fn states_forced(to_place: usize) -> u64 {
    (1..=to_place as u64).fold(1, u64::saturating_mul)
}

/// Reachable states with `to_place` plies left and a free card choice.
#[must_use]
pub fn states(to_place: usize) -> u64 {
    (1..=to_place as u64)
        .map(|k| k.saturating_mul((k + 2) / 2).saturating_mul((k + 1) / 2))
        .fold(1, u64::saturating_mul)
}

/// Cards-placed counts from which exhaustive search stays under a ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplorationThresholds {
    /// Fewest cards placed for exhaustive search without a forced card.
    pub min_placed: usize,
    /// Fewest cards placed for exhaustive search with a forced card.
    pub min_placed_forced: usize,
}

impl Default for ExplorationThresholds {
    /// Never explore below the root.
    fn default() -> Self {
        Self {
            min_placed: BOARD_SIZE + 1,
            min_placed_forced: BOARD_SIZE + 1,
        }
    }
}

impl ExplorationThresholds {
    /// Thresholds keeping the reachable-state count at or below `max_states`.
    #[must_use]
    pub fn compute(max_states: u64) -> Self {
        let mut thresholds = Self::default();

        let mut count_forced: u64 = 1;
        let mut count: u64 = 1;
        for to_place in 1..=BOARD_SIZE as u64 {
            let placed = BOARD_SIZE - to_place as usize;

            count_forced = count_forced.saturating_mul(to_place);
            if count_forced <= max_states {
                thresholds.min_placed_forced = placed;
            }

            count = count.saturating_mul(to_place * ((to_place + 2) / 2) * ((to_place + 1) / 2));
            if count <= max_states {
                thresholds.min_placed = placed;
            }
        }

        thresholds
    }

    /// Threshold for a state with or without a forced card.
    #[must_use]
    pub fn for_state(&self, forced: bool) -> usize {
        if forced {
            self.min_placed_forced
        } else {
            self.min_placed
        }
    }
}

/// Estimates with `inner` only while the remaining game tree is too large
/// to search; once enough cards are on the board the explorer goes exhaustive.
#[derive(Debug)]
pub struct AdaptiveEstimator<L> {
    inner: L,
    max_states: u64,
    thresholds: ExplorationThresholds,
    ready: bool,
}

impl<L> AdaptiveEstimator<L> {
    #[must_use]
    pub fn new(inner: L, max_states: u64) -> Self {
        Self {
            inner,
            max_states,
            thresholds: ExplorationThresholds::default(),
            ready: false,
        }
    }

    /// Thresholds in effect (defaults until initialized).
    #[must_use]
    pub fn thresholds(&self) -> ExplorationThresholds {
        self.thresholds
    }

    #[must_use]
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<E: RulesEngine, L: LeafEvaluator<E>> LeafEvaluator<E> for AdaptiveEstimator<L> {
    fn name(&self) -> &'static str {
        "CarloTheExplorer"
    }

    fn initialize(&mut self, engine: &E, session_seed: u64) {
        self.inner.initialize(engine, session_seed);
        self.thresholds = ExplorationThresholds::compute(self.max_states);
        self.ready = true;
        debug!(
            "exhaustive search from {} placed ({} with forced card), ceiling {}",
            self.thresholds.min_placed, self.thresholds.min_placed_forced, self.max_states
        );
    }

    fn is_initialized(&self) -> bool {
        self.ready && self.inner.is_initialized()
    }

    fn should_estimate(&self, state: &SimulationState, depth: usize) -> bool {
        let threshold = self.thresholds.for_state(state.forced_card.is_some());
        depth > 0 && usize::from(state.cards_placed) < threshold
    }

    fn estimate(&mut self, engine: &E, state: &SimulationState) -> Outcome {
        self.inner.estimate(engine, state)
    }

    fn take_playouts(&mut self) -> u64 {
        self.inner.take_playouts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_counts() {
        assert_eq!(states(1), 1);
        assert_eq!(states(2), 4);
        assert_eq!(states(3), 48);
        assert_eq!(states(4), 1152);
        assert_eq!(states(5), 51_840);
        assert_eq!(states_forced(7), 5040);
        assert_eq!(states_forced(8), 40_320);
    }

    #[test]
    fn test_state_counts_saturate() {
        assert_eq!(states(21), u64::MAX);
        assert_eq!(states(64), u64::MAX);
        assert_eq!(states_forced(21), u64::MAX);
        assert_eq!(states_forced(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_default_ceiling() {
        let thresholds = ExplorationThresholds::compute(10_000);
        assert_eq!(thresholds.min_placed, 5);
        assert_eq!(thresholds.min_placed_forced, 2);
        assert_eq!(thresholds.for_state(false), 5);
        assert_eq!(thresholds.for_state(true), 2);
    }

    #[test]
    fn test_huge_ceiling_explores_everything() {
        let thresholds = ExplorationThresholds::compute(u64::MAX);
        assert_eq!(thresholds.min_placed, 0);
        assert_eq!(thresholds.min_placed_forced, 0);
    }

    #[test]
    fn test_adaptive_predicate() {
        use crate::agents::leaf::Exhaustive;
        use crate::cards::Card;
        use crate::core::DeckInstance;
        use crate::games::triad::TriadGame;

        let game = TriadGame::new();
        let deck = || DeckInstance::new((0..5).map(|_| Card::new([5; 4], 0.5)));
        let mut adaptive = AdaptiveEstimator::new(Exhaustive, 10_000);
        adaptive.initialize(&game, 0);
        let adaptive: &dyn LeafEvaluator<TriadGame> = &adaptive;

        let mut state = SimulationState::new(deck(), deck());
        assert!(!adaptive.should_estimate(&state, 0), "root always expands");

        state.cards_placed = 1;
        assert!(adaptive.should_estimate(&state, 1));
        state.cards_placed = 5;
        assert!(!adaptive.should_estimate(&state, 1));

        state.cards_placed = 2;
        state.forced_card = Some(0);
        assert!(!adaptive.should_estimate(&state, 3));
        state.cards_placed = 1;
        assert!(adaptive.should_estimate(&state, 3));
    }

    #[test]
    fn test_thresholds_match_counts() {
        for ceiling in [1, 4, 47, 48, 1152, 10_000, 51_840] {
            let t = ExplorationThresholds::compute(ceiling);
            assert!(states(BOARD_SIZE - t.min_placed) <= ceiling);
            if t.min_placed > 0 {
                assert!(states(BOARD_SIZE - t.min_placed + 1) > ceiling);
            }
        }
    }
}
