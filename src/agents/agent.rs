//! The agent capability contract shared by every strategy.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::core::{Move, SimulationState};
use crate::rules::RulesEngine;

use super::outcome::Outcome;

/// Result of a move search.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decision {
    /// Chosen move, `None` when no legal move exists or the agent is not
    /// initialized.
    pub action: Option<Move>,
    /// Estimated outcome of the chosen move (or of the finished game).
    pub outcome: Outcome,
}

impl Decision {
    /// No move produced.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            action: None,
            outcome: Outcome::ZERO,
        }
    }
}

/// Move-selection strategy.
///
/// Drivers construct an agent once per match side, call `initialize` with
/// a session seed, then `find_next_move` once per turn.
pub trait Agent<E: RulesEngine>: Send {
    /// Display name of the strategy.
    fn name(&self) -> &'static str;

    /// (Re)create all random and worker state. Calling twice fully
    /// replaces the earlier state.
    fn initialize(&mut self, engine: &E, session_seed: u64);

    /// True once `initialize` has run.
    fn is_initialized(&self) -> bool;

    /// Root-level search progress in `[0, 1]`.
    fn progress(&self) -> f32 {
        0.0
    }

    /// Pick a move for the side to move in `state`.
    fn find_next_move(&mut self, engine: &E, state: &SimulationState) -> Decision;
}

/// Shared progress cell that a driver thread can poll during a search.
#[derive(Clone, Debug, Default)]
pub struct ProgressHandle(Arc<AtomicU32>);

impl ProgressHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fraction in `[0, 1]`.
    #[must_use]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub(crate) fn set(&self, value: f32) {
        self.0.store(value.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }
}
