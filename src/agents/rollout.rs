//! Monte-Carlo rollout estimates.
//!
//! Each estimate plays a fixed number of random self-play games from the
//! same position and reports the fraction Blue won or drew. Worker `i`
//! owns a random stream seeded `session_seed + i`, so counts are identical
//! for a given seed no matter how the pool schedules the games.

use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::{AgentConfig, AgentError, GameStatus, SearchRng, SelectionMode, SimulationState};
use crate::rules::RulesEngine;

use super::leaf::LeafEvaluator;
use super::outcome::Outcome;
use super::random::RandomAgent;

/// Raw counts from one batch of playouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RolloutCounts {
    pub wins: u32,
    pub draws: u32,
    pub games: u32,
}

impl RolloutCounts {
    /// Normalized outcome: win and draw fractions of one game.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.games == 0 {
            return Outcome::ZERO;
        }
        let games = self.games as f32;
        Outcome::new(self.wins as f32 / games, self.draws as f32 / games, 1.0)
    }
}

/// Rollout leaf evaluator: estimates every node below the root.
#[derive(Debug)]
pub struct RolloutEstimator {
    mode: SelectionMode,
    num_workers: usize,
    workers: Vec<RandomAgent>,
    pool: Option<ThreadPool>,
    playouts: u64,
}

impl RolloutEstimator {
    /// Build from configuration, creating a dedicated pool if `threads` is set.
    pub fn new(config: &AgentConfig) -> Result<Self, AgentError> {
        config.validate()?;
        let pool = config
            .threads
            .map(|threads| ThreadPoolBuilder::new().num_threads(threads).build())
            .transpose()?;

        Ok(Self {
            mode: config.random_mode,
            num_workers: config.workers,
            workers: Vec::new(),
            pool,
            playouts: 0,
        })
    }

    /// Estimator on rayon's global pool.
    #[must_use]
    pub fn with_workers(num_workers: usize, mode: SelectionMode) -> Self {
        Self {
            mode,
            num_workers,
            workers: Vec::new(),
            pool: None,
            playouts: 0,
        }
    }

    #[must_use]
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Play one game per worker from `state` and count Blue's results.
    pub fn run<E: RulesEngine>(&mut self, engine: &E, state: &SimulationState) -> RolloutCounts {
        let wins = AtomicU32::new(0);
        let draws = AtomicU32::new(0);

        let playout = |agent: &mut RandomAgent| {
            let mut game = state.clone();
            engine.run_self_play(&mut game, agent);
            match game.status {
                GameStatus::BlueWins => {
                    wins.fetch_add(1, Ordering::Relaxed);
                }
                GameStatus::BlueDraw => {
                    draws.fetch_add(1, Ordering::Relaxed);
                }
                _ => {}
            }
        };

        let workers = &mut self.workers;
        match &self.pool {
            Some(pool) => pool.install(|| workers.par_iter_mut().for_each(playout)),
            None => workers.par_iter_mut().for_each(playout),
        }

        self.playouts += workers.len() as u64;
        RolloutCounts {
            wins: wins.into_inner(),
            draws: draws.into_inner(),
            games: workers.len() as u32,
        }
    }
}

impl<E: RulesEngine> LeafEvaluator<E> for RolloutEstimator {
    fn name(&self) -> &'static str {
        "DerpyCarlo"
    }

    fn initialize(&mut self, _engine: &E, session_seed: u64) {
        self.workers = (0..self.num_workers as u64)
            .map(|idx| RandomAgent::with_rng(self.mode, SearchRng::for_stream(session_seed, idx)))
            .collect();
        self.playouts = 0;
    }

    fn is_initialized(&self) -> bool {
        self.num_workers > 0 && self.workers.len() == self.num_workers
    }

    fn should_estimate(&self, _state: &SimulationState, depth: usize) -> bool {
        depth > 0
    }

    fn estimate(&mut self, engine: &E, state: &SimulationState) -> Outcome {
        self.run(engine, state).outcome()
    }

    fn take_playouts(&mut self) -> u64 {
        std::mem::take(&mut self.playouts)
    }
}
