//! Agent configuration.
//!
//! All values are pass-through constants consumed once at construction:
//! - rollout worker count and optional dedicated thread pool size
//! - state ceiling for switching from rollouts to exhaustive search
//! - heuristic blending weights
//! - random policy selection mode

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// How the random policy picks a card and a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Random start offset, then scan forward (wrapping) to the first legal
    /// index. Biased toward indices that follow a run of illegal ones;
    /// kept because historical win-rate baselines were measured with it.
    #[default]
    Scan,
    /// Uniform over the legal set.
    EqualDistribution,
}

/// Weights for blending the positional score into rollout estimates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Blend weight after the evaluated side's first placement.
    pub state_weight: f32,
    /// Weight lost per additional placement.
    pub state_weight_decay: f32,
    pub defense: f32,
    pub deck: f32,
    pub capture: f32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            state_weight: 0.75,
            state_weight_decay: 0.25,
            defense: 1.0,
            deck: 2.0,
            capture: 3.5,
        }
    }
}

impl HeuristicWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("state_weight", self.state_weight),
            ("state_weight_decay", self.state_weight_decay),
            ("defense", self.defense),
            ("deck", self.deck),
            ("capture", self.capture),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        let total = self.defense + self.deck + self.capture;
        if total <= 0.0 {
            return Err(ConfigError::InvalidWeight { name: "defense+deck+capture", value: total });
        }
        Ok(())
    }
}

/// Agent configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Full-game playouts per rollout estimate (default: 2000).
    pub workers: usize,

    /// Size of a dedicated rollout thread pool. `None` uses rayon's global pool.
    pub threads: Option<usize>,

    /// Largest number of reachable states the adaptive switch will search
    /// exhaustively (default: 10 000).
    pub max_states_to_explore: u64,

    /// Heuristic blending weights.
    pub heuristic: HeuristicWeights,

    /// Random policy used by rollouts and the random agent.
    pub random_mode: SelectionMode,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            workers: 2000,
            threads: None,
            max_states_to_explore: 10_000,
            heuristic: HeuristicWeights::default(),
            random_mode: SelectionMode::Scan,
        }
    }
}

impl AgentConfig {
    /// Set the number of rollout playouts.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Run rollouts on a dedicated pool of `threads` threads.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Set the exhaustive search ceiling.
    #[must_use]
    pub fn with_max_states(mut self, max_states: u64) -> Self {
        self.max_states_to_explore = max_states;
        self
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: HeuristicWeights) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn with_random_mode(mut self, mode: SelectionMode) -> Self {
        self.random_mode = mode;
        self
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreadCount);
        }
        if self.max_states_to_explore == 0 {
            return Err(ConfigError::ZeroExplorationCeiling);
        }
        self.heuristic.validate()
    }
}
