//! Named agent strategies and their construction from configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{AgentConfig, AgentError};
use crate::rules::RulesEngine;

use super::adaptive::AdaptiveEstimator;
use super::agent::Agent;
use super::explorer::GraphExplorer;
use super::heuristic::ScoredEstimator;
use super::random::RandomAgent;
use super::rollout::RolloutEstimator;

/// One-level Monte-Carlo: every root move valued by random playouts.
pub type DerpyCarlo = GraphExplorer<RolloutEstimator>;

/// Rollouts early in the game, exhaustive search once the tree is small.
pub type CarloTheExplorer = GraphExplorer<AdaptiveEstimator<RolloutEstimator>>;

/// `CarloTheExplorer` with rollout estimates blended with a positional score.
pub type CarloScored = GraphExplorer<ScoredEstimator<AdaptiveEstimator<RolloutEstimator>>>;

impl DerpyCarlo {
    pub fn derpy_carlo(config: &AgentConfig) -> Result<Self, AgentError> {
        Ok(GraphExplorer::new(RolloutEstimator::new(config)?))
    }
}

impl CarloTheExplorer {
    pub fn carlo_the_explorer(config: &AgentConfig) -> Result<Self, AgentError> {
        let rollout = RolloutEstimator::new(config)?;
        Ok(GraphExplorer::new(AdaptiveEstimator::new(
            rollout,
            config.max_states_to_explore,
        )))
    }
}

impl CarloScored {
    pub fn carlo_scored(config: &AgentConfig) -> Result<Self, AgentError> {
        let rollout = RolloutEstimator::new(config)?;
        let adaptive = AdaptiveEstimator::new(rollout, config.max_states_to_explore);
        Ok(GraphExplorer::new(ScoredEstimator::new(adaptive, config.heuristic)))
    }
}

/// Strategy selector for drivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Random,
    GraphExplorer,
    DerpyCarlo,
    CarloTheExplorer,
    CarloScored,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Random,
        AgentKind::GraphExplorer,
        AgentKind::DerpyCarlo,
        AgentKind::CarloTheExplorer,
        AgentKind::CarloScored,
    ];

    /// Build an uninitialized agent of this kind.
    pub fn build<E: RulesEngine + 'static>(
        self,
        config: &AgentConfig,
    ) -> Result<Box<dyn Agent<E>>, AgentError> {
        config.validate()?;
        Ok(match self {
            AgentKind::Random => Box::new(RandomAgent::new(config.random_mode)),
            AgentKind::GraphExplorer => Box::new(GraphExplorer::exhaustive()),
            AgentKind::DerpyCarlo => Box::new(DerpyCarlo::derpy_carlo(config)?),
            AgentKind::CarloTheExplorer => Box::new(CarloTheExplorer::carlo_the_explorer(config)?),
            AgentKind::CarloScored => Box::new(CarloScored::carlo_scored(config)?),
        })
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::GraphExplorer => "explorer",
            AgentKind::DerpyCarlo => "derpy",
            AgentKind::CarloTheExplorer => "carlo",
            AgentKind::CarloScored => "scored",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AgentError::UnknownKind(s.to_string()))
    }
}
