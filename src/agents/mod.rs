//! Move-selection agents.
//!
//! ## Overview
//!
//! Every strategy implements the `Agent` capability contract. The search
//! strategies share one `GraphExplorer` and differ only in the leaf
//! evaluator that decides where expansion stops:
//!
//! - **Random**: uniform (or scan-biased) legal move; also the rollout policy
//! - **GraphExplorer**: exhaustive search to the end of the game
//! - **DerpyCarlo**: root moves valued by parallel random playouts
//! - **CarloTheExplorer**: playouts until the remaining tree fits a state
//!   ceiling, exhaustive afterwards
//! - **CarloScored**: as above, with playout estimates blended with a
//!   positional heuristic early in the game
//!
//! ## Usage
//!
//! ```rust
//! use triad_agent::agents::{Agent, AgentKind};
//! use triad_agent::core::{AgentConfig, Owner, SearchRng};
//! use triad_agent::games::triad::{deal, starter_registry, TriadGame};
//!
//! let game = TriadGame::new();
//! let (blue, red) = deal(&starter_registry(), &mut SearchRng::new(1)).unwrap();
//! let state = game.new_game(blue, red, Owner::Blue);
//!
//! let config = AgentConfig::default().with_workers(50);
//! let mut agent = AgentKind::DerpyCarlo.build::<TriadGame>(&config).unwrap();
//! agent.initialize(&game, 42);
//!
//! let decision = agent.find_next_move(&game, &state);
//! assert!(decision.action.is_some());
//! ```

pub mod adaptive;
pub mod agent;
pub mod explorer;
pub mod heuristic;
pub mod kind;
pub mod leaf;
pub mod outcome;
pub mod random;
pub mod rollout;
pub mod stats;

pub use adaptive::{states, states_forced, AdaptiveEstimator, ExplorationThresholds};
pub use agent::{Agent, Decision, ProgressHandle};
pub use explorer::GraphExplorer;
pub use heuristic::{HeuristicScorer, ScoredEstimator};
pub use kind::{AgentKind, CarloScored, CarloTheExplorer, DerpyCarlo};
pub use leaf::{Exhaustive, LeafEvaluator};
pub use outcome::Outcome;
pub use random::RandomAgent;
pub use rollout::{RolloutCounts, RolloutEstimator};
pub use stats::SearchStats;
