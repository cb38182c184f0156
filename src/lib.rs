//! # triad-agent
//!
//! Move-selection agents for Triple Triad.
//!
//! ## Design Principles
//!
//! 1. **Rules Behind a Seam**: Agents never interpret capture rules. They ask
//!    a `RulesEngine` for legal cells and cards and for the result of a
//!    placement, so rule modifiers stay out of search code.
//!
//! 2. **Value Snapshots**: `SimulationState` is a small `Clone` value. Search
//!    clones it per child and never mutates a parent.
//!
//! 3. **Reproducible Randomness**: Every stochastic component owns a seeded
//!    ChaCha stream. Parallel rollout workers use `session + index` streams,
//!    so results do not depend on thread scheduling.
//!
//! ## Architecture
//!
//! - **One Explorer, Many Leaves**: `GraphExplorer` walks the game graph and
//!   alternates maximising (own ply) with summing (opponent ply). A
//!   `LeafEvaluator` decides where to stop: never (exhaustive), at depth one
//!   (rollouts), or while the remaining tree is too large (adaptive switch).
//!
//! - **Parallel Playouts**: Rollouts run one full random game per worker on
//!   rayon, aggregating wins and draws with atomic counters.
//!
//! ## Modules
//!
//! - `core`: Board geometry, owners, snapshots, moves, RNG, configuration, errors
//! - `cards`: Card definitions and the registry
//! - `rules`: RulesEngine trait and rule modifier hooks
//! - `games`: Reference Triple Triad implementation
//! - `agents`: Outcome aggregate, agent contract and every strategy

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod agents;

// Re-export commonly used types
pub use crate::core::{
    ActionMask, Move, Owner, GameStatus,
    SearchRng, SimulationState, DeckInstance, PlacedCard,
    AgentConfig, HeuristicWeights, SelectionMode,
    AgentError, ConfigError,
};

pub use crate::cards::{Card, CardDefinition, CardId, CardRegistry};

pub use crate::rules::{ModifierFeatures, RuleModifier, RulesEngine};

pub use crate::agents::{
    Agent, AgentKind, Decision, Outcome, ProgressHandle,
    RandomAgent, GraphExplorer, LeafEvaluator, Exhaustive,
    RolloutEstimator, AdaptiveEstimator, ScoredEstimator, HeuristicScorer,
    DerpyCarlo, CarloTheExplorer, CarloScored, SearchStats,
};
