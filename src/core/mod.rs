//! Core types: board geometry, owners, snapshots, moves, RNG, configuration.
//!
//! These are shared by the rules engine seam and every agent.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{nth_set_bit, ActionMask, Move};
pub use board::{neighbor, Side, BOARD_SIDE, BOARD_SIZE, NEIGHBORS};
pub use config::{AgentConfig, HeuristicWeights, SelectionMode};
pub use error::{AgentError, ConfigError};
pub use player::{GameStatus, Owner};
pub use rng::SearchRng;
pub use state::{DeckInstance, PlacedCard, SimulationState, MAX_AVAILABLE_CARDS};
