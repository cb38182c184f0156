//! Rules engine seam consumed by the agents.
//!
//! Games implement `RulesEngine` to define:
//! - Legal cells and cards for each state
//! - How a placement modifies state
//! - Capture checks and card scoring under rule modifiers
//!
//! The agents call into `RulesEngine` but never interpret
//! capture rules directly.

pub mod engine;
pub mod modifier;

pub use engine::RulesEngine;
pub use modifier::{ModifierFeatures, RuleModifier};
