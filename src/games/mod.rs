//! Reference game implementations.

pub mod triad;
