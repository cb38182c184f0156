//! Error types for agent construction.
//!
//! Searching never fails: a missing move is reported as `None`. Errors
//! only arise while validating configuration or building worker pools.

use thiserror::Error;

/// Invalid agent configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("rollout worker count must be positive")]
    ZeroWorkers,

    #[error("exploration ceiling must be positive")]
    ZeroExplorationCeiling,

    #[error("heuristic weight `{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f32 },

    #[error("thread count must be positive when set")]
    InvalidThreadCount,
}

/// Failure to build an agent.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build rollout thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("unknown agent kind `{0}`")]
    UnknownKind(String),
}
