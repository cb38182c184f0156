//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `find_next_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Successful placements explored exhaustively.
    pub nodes_expanded: u64,

    /// Branches estimated by a leaf evaluator instead of expanded.
    pub estimates: u64,

    /// Full-game playouts run by rollout estimates.
    pub playouts: u64,

    /// Times the random failsafe pick was used.
    pub failsafe_picks: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate playouts per second.
    #[must_use]
    pub fn playouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.playouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes, {} estimates, {} playouts in {:.1}ms",
            self.nodes_expanded,
            self.estimates,
            self.playouts,
            self.time_us as f64 / 1000.0
        )
    }
}
