use serde::{Deserialize, Serialize};

use super::defaults;

/// How the loader turns declaration order into evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Declaration order is the evaluation order. A parent declared after
    /// its child is rejected.
    Declared,
    /// Evaluation order is a topological sort of the parent links.
    Sorted,
}

/// Load-time validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Absolute tolerance when checking that a CPT row sums to 1.
    pub tolerance: f64,
    /// Evaluation order policy.
    pub ordering: OrderingPolicy,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            tolerance: defaults::DEFAULT_SUM_TOLERANCE,
            ordering: OrderingPolicy::Declared,
        }
    }
}
