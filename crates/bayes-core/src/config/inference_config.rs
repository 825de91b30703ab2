use serde::{Deserialize, Serialize};

use super::defaults;

/// Query-time configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Compute per-node marginals on the rayon pool.
    pub parallel_marginals: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            parallel_marginals: defaults::DEFAULT_PARALLEL_MARGINALS,
        }
    }
}
