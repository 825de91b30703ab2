//! Configuration for loading, validation, inference, and observability.
//!
//! Every section is `#[serde(default)]`, so a partial (or empty) TOML
//! document is a valid configuration.

pub mod defaults;
mod inference_config;
mod observability_config;
mod validation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;
pub use validation_config::{OrderingPolicy, ValidationConfig};

use crate::errors::{BayesError, BayesResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BayesConfig {
    pub validation: ValidationConfig,
    pub inference: InferenceConfig,
    pub observability: ObservabilityConfig,
}

impl BayesConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(source: &str) -> BayesResult<Self> {
        toml::from_str(source).map_err(|e| BayesError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> BayesResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| BayesError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml(&source)
    }
}
