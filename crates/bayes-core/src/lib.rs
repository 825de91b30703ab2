//! # bayes-core
//!
//! Foundation crate for the Bayesian network inference workspace.
//! Defines the network data model, errors, config, constants, and traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BayesConfig;
pub use errors::{BayesError, BayesResult};
pub use models::{Cpt, Distribution, Evidence, Layer, Network, Node};
pub use traits::NetworkSource;
