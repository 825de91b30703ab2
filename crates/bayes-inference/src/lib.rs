//! # bayes-inference
//!
//! Exact inference over discrete Bayesian networks by enumeration.
//! Loads and validates network definitions, then answers posterior
//! queries against an immutable, atomically replaced network.

pub mod assignment;
pub mod engine;
pub mod enumeration;
pub mod graph;
pub mod loader;
pub mod lookup;
pub mod query;
pub mod validation;

pub use assignment::Assignment;
pub use engine::InferenceEngine;
pub use loader::{LoadReport, LoadedNetwork};
pub use query::{infer, marginals};
