//! # bayes-observability
//!
//! Structured logging for the inference workspace: subscriber setup,
//! span macros, and typed log events.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
