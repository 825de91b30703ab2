//! Span definitions per operation: load, query, marginals.

/// Create a network load span.
#[macro_export]
macro_rules! load_span {
    ($source:expr) => {
        tracing::info_span!("bayes.load", source = %$source)
    };
}

/// Create a single-query span.
#[macro_export]
macro_rules! query_span {
    ($query:expr, $evidence_count:expr) => {
        tracing::info_span!("bayes.query", query = %$query, evidence = $evidence_count)
    };
}

/// Create an all-marginals span.
#[macro_export]
macro_rules! marginals_span {
    ($node_count:expr, $parallel:expr) => {
        tracing::info_span!("bayes.marginals", nodes = $node_count, parallel = $parallel)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const LOAD: &str = "bayes.load";
    pub const QUERY: &str = "bayes.query";
    pub const MARGINALS: &str = "bayes.marginals";
}
