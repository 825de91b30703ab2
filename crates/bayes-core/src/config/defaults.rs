// Single source of truth for all default values.

// --- Validation ---
pub const DEFAULT_SUM_TOLERANCE: f64 = 1e-4;

// --- Inference ---
pub const DEFAULT_PARALLEL_MARGINALS: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const LOG_FILTER_ENV: &str = "BAYES_LOG";
