//! Structured log events for key inference operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a successful network load.
pub fn network_loaded(name: &str, node_count: usize, layer_count: usize, fingerprint: &str) {
    tracing::info!(
        event = "network_loaded",
        network = %name,
        node_count = node_count,
        layer_count = layer_count,
        fingerprint = %fingerprint,
        "network loaded"
    );
}

/// Log a rejected load. The previous network stays active.
pub fn network_rejected(source: &str, reason: &str) {
    tracing::warn!(
        event = "network_rejected",
        source = %source,
        reason = %reason,
        "network rejected, keeping previous state"
    );
}

/// Log a completed query.
pub fn query_completed(query: &str, evidence_count: usize, total_weight: f64) {
    tracing::debug!(
        event = "query_completed",
        query = %query,
        evidence_count = evidence_count,
        total_weight = total_weight,
        "query completed"
    );
}

/// Log a query whose evidence has zero joint probability.
pub fn degenerate_posterior(query: &str, evidence: &[(String, String)]) {
    tracing::warn!(
        event = "degenerate_posterior",
        query = %query,
        evidence = ?evidence,
        "evidence has zero joint probability, posterior left unnormalized"
    );
}

/// Log a CPT row or value that resolved to probability 0.
pub fn lookup_miss(node: &str, key: &str, value: &str) {
    tracing::debug!(
        event = "lookup_miss",
        node = %node,
        key = %key,
        value = %value,
        "cpt entry missing, using probability 0"
    );
}
