//! Posterior queries: one enumeration per candidate value, then normalize.

use bayes_core::errors::QueryError;
use bayes_core::{Distribution, Evidence, Network, Node};
use bayes_observability::events;
use rayon::prelude::*;

use crate::assignment::Assignment;
use crate::enumeration::joint_probability;

/// Check a query before any enumeration starts.
///
/// The query node must exist and must not be observed. Every observed node
/// must exist and carry a value from its domain.
pub fn check_query<'n>(network: &'n Network, query: &str, evidence: &Evidence) -> Result<&'n Node, QueryError> {
    if evidence.contains(query) {
        return Err(QueryError::EvidenceOnQueryNode {
            node: query.to_string(),
        });
    }
    let node = network.node(query).ok_or_else(|| QueryError::UnknownNode {
        name: query.to_string(),
    })?;
    check_evidence(network, evidence)?;
    Ok(node)
}

/// Every observed node exists and the observed value is in its domain.
pub fn check_evidence(network: &Network, evidence: &Evidence) -> Result<(), QueryError> {
    for (name, value) in evidence.iter() {
        let node = network.node(name).ok_or_else(|| QueryError::UnknownNode {
            name: name.to_string(),
        })?;
        if !node.has_value(value) {
            return Err(QueryError::UnknownValue {
                node: name.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

/// Scale weights to sum to 1. All-zero weights are returned unchanged.
pub fn normalize(weights: Vec<(String, f64)>) -> Vec<(String, f64)> {
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    if total == 0.0 {
        return weights;
    }
    weights.into_iter().map(|(v, w)| (v, w / total)).collect()
}

/// P(`query` | `evidence`) over the query node's domain.
pub fn infer(network: &Network, query: &str, evidence: &Evidence) -> Result<Distribution, QueryError> {
    let node = check_query(network, query, evidence)?;
    Ok(posterior(network, node, evidence))
}

/// Posterior of `node`, assuming the query was already checked.
fn posterior(network: &Network, node: &Node, evidence: &Evidence) -> Distribution {
    let base = Assignment::new(evidence);
    let weights: Vec<(String, f64)> = node
        .values
        .iter()
        .map(|value| {
            let extended = base.bind(&node.name, value);
            (value.clone(), joint_probability(network, &extended))
        })
        .collect();

    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    events::query_completed(&node.name, evidence.len(), total);
    if total == 0.0 {
        let observed: Vec<(String, String)> = evidence
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        events::degenerate_posterior(&node.name, &observed);
    }

    Distribution::new(node.name.clone(), normalize(weights))
}

/// Posterior of every unobserved node, in declaration order.
///
/// With `parallel`, nodes are spread over the rayon pool. The network is
/// read-only and each query owns its assignment, so no locking is needed.
pub fn marginals(network: &Network, evidence: &Evidence, parallel: bool) -> Result<Vec<Distribution>, QueryError> {
    check_evidence(network, evidence)?;
    let hidden: Vec<&Node> = network
        .nodes()
        .iter()
        .filter(|n| !evidence.contains(&n.name))
        .collect();

    let results: Vec<Distribution> = if parallel {
        hidden
            .par_iter()
            .map(|node| posterior(network, node, evidence))
            .collect()
    } else {
        hidden
            .iter()
            .map(|node| posterior(network, node, evidence))
            .collect()
    };
    Ok(results)
}
