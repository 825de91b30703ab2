//! CPT consistency check: every stored distribution must sum to 1.

use bayes_core::errors::ValidationError;
use bayes_core::Network;

/// Every violation in the network, in declaration order then document row order.
pub fn find_violations(network: &Network, tolerance: f64) -> Vec<ValidationError> {
    network
        .nodes()
        .iter()
        .flat_map(|node| {
            node.cpt.rows().filter_map(move |(key, distribution)| {
                let sum: f64 = distribution.values().sum();
                // Written so that a NaN sum fails too.
                if (sum - 1.0).abs() <= tolerance {
                    None
                } else {
                    Some(ValidationError::DistributionSum {
                        node: node.name.clone(),
                        key: key.to_string(),
                        sum,
                    })
                }
            })
        })
        .collect()
}

/// Reject the network at the first distribution that does not sum to 1
/// within `tolerance`.
pub fn validate(network: &Network, tolerance: f64) -> Result<(), ValidationError> {
    match find_violations(network, tolerance).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}
