/// CPT consistency errors. Fatal to the load that produced the network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unstable distribution at node '{node}' (row '{key}'): probabilities sum to {sum:.4}")]
    DistributionSum { node: String, key: String, sum: f64 },
}
