//! Sum-product enumeration over the network's joint distribution.
//!
//! The joint probability of a full assignment is the product of every
//! node's CPT entry given its parents, taken in topological order.
//! Summing that product over every value of each unassigned variable
//! yields the probability of the partial assignment. Cost is exponential
//! in the number of hidden variables.

use bayes_core::Network;

use crate::assignment::Assignment;
use crate::lookup::lookup;

/// Probability of `assignment` restricted to `vars`, given that every
/// variable before `vars` in evaluation order is already assigned.
///
/// `vars` holds node positions in topological order.
pub fn enumerate_all(network: &Network, vars: &[usize], assignment: &Assignment<'_>) -> f64 {
    let Some((&first, rest)) = vars.split_first() else {
        return 1.0;
    };
    let node = &network.nodes()[first];

    match assignment.get(&node.name) {
        Some(value) => {
            let p = lookup(node, value, assignment);
            if p == 0.0 {
                return 0.0;
            }
            p * enumerate_all(network, rest, assignment)
        }
        None => node
            .values
            .iter()
            .map(|value| {
                let extended = assignment.bind(&node.name, value);
                let p = lookup(node, value, &extended);
                // Zero-weight branches contribute nothing.
                if p == 0.0 {
                    return 0.0;
                }
                p * enumerate_all(network, rest, &extended)
            })
            .sum(),
    }
}

/// Probability of `assignment` over the whole network.
pub fn joint_probability(network: &Network, assignment: &Assignment<'_>) -> f64 {
    enumerate_all(network, network.evaluation_order(), assignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bayes_core::{Cpt, Evidence, Node};

    fn chain() -> Network {
        let a = Node::new(
            "A",
            Vec::<&str>::new(),
            vec!["true", "false"],
            Cpt::new().with_row("root", [("true", 0.5), ("false", 0.5)]),
        );
        let b = Node::new(
            "B",
            vec!["A"],
            vec!["true", "false"],
            Cpt::new()
                .with_row("true", [("true", 0.8), ("false", 0.2)])
                .with_row("false", [("true", 0.3), ("false", 0.7)]),
        );
        Network::new("chain", vec![a, b], Vec::new()).unwrap()
    }

    #[test]
    fn empty_variable_list_is_multiplicative_identity() {
        let network = chain();
        let evidence = Evidence::new();
        assert_eq!(enumerate_all(&network, &[], &Assignment::new(&evidence)), 1.0);
    }

    #[test]
    fn no_evidence_sums_to_one() {
        let network = chain();
        let evidence = Evidence::new();
        let p = joint_probability(&network, &Assignment::new(&evidence));
        assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn marginal_of_child_sums_over_parent() {
        let network = chain();
        let evidence = Evidence::new().with("B", "true");
        let p = joint_probability(&network, &Assignment::new(&evidence));
        assert!((p - 0.55).abs() < 1e-12);
    }

    #[test]
    fn full_assignment_is_chain_rule_product() {
        let network = chain();
        let evidence = Evidence::new().with("A", "false").with("B", "false");
        let p = joint_probability(&network, &Assignment::new(&evidence));
        assert!((p - 0.5 * 0.7).abs() < 1e-12);
    }
}
