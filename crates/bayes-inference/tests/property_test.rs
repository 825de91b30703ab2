//! Property tests: posteriors are normalized, inference is deterministic,
//! and well-formed CPTs always validate.

use proptest::prelude::*;

use bayes_core::{Cpt, Evidence, Network, Node};
use bayes_inference::{infer, validation};

const VALUES: [&str; 2] = ["t", "f"];

/// Build a random binary network: node `i` may take any earlier nodes as
/// parents, so declaration order is always topological.
fn build_network(n: usize, parent_bits: &[u8], probs: &[f64]) -> Network {
    let mut nodes = Vec::with_capacity(n);
    let mut p = probs.iter().cycle();
    for i in 0..n {
        let parents: Vec<String> = (0..i)
            .filter(|j| parent_bits[i] & (1 << j) != 0)
            .map(|j| format!("n{j}"))
            .collect();

        let mut cpt = Cpt::new();
        for combo in 0..(1usize << parents.len()) {
            let key = Cpt::key_for((0..parents.len()).map(|k| VALUES[(combo >> k) & 1]));
            let pt = *p.next().unwrap();
            cpt = cpt.with_row(&key, [("t", pt), ("f", 1.0 - pt)]);
        }
        nodes.push(Node {
            name: format!("n{i}"),
            parents,
            values: VALUES.iter().map(|v| v.to_string()).collect(),
            cpt,
        });
    }
    Network::new("random", nodes, Vec::new()).unwrap()
}

fn network_strategy() -> impl Strategy<Value = Network> {
    (2usize..6)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(any::<u8>(), n),
                prop::collection::vec(0.0_f64..=1.0, 1..16),
            )
        })
        .prop_map(|(n, bits, probs)| build_network(n, &bits, &probs))
}

proptest! {
    #[test]
    fn well_formed_cpts_validate(network in network_strategy()) {
        prop_assert!(validation::validate(&network, 1e-4).is_ok());
    }

    #[test]
    fn posteriors_sum_to_one_or_are_all_zero(
        network in network_strategy(),
        query_seed in any::<usize>(),
        evidence_bits in any::<u8>(),
        value_bits in any::<u8>(),
    ) {
        let n = network.len();
        let query = query_seed % n;
        let evidence: Evidence = (0..n)
            .filter(|&i| i != query && evidence_bits & (1 << i) != 0)
            .map(|i| (format!("n{i}"), VALUES[((value_bits >> i) & 1) as usize].to_string()))
            .collect();

        let result = infer(&network, &format!("n{query}"), &evidence).unwrap();
        prop_assert!(result.iter().all(|(_, p)| (0.0..=1.0 + 1e-12).contains(&p)));
        prop_assert!(
            (result.total() - 1.0).abs() < 1e-9 || result.is_degenerate(),
            "total {} is neither 1 nor degenerate", result.total()
        );
    }

    #[test]
    fn inference_is_deterministic(network in network_strategy(), evidence_bits in any::<u8>()) {
        let n = network.len();
        let evidence: Evidence = (1..n)
            .filter(|&i| evidence_bits & (1 << i) != 0)
            .map(|i| (format!("n{i}"), "t".to_string()))
            .collect();
        let first = infer(&network, "n0", &evidence).unwrap();
        let second = infer(&network, "n0", &evidence).unwrap();
        prop_assert_eq!(first, second);
    }
}
