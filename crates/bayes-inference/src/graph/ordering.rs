//! Evaluation order: either trust declaration order, or sort by parent links.

use bayes_core::config::OrderingPolicy;
use bayes_core::errors::LoadError;
use bayes_core::Network;

use super::dependency_graph::DependencyGraph;

/// Compute the evaluation order for `network` under `policy`.
///
/// Cycles are rejected under both policies. Under [`OrderingPolicy::Declared`]
/// a parent declared after its child is a [`LoadError::ForwardReference`].
pub fn evaluation_order(network: &Network, policy: OrderingPolicy) -> Result<Vec<usize>, LoadError> {
    let graph = DependencyGraph::from_network(network);

    if let Some(cycle) = graph.find_cycles().into_iter().next() {
        let path = cycle
            .iter()
            .filter_map(|&i| network.node_at(i).map(|n| n.name.as_str()))
            .collect::<Vec<_>>()
            .join(" -> ");
        return Err(LoadError::CycleDetected { path });
    }

    match policy {
        OrderingPolicy::Declared => {
            check_declared_order(network)?;
            Ok((0..network.len()).collect())
        }
        OrderingPolicy::Sorted => graph.topological_order().ok_or_else(|| LoadError::CycleDetected {
            path: "unresolved".to_string(),
        }),
    }
}

/// Every parent must be declared before its child.
fn check_declared_order(network: &Network) -> Result<(), LoadError> {
    for (position, node) in network.nodes().iter().enumerate() {
        for parent in &node.parents {
            let parent_position = network.position(parent).ok_or_else(|| LoadError::UnknownParent {
                node: node.name.clone(),
                parent: parent.clone(),
            })?;
            if parent_position >= position {
                return Err(LoadError::ForwardReference {
                    node: node.name.clone(),
                    parent: parent.clone(),
                });
            }
        }
    }
    Ok(())
}
