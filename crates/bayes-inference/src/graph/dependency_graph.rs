//! petgraph view of the parent → child links.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use bayes_core::Network;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

/// Directed graph with one vertex per network node (weight = declaration
/// position) and one edge per parent link, parent → child.
pub struct DependencyGraph {
    pub graph: DiGraph<usize, ()>,
}

impl DependencyGraph {
    /// Build the graph. Parents must already be known to the network.
    pub fn from_network(network: &Network) -> Self {
        let mut graph = DiGraph::with_capacity(network.len(), network.len());
        let indices: Vec<NodeIndex> = (0..network.len()).map(|i| graph.add_node(i)).collect();
        for (child, node) in network.nodes().iter().enumerate() {
            for parent in &node.parents {
                if let Some(parent) = network.position(parent) {
                    graph.add_edge(indices[parent], indices[child], ());
                }
            }
        }
        Self { graph }
    }

    /// Strongly connected components that form cycles, including self-loops.
    /// Each cycle is returned as a closed walk of declaration positions.
    pub fn find_cycles(&self) -> Vec<Vec<usize>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| {
                scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0])
            })
            .filter_map(|scc| self.cycle_through(&scc))
            .collect()
    }

    /// Shortest closed walk from the earliest-declared member of `scc` back to itself.
    fn cycle_through(&self, scc: &[NodeIndex]) -> Option<Vec<usize>> {
        let start = *scc.iter().min_by_key(|idx| self.graph[**idx])?;
        let mut previous: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors_directed(current, Direction::Outgoing) {
                if !scc.contains(&next) {
                    continue;
                }
                if next == start {
                    let mut back = Vec::new();
                    let mut cursor = current;
                    while cursor != start {
                        back.push(self.graph[cursor]);
                        cursor = *previous.get(&cursor)?;
                    }
                    let origin = self.graph[start];
                    let mut walk = vec![origin];
                    walk.extend(back.into_iter().rev());
                    walk.push(origin);
                    return Some(walk);
                }
                if !previous.contains_key(&next) {
                    previous.insert(next, current);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Topological order of declaration positions, breaking ties by
    /// declaration position. `None` if the graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<usize>> {
        let mut in_degree: Vec<usize> = self
            .graph
            .node_indices()
            .map(|idx| self.graph.neighbors_directed(idx, Direction::Incoming).count())
            .collect();
        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(position, _)| Reverse(position))
            .collect();

        let mut order = Vec::with_capacity(in_degree.len());
        while let Some(Reverse(position)) = ready.pop() {
            order.push(position);
            for child in self
                .graph
                .neighbors_directed(NodeIndex::new(position), Direction::Outgoing)
            {
                let degree = &mut in_degree[child.index()];
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(child.index()));
                }
            }
        }

        (order.len() == in_degree.len()).then_some(order)
    }
}
