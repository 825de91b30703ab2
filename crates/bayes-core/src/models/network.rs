use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::layer::Layer;
use super::node::Node;
use crate::errors::LoadError;

/// A validated, immutable Bayesian network.
///
/// `nodes` keeps declaration order. `evaluation_order` holds node positions
/// in the topological order used by inference; it equals declaration order
/// unless the loader sorted it.
#[derive(Debug, Clone, Serialize)]
pub struct Network {
    name: String,
    nodes: Vec<Node>,
    layers: Vec<Layer>,
    evaluation_order: Vec<usize>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Network {
    /// Assemble a network, checking the structural invariants:
    /// unique names, non-empty domains without repeated values, known and
    /// non-repeated parents.
    ///
    /// Parent ordering and CPT sums are checked elsewhere.
    pub fn new(
        name: impl Into<String>,
        nodes: Vec<Node>,
        layers: Vec<Layer>,
    ) -> Result<Self, LoadError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if index.insert(node.name.clone(), position).is_some() {
                return Err(LoadError::DuplicateNode {
                    name: node.name.clone(),
                });
            }
            if node.values.is_empty() {
                return Err(LoadError::EmptyDomain {
                    node: node.name.clone(),
                });
            }
            let mut values = HashSet::with_capacity(node.values.len());
            for value in &node.values {
                if !values.insert(value.as_str()) {
                    return Err(LoadError::DuplicateValue {
                        node: node.name.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        for node in &nodes {
            let mut seen = HashSet::with_capacity(node.parents.len());
            for parent in &node.parents {
                if !index.contains_key(parent) {
                    return Err(LoadError::UnknownParent {
                        node: node.name.clone(),
                        parent: parent.clone(),
                    });
                }
                if !seen.insert(parent.as_str()) {
                    return Err(LoadError::DuplicateParent {
                        node: node.name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }

        let evaluation_order = (0..nodes.len()).collect();
        Ok(Self {
            name: name.into(),
            nodes,
            layers,
            evaluation_order,
            index,
        })
    }

    /// Replace the evaluation order. `order` must be a permutation of node positions.
    pub fn with_evaluation_order(mut self, order: Vec<usize>) -> Result<Self, LoadError> {
        let mut seen = vec![false; self.nodes.len()];
        let is_permutation = order.len() == self.nodes.len()
            && order
                .iter()
                .all(|&i| i < seen.len() && !std::mem::replace(&mut seen[i], true));
        if !is_permutation {
            return Err(LoadError::Malformed {
                reason: format!(
                    "evaluation order {order:?} is not a permutation of {} nodes",
                    self.nodes.len()
                ),
            });
        }
        self.evaluation_order = order;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&i| &self.nodes[i])
    }

    pub fn node_at(&self, position: usize) -> Option<&Node> {
        self.nodes.get(position)
    }

    /// Declaration position of a node.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Node positions in topological order.
    pub fn evaluation_order(&self) -> &[usize] {
        &self.evaluation_order
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn parents_of(&self, name: &str) -> Option<&[String]> {
        self.node(name).map(|n| n.parents.as_slice())
    }

    /// Direct children of a node, in declaration order.
    pub fn children_of(&self, name: &str) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.parents.iter().any(|p| p == name))
            .map(|n| n.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
