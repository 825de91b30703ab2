use serde::{Deserialize, Serialize};

use super::cpt::Cpt;

/// A discrete random variable with its parents, domain, and CPT.
///
/// Nodes are built once at load time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique name within the network.
    pub name: String,
    /// Parent names in declared order. Empty for a root node.
    pub parents: Vec<String>,
    /// Possible values, in display order.
    pub values: Vec<String>,
    pub cpt: Cpt,
}

impl Node {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        parents: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = S>,
        cpt: Cpt,
    ) -> Self {
        Self {
            name: name.into(),
            parents: parents.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(Into::into).collect(),
            cpt,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}
