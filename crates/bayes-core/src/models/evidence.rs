use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Observed values for a single query: node name → value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evidence {
    observed: BTreeMap<String, String>,
}

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style observation.
    pub fn with(mut self, node: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(node, value);
        self
    }

    /// Record an observation, replacing any earlier value for the node.
    pub fn insert(&mut self, node: impl Into<String>, value: impl Into<String>) {
        self.observed.insert(node.into(), value.into());
    }

    pub fn get(&self, node: &str) -> Option<&str> {
        self.observed.get(node).map(String::as_str)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.observed.contains_key(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.observed.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Evidence {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            observed: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
