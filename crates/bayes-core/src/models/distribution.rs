use serde::{Deserialize, Serialize};

/// Posterior over one node's values, in the node's domain order.
///
/// Entries sum to 1, or are all exactly 0 when the evidence has zero joint
/// probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub node: String,
    pub entries: Vec<(String, f64)>,
}

impl Distribution {
    pub fn new(node: impl Into<String>, entries: Vec<(String, f64)>) -> Self {
        Self {
            node: node.into(),
            entries,
        }
    }

    pub fn get(&self, value: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, p)| *p)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    /// No value has positive posterior probability.
    pub fn is_degenerate(&self) -> bool {
        self.entries.iter().all(|(_, p)| *p == 0.0)
    }

    /// The value with the highest posterior. First in domain order wins ties.
    pub fn most_likely(&self) -> Option<(&str, f64)> {
        if self.is_degenerate() {
            return None;
        }
        self.entries
            .iter()
            .fold(None, |best: Option<(&str, f64)>, (v, p)| match best {
                Some((_, bp)) if bp >= *p => best,
                _ => Some((v.as_str(), *p)),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(v, p)| (v.as_str(), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
