use serde::{Deserialize, Serialize};

/// A named presentation group of nodes. Carries no inference meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    /// Member node names, in the order they were declared in the layer.
    pub nodes: Vec<String>,
}

impl Layer {
    pub fn new(name: impl Into<String>, nodes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            nodes,
        }
    }
}
