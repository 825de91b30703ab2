//! Serde shape of a network definition document.
//!
//! Keys follow the authoring tool (`nume_retea`, `straturi`, `nume`,
//! `parinti`, `valori`, `cpt`); English names are accepted as aliases.

use std::collections::HashSet;
use std::fmt;

use bayes_core::models::Cpt;
use bayes_core::Node;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// The whole document.
#[derive(Debug, Deserialize)]
pub struct NetworkDefinition {
    /// Display name.
    #[serde(rename = "nume_retea", alias = "name", default)]
    pub name: Option<String>,
    /// Layers in document order.
    #[serde(
        rename = "straturi",
        alias = "layers",
        default,
        deserialize_with = "ordered_layers"
    )]
    pub layers: Vec<LayerDefinition>,
}

#[derive(Debug)]
pub struct LayerDefinition {
    pub name: String,
    pub nodes: Vec<NodeDefinition>,
}

#[derive(Debug, Deserialize)]
pub struct NodeDefinition {
    #[serde(rename = "nume", alias = "name")]
    pub name: String,
    #[serde(rename = "parinti", alias = "parents")]
    pub parents: Vec<String>,
    #[serde(rename = "valori", alias = "values")]
    pub values: Vec<String>,
    /// Rows in document order.
    pub cpt: Cpt,
}

impl NodeDefinition {
    pub fn into_node(self) -> Node {
        Node {
            name: self.name,
            parents: self.parents,
            values: self.values,
            cpt: self.cpt,
        }
    }
}

/// JSON objects are unordered in general, but layer order is meaningful
/// here, so read the map entry by entry instead of into a `HashMap`.
fn ordered_layers<'de, D>(deserializer: D) -> Result<Vec<LayerDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LayersVisitor;

    impl<'de> Visitor<'de> for LayersVisitor {
        type Value = Vec<LayerDefinition>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map from layer name to a list of node definitions")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut layers = Vec::with_capacity(map.size_hint().unwrap_or(0));
            let mut seen = HashSet::new();
            while let Some((name, nodes)) = map.next_entry::<String, Vec<NodeDefinition>>()? {
                if !seen.insert(name.clone()) {
                    return Err(de::Error::custom(format!("duplicate layer '{name}'")));
                }
                layers.push(LayerDefinition { name, nodes });
            }
            Ok(layers)
        }
    }

    deserializer.deserialize_map(LayersVisitor)
}
