use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{KEY_SEPARATOR, ROOT_KEY};

/// A probability over one node's own values, keyed by value.
pub type ValueDistribution = BTreeMap<String, f64>;

/// Conditional probability table: parent-assignment key → distribution.
///
/// Keys are [`ROOT_KEY`] for a node without parents, otherwise the parent
/// values in declared parent order joined with [`KEY_SEPARATOR`].
/// Rows keep insertion order, which is document order for loaded tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cpt {
    rows: Vec<(String, ValueDistribution)>,
    index: HashMap<String, usize>,
}

impl Cpt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style row insertion.
    pub fn with_row<K, V>(mut self, key: &str, distribution: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<f64>,
    {
        self.insert_row(
            key,
            distribution
                .into_iter()
                .map(|(value, p)| (value.into(), p.into()))
                .collect(),
        );
        self
    }

    /// Insert or replace the distribution for `key`. A replaced row keeps
    /// its original position.
    pub fn insert_row(&mut self, key: impl Into<String>, distribution: ValueDistribution) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.rows[i].1 = distribution,
            None => {
                self.index.insert(key.clone(), self.rows.len());
                self.rows.push((key, distribution));
            }
        }
    }

    /// The distribution stored under `key`, if any.
    pub fn row(&self, key: &str) -> Option<&ValueDistribution> {
        self.index.get(key).map(|&i| &self.rows[i].1)
    }

    /// The probability stored for `value` under `key`, if both exist.
    pub fn entry(&self, key: &str, value: &str) -> Option<f64> {
        self.row(key)?.get(value).copied()
    }

    /// All rows, in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &ValueDistribution)> {
        self.rows.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build the row key for a sequence of parent values.
    ///
    /// An empty sequence yields [`ROOT_KEY`].
    pub fn key_for<'v>(parent_values: impl IntoIterator<Item = &'v str>) -> String {
        let parts: Vec<&str> = parent_values.into_iter().collect();
        if parts.is_empty() {
            ROOT_KEY.to_string()
        } else {
            parts.join(KEY_SEPARATOR)
        }
    }
}

impl FromIterator<(String, ValueDistribution)> for Cpt {
    fn from_iter<I: IntoIterator<Item = (String, ValueDistribution)>>(iter: I) -> Self {
        let mut cpt = Cpt::new();
        for (key, distribution) in iter {
            cpt.insert_row(key, distribution);
        }
        cpt
    }
}

impl Serialize for Cpt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (key, distribution) in &self.rows {
            map.serialize_entry(key, distribution)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Cpt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CptVisitor;

        impl<'de> Visitor<'de> for CptVisitor {
            type Value = Cpt;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from parent-assignment key to a value distribution")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut cpt = Cpt::new();
                while let Some((key, distribution)) =
                    map.next_entry::<String, ValueDistribution>()?
                {
                    if cpt.index.contains_key(&key) {
                        return Err(de::Error::custom(format!("duplicate cpt row '{key}'")));
                    }
                    cpt.insert_row(key, distribution);
                }
                Ok(cpt)
            }
        }

        deserializer.deserialize_map(CptVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_for_empty_parents_is_root() {
        assert_eq!(Cpt::key_for(std::iter::empty()), "root");
    }

    #[test]
    fn key_for_preserves_parent_order() {
        assert_eq!(Cpt::key_for(["true", "false"]), "true,false");
        assert_eq!(Cpt::key_for(["false", "true"]), "false,true");
    }

    #[test]
    fn entry_misses_are_none() {
        let cpt = Cpt::new().with_row("root", [("yes", 0.4), ("no", 0.6)]);
        assert_eq!(cpt.entry("root", "yes"), Some(0.4));
        assert_eq!(cpt.entry("root", "maybe"), None);
        assert_eq!(cpt.entry("true", "yes"), None);
    }

    #[test]
    fn rows_keep_insertion_order() {
        let cpt = Cpt::new()
            .with_row("true", [("t", 1.0)])
            .with_row("false", [("t", 0.5), ("f", 0.5)])
            .with_row("true", [("t", 0.9), ("f", 0.1)]);
        let keys: Vec<&str> = cpt.rows().map(|(k, _)| k).collect();
        assert_eq!(keys, ["true", "false"]);
        assert_eq!(cpt.entry("true", "f"), Some(0.1));
    }
}
