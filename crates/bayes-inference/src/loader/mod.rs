//! Network loading: parse a definition, build the model, order it, and
//! validate its CPTs. Either every step succeeds or nothing is produced.

pub mod definition;

use bayes_core::config::ValidationConfig;
use bayes_core::constants::UNKNOWN_NETWORK_NAME;
use bayes_core::errors::{BayesResult, LoadError};
use bayes_core::traits::{FileSource, NetworkSource, StrSource};
use bayes_core::{Layer, Network};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::graph::ordering;
use crate::validation;

pub use definition::{LayerDefinition, NetworkDefinition, NodeDefinition};

/// Summary of a successful load, for display and logging.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub name: String,
    pub node_count: usize,
    pub layer_count: usize,
    /// blake3 hash of the source document.
    pub fingerprint: String,
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    /// Human-readable status line.
    pub fn message(&self) -> String {
        format!(
            "network '{}' loaded ({} nodes in {} layers)",
            self.name, self.node_count, self.layer_count
        )
    }
}

/// A validated network together with its load report.
#[derive(Debug, Clone)]
pub struct LoadedNetwork {
    pub network: Network,
    pub report: LoadReport,
}

/// Parse a definition document without building the model.
pub fn parse_definition(document: &str) -> Result<NetworkDefinition, LoadError> {
    serde_json::from_str(document).map_err(|e| LoadError::Malformed {
        reason: e.to_string(),
    })
}

/// Turn a parsed definition into a validated network.
///
/// Declaration order is layer order, then order within each layer.
pub fn build_network(definition: NetworkDefinition, config: &ValidationConfig) -> BayesResult<Network> {
    let name = definition
        .name
        .unwrap_or_else(|| UNKNOWN_NETWORK_NAME.to_string());

    let mut nodes = Vec::new();
    let mut layers = Vec::with_capacity(definition.layers.len());
    for layer in definition.layers {
        let members = layer.nodes.iter().map(|n| n.name.clone()).collect();
        layers.push(Layer::new(layer.name, members));
        nodes.extend(layer.nodes.into_iter().map(NodeDefinition::into_node));
    }

    let network = Network::new(name, nodes, layers)?;
    let order = ordering::evaluation_order(&network, config.ordering)?;
    let network = network.with_evaluation_order(order)?;
    validation::validate(&network, config.tolerance)?;
    Ok(network)
}

/// Load a network from any source.
pub fn load(source: &dyn NetworkSource, config: &ValidationConfig) -> BayesResult<LoadedNetwork> {
    let document = source.read_definition()?;
    load_document(&document, config)
}

/// Load a network from a file.
pub fn load_path(path: impl AsRef<std::path::Path>, config: &ValidationConfig) -> BayesResult<LoadedNetwork> {
    load(&FileSource::new(path), config)
}

/// Load a network from an in-memory document.
pub fn load_str(document: &str, config: &ValidationConfig) -> BayesResult<LoadedNetwork> {
    load(&StrSource::new("<inline>", document), config)
}

fn load_document(document: &str, config: &ValidationConfig) -> BayesResult<LoadedNetwork> {
    let definition = parse_definition(document)?;
    let network = build_network(definition, config)?;
    let report = LoadReport {
        name: network.name().to_string(),
        node_count: network.len(),
        layer_count: network.layers().len(),
        fingerprint: blake3::hash(document.as_bytes()).to_hex().to_string(),
        loaded_at: Utc::now(),
    };
    Ok(LoadedNetwork { network, report })
}
