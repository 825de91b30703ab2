//! The network data model: nodes, CPTs, layers, evidence, and results.

pub mod cpt;
pub mod distribution;
pub mod evidence;
pub mod layer;
pub mod network;
pub mod node;

pub use cpt::{Cpt, ValueDistribution};
pub use distribution::Distribution;
pub use evidence::Evidence;
pub use layer::Layer;
pub use network::Network;
pub use node::Node;
