mod network_source;

pub use network_source::{FileSource, NetworkSource, StrSource};
