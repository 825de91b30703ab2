/// Caller logic errors, rejected before any enumeration starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("cannot query node '{node}' while it is also set as evidence")]
    EvidenceOnQueryNode { node: String },

    #[error("unknown node '{name}'")]
    UnknownNode { name: String },

    #[error("value '{value}' is not in the domain of node '{node}'")]
    UnknownValue { node: String, value: String },

    #[error("no network loaded")]
    NoNetworkLoaded,
}
