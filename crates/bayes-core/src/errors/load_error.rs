/// Errors raised while turning a network definition into a [`Network`](crate::Network).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read network definition {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed network definition: {reason}")]
    Malformed { reason: String },

    #[error("node '{name}' is declared more than once")]
    DuplicateNode { name: String },

    #[error("node '{node}' has no possible values")]
    EmptyDomain { node: String },

    #[error("node '{node}' lists value '{value}' more than once")]
    DuplicateValue { node: String, value: String },

    #[error("node '{node}' lists parent '{parent}' more than once")]
    DuplicateParent { node: String, parent: String },

    #[error("node '{node}' references unknown parent '{parent}'")]
    UnknownParent { node: String, parent: String },

    #[error("node '{node}' is declared before its parent '{parent}'")]
    ForwardReference { node: String, parent: String },

    #[error("cycle detected in network: {path}")]
    CycleDetected { path: String },
}
