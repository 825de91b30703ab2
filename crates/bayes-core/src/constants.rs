/// CPT key used by nodes without parents.
pub const ROOT_KEY: &str = "root";

/// Separator between parent values in a CPT key.
pub const KEY_SEPARATOR: &str = ",";

/// Network name reported when the document does not carry one.
pub const UNKNOWN_NETWORK_NAME: &str = "unknown";
