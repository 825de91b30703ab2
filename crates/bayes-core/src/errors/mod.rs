mod load_error;
mod query_error;
mod validation_error;

pub use load_error::LoadError;
pub use query_error::QueryError;
pub use validation_error::ValidationError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum BayesError {
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl BayesError {
    /// Whether the error was raised while loading a network (parse or CPT check).
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load(_) | Self::Validation(_))
    }
}

/// Convenience alias used throughout the workspace.
pub type BayesResult<T> = Result<T, BayesError>;
