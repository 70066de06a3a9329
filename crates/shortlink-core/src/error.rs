use thiserror::Error;

/// Errors returned by [`LinkStore`](crate::LinkStore) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("link not found: {0}")]
    NotFound(String),
    #[error("store is closed")]
    Closed,
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
}

/// Errors returned by [`CodeGenerator`](crate::CodeGenerator) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("input cannot be empty for code generation")]
    EmptyInput,
}
