use thiserror::Error;

/// Errors that can occur during roster cache operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The snapshot payload is absent, unreadable or not valid JSON.
    #[error("Cache miss: {0}")]
    Miss(String),
    #[error("Cache I/O failed: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
