//! Error types for rangekv
//!
//! Provides a unified error type for all operations. Engine errors are
//! normalized into a small set of kinds while keeping the original cause
//! reachable through `source()`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for rangekv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("Failed to open database at {}: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Database handle is closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Key not found")]
    KeyNotFound,

    // -------------------------------------------------------------------------
    // Key Errors
    // -------------------------------------------------------------------------
    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("Key required: empty keys cannot be written")]
    KeyRequired,

    #[error("Key too large: {len} bytes (max {max})")]
    KeyTooLarge { len: usize, max: usize },

    // -------------------------------------------------------------------------
    // Engine Errors
    // -------------------------------------------------------------------------
    #[error("Transaction failed: {0}")]
    TransactionFailed(#[source] redb::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KvError {
    pub(crate) fn open_failed<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        KvError::OpenFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// True for both `CollectionNotFound` and `KeyNotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, KvError::CollectionNotFound(_) | KvError::KeyNotFound)
    }
}

// =============================================================================
// Engine Error Conversions
// =============================================================================

impl From<redb::Error> for KvError {
    fn from(e: redb::Error) -> Self {
        KvError::TransactionFailed(e)
    }
}

impl From<redb::StorageError> for KvError {
    fn from(e: redb::StorageError) -> Self {
        KvError::TransactionFailed(e.into())
    }
}

impl From<redb::TransactionError> for KvError {
    fn from(e: redb::TransactionError) -> Self {
        KvError::TransactionFailed(e.into())
    }
}

impl From<redb::CommitError> for KvError {
    fn from(e: redb::CommitError) -> Self {
        KvError::TransactionFailed(e.into())
    }
}

impl From<redb::TableError> for KvError {
    fn from(e: redb::TableError) -> Self {
        match e {
            redb::TableError::TableDoesNotExist(name) => KvError::CollectionNotFound(name),
            other => KvError::TransactionFailed(other.into()),
        }
    }
}

impl From<bincode::Error> for KvError {
    fn from(e: bincode::Error) -> Self {
        KvError::Serialization(e.to_string())
    }
}
