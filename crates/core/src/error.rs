//! Unified error types for nimbus.
//!
//! Messages carry a code prefix so tool callers can match on them.

use std::path::PathBuf;

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the cache and history components.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., an empty search term).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// No fresh cache entry is available.
    #[error("CACHE_MISS: {0}")]
    CacheMiss(String),

    /// Reading or writing a backing file failed.
    #[error("STORAGE_ERROR: {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-file storage backend refused the operation.
    #[error("STORAGE_ERROR: {0}")]
    StorageUnavailable(String),

    /// A document could not be serialized.
    #[error("ENCODE_FAILED: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Storage { path: path.into(), source }
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::CacheMiss(msg) => (-32001, msg.clone()),
            Error::Storage { .. } | Error::StorageUnavailable(_) => (-32002, err.to_string()),
            Error::Encode(e) => (-32603, e.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
