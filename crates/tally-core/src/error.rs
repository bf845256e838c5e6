//! Error types for Tally core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes. The core never retries and
//! never logs.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for Tally operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Positional ID outside `0..size`
    #[error("Not found: transaction {id} does not exist (ledger holds {size})")]
    NotFound { id: usize, size: usize },

    /// Ledger file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ledger file exists but is not valid ledger JSON
    #[error("Ledger file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Ledger could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Monetary text does not match the currency pattern
    #[error("Parse error: {0}")]
    Parse(String),

    /// Another process holds the ledger lock
    #[error("Ledger is locked by another process (lock file: {})", path.display())]
    Locked { path: PathBuf },

    /// Refused to overwrite an existing ledger
    #[error("Ledger already exists at {}", path.display())]
    AlreadyExists { path: PathBuf },

    /// Arithmetic on amounts left the representable range
    #[error("Amount out of range: {0}")]
    Overflow(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LedgerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the addressed transaction does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = LedgerError::NotFound { id: 4, size: 2 };
        assert_eq!(
            err.to_string(),
            "Not found: transaction 4 does not exist (ledger holds 2)"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = LedgerError::io(
            "/tmp/missing.trdb",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/missing.trdb"));
        assert!(err.source().is_some());
        assert!(!err.is_not_found());
    }
}
