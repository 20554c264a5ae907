//! Error types for wallet client operations.
//!
//! Only two kinds of failure originate here: argument-shape checks that run
//! before any request is sent, and transport failures. HTTP error statuses
//! returned by the wallet backend are *not* errors; they come back inside
//! [`ApiResponse`](crate::client::ApiResponse) untouched.

use std::path::{Path, PathBuf};

use thiserror::Error;

// ============================================================================
// Messages
// ============================================================================

/// Raised when a configuration record is not a JSON object.
pub const EXPECTED_CONFIG: &str = "argument should be a configuration object";

/// Raised when an argument must be a mapping (JSON object).
pub const EXPECTED_MAP: &str = "argument should be a mapping";

/// Raised when an argument must be a sequence (JSON array).
pub const EXPECTED_ARRAY: &str = "argument should be a sequence";

/// Raised when shorthand payments are not all single-entry mappings.
pub const EXPECTED_SINGLE_ENTRY_MAPS: &str =
    "argument should be a sequence of single-entry mappings";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum WalletError {
    /// An argument did not have the expected shape. The message is literal.
    #[error("{0}")]
    InvalidArgument(String),

    /// A local file (certificate, configuration) could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Transport-level failure: connection, TLS, timeout, client setup.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or explicit decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Mnemonic encoding failed.
    #[error("Mnemonic error: {0}")]
    Mnemonic(#[from] bip39::Error),
}

impl WalletError {
    /// Create an invalid argument error with the given message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an I/O error tagged with the file it concerns.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` for errors raised by local argument checks.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, WalletError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display_is_literal() {
        let err = WalletError::invalid_argument(EXPECTED_MAP);
        assert_eq!(err.to_string(), "argument should be a mapping");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_io_error_names_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = WalletError::io("/tmp/ca.crt", source);
        assert_eq!(err.to_string(), "failed to read /tmp/ca.crt: missing");
        assert!(!err.is_invalid_argument());

        match err {
            WalletError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("/tmp/ca.crt"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WalletError = parse.into();
        assert!(matches!(err, WalletError::Json(_)));
    }
}
