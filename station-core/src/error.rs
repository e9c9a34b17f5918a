//! Error types for the mixing station.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes reported alongside station errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Audit log could not be opened or written (E100)
    StorageUnavailable = 100,
    /// Unrecognized input command (E200)
    InvalidCommand = 200,
}

/// Main error type for the station.
#[derive(Debug, Error)]
pub enum StationError {
    #[error("Audit log unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid command: '{input}'")]
    InvalidCommand { input: String },
}

impl StationError {
    /// Wrap an IO failure on the audit log.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StationError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            StationError::StorageUnavailable { .. } => ErrorCode::StorageUnavailable,
            StationError::InvalidCommand { .. } => ErrorCode::InvalidCommand,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for station operations.
pub type Result<T> = std::result::Result<T, StationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_code() {
        let err = StationError::storage(
            "missing/log.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);
        assert_eq!(err.code_value(), 100);
        assert!(err.to_string().contains("missing/log.txt"));
    }

    #[test]
    fn test_invalid_command_message() {
        let err = StationError::InvalidCommand {
            input: "jump".to_string(),
        };
        assert_eq!(err.code_value(), 200);
        assert_eq!(err.to_string(), "Invalid command: 'jump'");
    }
}
