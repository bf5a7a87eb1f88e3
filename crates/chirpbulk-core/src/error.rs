//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Transport/RPC Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to connect to {address}: {message}")]
    Connection { address: String, message: String },

    #[error("API token cannot be sent as request metadata: {reason}")]
    InvalidCredential { reason: String },

    #[error("{operation} failed: {message}")]
    Rpc { operation: String, message: String },

    #[error("Not connected to the server")]
    NotConnected,

    // ─────────────────────────────────────────────────────────────
    // Import Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    #[error("Failed to create device {dev_eui}: {message}")]
    RowCreation { dev_eui: String, message: String },

    #[error("Import cannot start: {message}")]
    IncompleteSelection { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn connection(address: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connection {
            address: address.into(),
            message: message.into(),
        }
    }

    pub fn invalid_credential(reason: impl Into<String>) -> Self {
        Self::InvalidCredential {
            reason: reason.into(),
        }
    }

    pub fn rpc(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rpc {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn row_creation(dev_eui: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RowCreation {
            dev_eui: dev_eui.into(),
            message: message.into(),
        }
    }

    pub fn incomplete_selection(message: impl Into<String>) -> Self {
        Self::IncompleteSelection {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_mentions_address() {
        let err = Error::connection("localhost:8081", "connection refused");
        assert_eq!(
            err.to_string(),
            "Failed to connect to localhost:8081: connection refused"
        );
    }

    #[test]
    fn test_rpc_error_display() {
        let err = Error::rpc("List tenants", "status: Unauthenticated");
        assert_eq!(err.to_string(), "List tenants failed: status: Unauthenticated");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_file_read_error_names_path() {
        let err = Error::file_read("/tmp/devices.csv", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "Failed to read /tmp/devices.csv: No such file or directory"
        );
    }

    #[test]
    fn test_row_creation_names_device() {
        let err = Error::row_creation("04ABEF0123456789", "already exists");
        assert_eq!(
            err.to_string(),
            "Failed to create device 04ABEF0123456789: already exists"
        );
    }

    #[test]
    fn test_context_keeps_error() {
        let result: Result<()> = Err(Error::NotConnected);
        let err = result.context("Loading tenants").unwrap_err();
        assert!(matches!(err, Error::NotConnected));
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::invalid_credential("test");
        let _ = Error::incomplete_selection("test");
    }
}
