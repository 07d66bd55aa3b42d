//! Error types for nodevm operations.
//!
//! This module defines [`NodevmError`], the error type returned by every
//! version-management operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Failures inside the activation pipeline carry the requested version
//! - Collaborator errors are flattened to a message at the pipeline boundary
//! - Use `anyhow::Error` (via `NodevmError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for nodevm operations.
#[derive(Debug, Error)]
pub enum NodevmError {
    /// The user's home directory could not be located.
    #[error("Could not determine home directory. Set NODEVM_DIR to choose a location.")]
    HomeDirNotFound,

    /// A version string was rejected before any work was done.
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: &'static str },

    /// A managed directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Managed directories could not be prepared while activating a version.
    #[error("Failed to prepare node version {version}: cannot create {path}: {source}")]
    Prepare {
        version: String,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The mirror answered with a non-success status.
    #[error("Node version {version} not found (HTTP {status} from {url})")]
    VersionNotFound {
        version: String,
        url: String,
        status: u16,
    },

    /// The archive could not be retrieved or written to the cache.
    #[error("Failed to download node version {version}: {message}")]
    Download { version: String, message: String },

    /// The cached archive could not be extracted.
    #[error("Failed to unarchive node version {version}: {message}")]
    Extract { version: String, message: String },

    /// The active-version symlink could not be replaced.
    #[error("Failed to link node version {version}: {source}")]
    Link {
        version: String,
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for nodevm operations.
pub type Result<T> = std::result::Result<T, NodevmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_version_displays_input_and_reason() {
        let err = NodevmError::InvalidVersion {
            input: "../18".into(),
            reason: "must not contain path separators",
        };
        let msg = err.to_string();
        assert!(msg.contains("../18"));
        assert!(msg.contains("path separators"));
    }

    #[test]
    fn version_not_found_displays_version_and_status() {
        let err = NodevmError::VersionNotFound {
            version: "99.0.0".into(),
            url: "https://nodejs.org/dist/v99.0.0/node-v99.0.0-linux-x64.tar.gz".into(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("99.0.0"));
        assert!(msg.contains("404"));
    }

    #[test]
    fn download_error_displays_version_and_message() {
        let err = NodevmError::Download {
            version: "18.16.0".into(),
            message: "connection reset".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to download node version 18.16.0: connection reset"
        );
    }

    #[test]
    fn extract_error_displays_version() {
        let err = NodevmError::Extract {
            version: "20.1.0".into(),
            message: "unexpected end of file".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to unarchive node version 20.1.0"));
        assert!(msg.contains("unexpected end of file"));
    }

    #[test]
    fn link_error_displays_version_and_cause() {
        let err = NodevmError::Link {
            version: "18.16.0".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("18.16.0"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn prepare_error_displays_version_and_path() {
        let err = NodevmError::Prepare {
            version: "18.16.0".into(),
            path: PathBuf::from("/nope/.nodevm/sources"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("18.16.0"));
        assert!(msg.contains("/nope/.nodevm/sources"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: NodevmError = io_err.into();
        assert!(matches!(err, NodevmError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(NodevmError::HomeDirNotFound)
        }
        assert!(returns_error().is_err());
    }
}
