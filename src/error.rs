//! Error types for the flatmatter library
//!
//! Parsing never fails: malformed front matter degrades to "no metadata".
//! The errors here come from rendering without a document, required-key
//! checks, and the file I/O layer.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum FlatMatterError {
    /// Generate was called without a document
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A required metadata key is not present
    #[error("missing required metadata: {key}")]
    MissingMetadata { key: String },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found or invalid path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Invalid file format: {path} (expected a regular file)")]
    InvalidFileFormat { path: PathBuf },

    /// Permission errors
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Backup operation errors
    #[error("Backup error: {reason}")]
    BackupError { reason: String },

    /// Generic validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Multiple errors (for batch operations)
    #[error("{} errors occurred", .errors.len())]
    Multiple { errors: Vec<FlatMatterError> },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FlatMatterError>;

impl FlatMatterError {
    /// Create a new invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a new missing metadata error
    pub fn missing_metadata(key: impl Into<String>) -> Self {
        Self::MissingMetadata { key: key.into() }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new invalid file format error
    pub fn invalid_file_format(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFileFormat { path: path.into() }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Create a new backup error
    pub fn backup_error(reason: impl Into<String>) -> Self {
        Self::BackupError {
            reason: reason.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a multiple errors wrapper
    pub fn multiple(errors: Vec<FlatMatterError>) -> Self {
        Self::Multiple { errors }
    }

    /// The missing key, if this is a [`FlatMatterError::MissingMetadata`]
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Self::MissingMetadata { key } => Some(key),
            _ => None,
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(io_err) => !matches!(
                io_err.kind(),
                std::io::ErrorKind::NotFound
                    | std::io::ErrorKind::PermissionDenied
                    | std::io::ErrorKind::AlreadyExists
            ),
            Self::FileNotFound { .. } | Self::PermissionDenied { .. } => false,
            Self::InvalidArgument { .. }
            | Self::MissingMetadata { .. }
            | Self::InvalidFileFormat { .. }
            | Self::BackupError { .. }
            | Self::Validation { .. } => true,
            Self::Multiple { errors } => errors.iter().any(|e| e.is_recoverable()),
        }
    }

    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileNotFound { .. } | Self::PermissionDenied { .. } => ErrorSeverity::Critical,
            Self::Io(_) | Self::BackupError { .. } => ErrorSeverity::High,
            Self::InvalidArgument { .. } | Self::InvalidFileFormat { .. } => {
                ErrorSeverity::Medium
            }
            Self::MissingMetadata { .. } | Self::Validation { .. } => ErrorSeverity::Low,
            Self::Multiple { errors } => errors
                .iter()
                .map(|e| e.severity())
                .max()
                .unwrap_or(ErrorSeverity::Low),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
