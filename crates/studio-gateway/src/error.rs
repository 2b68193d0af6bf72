//! Error types for the gateway layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input rejected before any call reaches the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ValidationError {
    /// File extension is not one of the accepted formats
    #[error("Unsupported {kind} format. Supported formats: {supported}")]
    UnsupportedFormat {
        /// Asset family ("font", "image")
        kind: String,
        /// Comma separated list of accepted extensions
        supported: String,
    },

    /// File exceeds the size ceiling
    #[error("{kind} file too large. Maximum size is {limit_mb}MB.")]
    TooLarge {
        /// Asset family, capitalised for display
        kind: String,
        /// Size of the rejected file in bytes
        size: u64,
        /// Ceiling in whole megabytes
        limit_mb: u64,
    },

    /// File name is blank
    #[error("file name is empty")]
    EmptyName,
}

/// Errors from gateway operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum GatewayError {
    /// Request failed validation and was never sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Record or object does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// Object already exists at the target path
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Caller may not perform the operation
    #[error("Permission denied. {0}")]
    PermissionDenied(String),

    /// Object storage rejected the request
    #[error("Upload failed: {0}")]
    Storage(String),

    /// Metadata store rejected the request
    #[error("Database error: {0}")]
    Database(String),

    /// Auth lookup failed
    #[error("auth error: {0}")]
    Auth(String),
}

impl GatewayError {
    /// Create a storage error with message.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a database error with message.
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create a not-found error for the named thing.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Check if this failure happened before any backend call.
    pub fn is_validation(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }

    /// Check if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }

    /// Check if this is a permission error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, GatewayError::PermissionDenied(_))
    }
}
