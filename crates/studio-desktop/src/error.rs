//! Error types for the desktop core.

use studio_gateway::GatewayError;
use thiserror::Error;

use crate::requests::RequestId;
use crate::window::WindowId;

/// Errors from desktop operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DesktopError {
    /// Configuration document could not be parsed
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Window id is not open
    #[error("window {0} is not open")]
    WindowNotFound(WindowId),

    /// Icon label or symbol is blank
    #[error("icon label and symbol must not be blank")]
    InvalidIcon,

    /// Icon id does not exist
    #[error("icon {0} not found")]
    IconNotFound(String),

    /// Completion for a request that was never issued (or already completed)
    #[error("unknown request {0}")]
    UnknownRequest(RequestId),

    /// Action needs an administrator
    #[error("Admin access required")]
    AdminRequired,

    /// Command or event payload could not be decoded
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Browser-local storage failed
    #[error("local storage error: {0}")]
    LocalStorage(String),

    /// Gateway call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl DesktopError {
    /// Create an invalid payload error from any displayable cause.
    pub fn payload(err: impl std::fmt::Display) -> Self {
        Self::InvalidPayload(err.to_string())
    }

    /// Check if this is a missing-window error.
    pub fn is_window_not_found(&self) -> bool {
        matches!(self, DesktopError::WindowNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DesktopError::WindowNotFound(3).to_string(), "window 3 is not open");
        assert_eq!(DesktopError::AdminRequired.to_string(), "Admin access required");
        assert!(DesktopError::WindowNotFound(1).is_window_not_found());
    }

    #[test]
    fn test_gateway_errors_pass_through() {
        let err: DesktopError = GatewayError::storage("bucket offline").into();
        assert_eq!(err.to_string(), "Upload failed: bucket offline");
    }
}
