//! Sign-In Error Types
//!
//! Error hierarchy for Google sign-in operations.

use std::time::Duration;
use thiserror::Error;

/// Root error type for Google sign-in integration.
#[derive(Error, Debug)]
pub enum SignInError {
    /// The authorization capability is not present on the current platform
    /// or build. Raised before any network activity is attempted.
    #[error("{capability}.{operation} is not available on this platform")]
    Unavailable {
        capability: String,
        operation: String,
    },

    #[error("Authorization flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl SignInError {
    /// Get error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "SIGNIN_UNAVAILABLE",
            Self::Flow(_) => "SIGNIN_FLOW",
            Self::Network(_) => "SIGNIN_NETWORK",
            Self::Protocol(_) => "SIGNIN_PROTOCOL",
        }
    }

    /// Create an unavailable-capability error for an attempted operation.
    pub fn unavailable(capability: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::Unavailable {
            capability: capability.into(),
            operation: operation.into(),
        }
    }

    /// Check whether this error represents the user cancelling the flow.
    ///
    /// `FlowError::Cancelled` is the first-class signal. Collaborators that
    /// only report cancellation through message text are still recognized by
    /// a case-insensitive "user cancelled" probe on the rendered message.
    pub fn is_user_cancellation(&self) -> bool {
        if matches!(self, Self::Flow(FlowError::Cancelled)) {
            return true;
        }
        self.to_string().to_lowercase().contains("user cancelled")
    }
}

/// Error surfaced by the external authorization flow collaborator.
#[derive(Error, Debug)]
pub enum FlowError {
    /// The user dismissed the authorization prompt.
    #[error("User Cancelled the authorization flow")]
    Cancelled,

    /// The provider rejected the authorization request.
    #[error("{message}")]
    Authorization { message: String },

    /// The code-for-token exchange failed inside the collaborator.
    #[error("Token exchange failed: {message}")]
    Exchange { message: String },

    /// Token revocation failed inside the collaborator.
    #[error("Revocation failed: {message}")]
    Revocation { message: String },
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: Duration },
}

/// Response parsing error.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Unexpected HTTP status: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Response too large: {size} bytes")]
    ResponseTooLarge { size: usize },

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

/// Result type for sign-in operations.
pub type SignInResult<T> = Result<T, SignInError>;
