//! Failure taxonomy for the storefront client.
//!
//! [`GatewayFailure`] never leaves the request gateway: network failures and
//! authentication rejections are handled there. Everything the page logic can
//! observe is a [`ClientError`].

use thiserror::Error;

use crate::shell::NoticeLevel;
use crate::transport::TransportError;

/// Failures the gateway absorbs before returning `None` to its caller.
#[derive(Debug, Error)]
pub enum GatewayFailure {
    /// No response was received.
    #[error("network failure: {0}")]
    Network(#[from] TransportError),
    /// The server rejected the session credentials.
    #[error("authentication rejected by server")]
    AuthRejected,
}

/// Errors surfaced to page logic by the service layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The gateway already reacted (network notice or forced logout); do nothing further.
    #[error("request handled by gateway")]
    Handled,
    /// Non-2xx response carrying the server's message or the operation's fallback.
    #[error("{message}")]
    Application { status: u16, message: String },
    /// A client-side precondition failed before any request was made.
    #[error("{0}")]
    Validation(String),
    /// A successful response whose body did not match the expected model.
    #[error("unexpected response from server: {0}")]
    Decode(String),
    /// The request payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ClientError {
    /// How the error is shown to the user, if at all.
    #[must_use]
    pub fn notice_level(&self) -> Option<NoticeLevel> {
        match self {
            Self::Handled => None,
            Self::Validation(_) => Some(NoticeLevel::Warning),
            Self::Application { .. } | Self::Decode(_) | Self::Encode(_) => Some(NoticeLevel::Error),
        }
    }
}
