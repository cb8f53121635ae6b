//! Outcome and failure types flowing through the pipeline.

use thiserror::Error;

use crate::issuer::{HttpResponse, TransportError};

/// Result of one request attempt.
///
/// Exactly one outcome exists per issued request. Pipeline stages map
/// outcomes to outcomes; consumers only ever observe the value that
/// leaves the last stage.
pub type Outcome = Result<HttpResponse, Failure>;

/// A failed request attempt.
///
/// The structured form (category, status, message) is preserved all the
/// way to the consumer; the human-readable string is derived from it via
/// `Display` only at the point of presentation.
#[derive(Debug, Error)]
pub enum Failure {
    /// Raw transport-level failure, not yet normalized.
    ///
    /// Produced by the issuer when the transport reports an error;
    /// the [`ErrorNormalizer`](super::ErrorNormalizer) rewrites it
    /// into [`Failure::Client`].
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Failure on the local side, before any remote endpoint responded.
    #[error("Client Error: {message}")]
    Client {
        /// Human-readable description of the local failure
        message: String,
    },

    /// Non-success status reported by the remote endpoint.
    ///
    /// The only variant carrying a status code: a status exists exactly
    /// when a server answered.
    #[error("Server Error Code: {}, Message: {message}", .status.as_u16())]
    Server {
        /// Status code reported by the endpoint
        status: http::StatusCode,
        /// Detail from the response body, or the status reason phrase
        message: String,
    },
}

impl Failure {
    /// Returns the status code, present only for server-reported failures.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport(_) | Self::Client { .. } => None,
        }
    }

    /// Returns true once the failure has passed through the normalizer.
    #[must_use]
    pub const fn is_normalized(&self) -> bool {
        !matches!(self, Self::Transport(_))
    }
}
