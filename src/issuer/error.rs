//! Error types for the transport boundary.

use thiserror::Error;

/// Error type for transport-level failures.
///
/// Every variant describes a failure that occurred before any remote
/// endpoint produced a response. Non-success status codes are not
/// transport errors; they reach the pipeline as ordinary responses and
/// are classified there.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network-level failure reaching the endpoint.
    ///
    /// Covers DNS resolution failures, connection refused, and
    /// TLS handshake errors.
    #[error(transparent)]
    Connection(Box<dyn std::error::Error + Send + Sync>),

    /// The endpoint did not respond within the configured deadline.
    #[error("request timed out")]
    Timeout,

    /// The request could not be constructed.
    ///
    /// This indicates a configuration problem rather than a
    /// transient failure.
    #[error("malformed request: {0}")]
    RequestBuild(String),
}
