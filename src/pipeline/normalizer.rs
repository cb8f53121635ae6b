//! The error-normalizing interceptor stage.

use crate::issuer::HttpResponse;

use super::{Failure, Outcome, Stage};

/// Fallback detail for status codes without a registered reason phrase.
const UNKNOWN_STATUS: &str = "unknown status";

/// Interceptor stage that classifies failed outcomes.
///
/// Sits between the transport and the consumer and rewrites every raw
/// failure into its normalized form:
///
/// - Success responses (2xx) are forwarded unchanged.
/// - Non-success responses become [`Failure::Server`], with the response
///   body (or the status reason phrase, when the body is empty) as the
///   message.
/// - Transport errors become [`Failure::Client`].
/// - Already-normalized failures are forwarded untouched, so applying
///   the stage twice never double-wraps a message.
///
/// The stage is stateless and cannot fail: every input outcome maps to
/// exactly one output outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorNormalizer;

impl Stage for ErrorNormalizer {
    fn apply(&self, outcome: Outcome) -> Outcome {
        match outcome {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => {
                tracing::debug!(status = %response.status, "server-side failure reported by remote endpoint");
                let failure = Failure::Server {
                    status: response.status,
                    message: server_detail(&response),
                };
                tracing::debug!("{failure}");
                Err(failure)
            }
            Err(Failure::Transport(e)) => {
                tracing::debug!("client-side transport failure");
                let failure = Failure::Client {
                    message: e.to_string(),
                };
                tracing::debug!("{failure}");
                Err(failure)
            }
            Err(failure) => Err(failure),
        }
    }
}

/// Extracts the failure detail from a non-success response.
///
/// The body wins when it carries printable text; otherwise the status's
/// canonical reason phrase stands in ("Not Found" for 404).
fn server_detail(response: &HttpResponse) -> String {
    response
        .body_text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map_or_else(
            || {
                response
                    .status
                    .canonical_reason()
                    .unwrap_or(UNKNOWN_STATUS)
                    .to_string()
            },
            ToString::to_string,
        )
}
