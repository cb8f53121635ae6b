//! Probe execution logic.
//!
//! This module is the presentation boundary: it issues the configured
//! request and logs either the delivered payload or the normalized
//! failure string.

use thiserror::Error;

use apiprobe::config::ValidatedConfig;
use apiprobe::issuer::{HttpRequest, HttpResponse, ReqwestTransport, RequestIssuer};
use apiprobe::pipeline::Failure;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for probe execution failures.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Failed to build the HTTP transport.
    #[error("Failed to initialize HTTP transport: {0}")]
    TransportInit(#[source] reqwest::Error),

    /// The probe request produced a normalized failure.
    #[error(transparent)]
    Failed(#[from] Failure),
}

/// Executes one probe against the configured endpoint.
///
/// This function:
/// 1. Builds the reqwest-backed transport with the configured timeout
/// 2. Constructs the issuer, registering the error normalizer once
/// 3. Issues the request and logs the outcome
///
/// # Errors
///
/// Returns an error if the transport cannot be built or the request
/// produced a normalized failure.
pub async fn execute(config: ValidatedConfig) -> Result<(), ProbeError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(ProbeError::TransportInit)?;
    let issuer = RequestIssuer::new(ReqwestTransport::from_client(client));

    let request = build_request(&config);
    tracing::info!("Probing {} {}", request.method, request.url);

    match issuer.issue(request).await {
        Ok(response) => {
            tracing::info!(status = %response.status, "Probe succeeded");
            tracing::info!("{}", render_payload(&response));
            Ok(())
        }
        Err(failure) => {
            tracing::error!("{failure}");
            Err(failure.into())
        }
    }
}

/// Builds the probe request from the validated configuration.
fn build_request(config: &ValidatedConfig) -> HttpRequest {
    let mut request = HttpRequest::new(config.method.clone(), config.url.clone());
    request.headers = config.headers.clone();
    request.body = config.body.clone().map(String::into_bytes);
    request
}

/// Renders a delivered payload for the diagnostic stream.
///
/// JSON bodies are pretty-printed; other text passes through verbatim;
/// binary bodies are summarized by length.
fn render_payload(response: &HttpResponse) -> String {
    response.body_text().map_or_else(
        || format!("<{} bytes of binary payload>", response.body.len()),
        |text| {
            serde_json::from_str::<serde_json::Value>(text)
                .ok()
                .and_then(|value| serde_json::to_string_pretty(&value).ok())
                .unwrap_or_else(|| text.to_string())
        },
    )
}
