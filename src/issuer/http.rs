//! HTTP request/response value types and the transport trait.

use super::TransportError;

/// An outbound HTTP request.
///
/// Immutable once issued: the issuer takes ownership and nothing
/// mutates the description afterwards. Uses standard `http` crate
/// types for method and headers.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new request with the given method and URL.
    ///
    /// Headers start empty and there is no body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends a header to the request.
    ///
    /// Appending (rather than inserting) preserves repeated header
    /// names, which HTTP allows.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response as reported by a transport.
///
/// The body is fully buffered; a probe deals in single small payloads,
/// not streams.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// The injected HTTP-capable transport collaborator.
///
/// The issuer never talks to the network directly; it delegates to an
/// implementation of this trait. That keeps the issuer testable with
/// mock transports and allows swapping HTTP libraries without touching
/// the pipeline.
///
/// # Contract
///
/// One call produces exactly one result: either a buffered response
/// (whatever its status code) or a [`TransportError`] when no response
/// was obtained at all.
///
/// # Example
///
/// ```ignore
/// use apiprobe::issuer::{HttpTransport, HttpRequest, HttpResponse, TransportError};
///
/// struct MockTransport {
///     response: HttpResponse,
/// }
///
/// impl HttpTransport for MockTransport {
///     async fn send(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpTransport: Send + Sync {
    /// Sends one HTTP request and waits for its result.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - the connection cannot be established ([`TransportError::Connection`])
    /// - the request times out ([`TransportError::Timeout`])
    /// - the request cannot be built ([`TransportError::RequestBuild`])
    fn send(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, TransportError>> + Send;
}
