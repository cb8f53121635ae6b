//! Tests for `RequestIssuer` and `Delivery`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{HttpRequest, HttpResponse, HttpTransport, RequestIssuer, TransportError};
use crate::pipeline::{ErrorNormalizer, Failure, Outcome, Pipeline};

/// Mock transport that returns a configurable sequence of results.
#[derive(Debug)]
struct MockTransport {
    results: std::sync::Mutex<Vec<Result<HttpResponse, TransportError>>>,
    requests: std::sync::Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockTransport {
    fn new(results: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self {
            results: std::sync::Mutex::new(results),
            requests: std::sync::Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn success(body: &[u8]) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            body.to_vec(),
        ))])
    }

    fn status(status: http::StatusCode, body: &[u8]) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.to_vec(),
        ))])
    }

    fn connection_error(message: &str) -> Self {
        Self::new(vec![Err(TransportError::Connection(
            message.to_string().into(),
        ))])
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.results.lock().unwrap().remove(0)
    }
}

impl HttpTransport for Arc<MockTransport> {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(req).await
    }
}

/// Transport whose requests never resolve, for cancellation tests.
#[derive(Debug, Clone, Copy)]
struct PendingTransport;

impl HttpTransport for PendingTransport {
    async fn send(&self, _req: HttpRequest) -> Result<HttpResponse, TransportError> {
        std::future::pending().await
    }
}

fn test_url() -> url::Url {
    url::Url::parse("https://api.example.com/data").unwrap()
}

/// Stage that counts how often it runs.
fn counting_stage(counter: Arc<AtomicUsize>) -> impl Fn(Outcome) -> Outcome + Send + Sync {
    move |outcome| {
        counter.fetch_add(1, Ordering::SeqCst);
        outcome
    }
}

mod construction {
    use super::*;

    #[test]
    fn new_registers_the_normalizer_exactly_once() {
        let issuer = RequestIssuer::new(MockTransport::success(b""));

        assert_eq!(issuer.stage_count(), 1);
    }

    #[test]
    fn with_pipeline_keeps_caller_stage_order() {
        let pipeline = Pipeline::new()
            .with_stage(ErrorNormalizer)
            .with_stage(|outcome: Outcome| outcome);
        let issuer = RequestIssuer::with_pipeline(MockTransport::success(b""), pipeline);

        assert_eq!(issuer.stage_count(), 2);
    }
}

mod issue {
    use super::*;

    #[tokio::test]
    async fn success_payload_reaches_the_caller_unchanged() {
        let issuer = RequestIssuer::new(MockTransport::success(b"payload"));

        let outcome = issuer.issue(HttpRequest::get(test_url())).await;

        let response = outcome.unwrap();
        assert_eq!(response.status, http::StatusCode::OK);
        assert_eq!(response.body, b"payload");
    }

    #[tokio::test]
    async fn request_description_is_forwarded_to_the_transport() {
        let transport = Arc::new(MockTransport::success(b""));
        let issuer = RequestIssuer::new(Arc::clone(&transport));
        let request = HttpRequest::new(http::Method::DELETE, test_url()).with_body(b"x".to_vec());

        let _ = issuer.issue(request).await;

        let captured = transport.captured_requests();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].method, http::Method::DELETE);
        assert_eq!(captured[0].url.as_str(), "https://api.example.com/data");
        assert_eq!(captured[0].body.as_deref(), Some(b"x".as_slice()));
    }

    #[tokio::test]
    async fn connection_failure_is_normalized_to_client_error() {
        let issuer = RequestIssuer::new(MockTransport::connection_error("foo"));

        let failure = issuer.issue(HttpRequest::get(test_url())).await.unwrap_err();

        assert_eq!(failure.to_string(), "Client Error: foo");
        assert!(failure.is_normalized());
    }

    #[tokio::test]
    async fn server_status_is_normalized_with_status_and_detail() {
        let issuer = RequestIssuer::new(MockTransport::status(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            b"boom",
        ));

        let failure = issuer.issue(HttpRequest::get(test_url())).await.unwrap_err();

        assert_eq!(failure.to_string(), "Server Error Code: 500, Message: boom");
        assert_eq!(
            failure.status(),
            Some(http::StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[tokio::test]
    async fn raw_failures_never_leak_past_the_pipeline() {
        let issuer = RequestIssuer::new(MockTransport::connection_error("nope"));

        let failure = issuer.issue(HttpRequest::get(test_url())).await.unwrap_err();

        assert!(!matches!(failure, Failure::Transport(_)));
    }

    #[tokio::test]
    async fn one_issue_makes_exactly_one_transport_call() {
        let transport = Arc::new(MockTransport::success(b""));
        let issuer = RequestIssuer::new(Arc::clone(&transport));

        let _ = issuer.issue(HttpRequest::get(test_url())).await;

        assert_eq!(transport.calls(), 1);
    }
}

mod end_to_end {
    use super::*;
    use crate::issuer::ReqwestTransport;

    // A host under the reserved "invalid" TLD never resolves. An
    // intercepting proxy may still answer with a status, in which case
    // there is no client-side failure to assert on.
    #[tokio::test]
    async fn unreachable_host_normalizes_with_client_error_prefix() {
        let issuer = RequestIssuer::new(ReqwestTransport::new());
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

        if let Err(failure) = issuer.issue(HttpRequest::get(url)).await {
            if failure.status().is_none() {
                assert!(failure.to_string().starts_with("Client Error: "));
            }
        }
    }
}

mod delivery {
    use super::*;

    #[tokio::test]
    async fn recv_yields_the_single_outcome() {
        let issuer = RequestIssuer::new(Arc::new(MockTransport::success(b"payload")));

        let delivery = issuer.subscribe(HttpRequest::get(test_url()));
        let outcome = delivery.recv().await;

        let response = outcome.expect("outcome delivered").unwrap();
        assert_eq!(response.body, b"payload");
    }

    #[tokio::test]
    async fn recv_yields_normalized_failures() {
        let issuer = RequestIssuer::new(Arc::new(MockTransport::status(
            http::StatusCode::NOT_FOUND,
            b"",
        )));

        let delivery = issuer.subscribe(HttpRequest::get(test_url()));
        let outcome = delivery.recv().await;

        let failure = outcome.expect("outcome delivered").unwrap_err();
        assert_eq!(
            failure.to_string(),
            "Server Error Code: 404, Message: Not Found"
        );
    }

    #[tokio::test]
    async fn no_stage_runs_while_the_transport_is_pending() {
        let counter = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .with_stage(ErrorNormalizer)
            .with_stage(counting_stage(Arc::clone(&counter)));
        let issuer = RequestIssuer::with_pipeline(PendingTransport, pipeline);

        let _delivery = issuer.subscribe(HttpRequest::get(test_url()));
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancel_before_resolution_delivers_nothing() {
        let counter = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .with_stage(ErrorNormalizer)
            .with_stage(counting_stage(Arc::clone(&counter)));
        let issuer = RequestIssuer::with_pipeline(PendingTransport, pipeline);

        let delivery = issuer.subscribe(HttpRequest::get(test_url()));
        tokio::time::sleep(Duration::from_millis(5)).await;
        delivery.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;

        // The normalizer (and every other stage) never fired.
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn dropping_the_handle_cancels_the_request() {
        let counter = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new()
            .with_stage(ErrorNormalizer)
            .with_stage(counting_stage(Arc::clone(&counter)));
        let issuer = RequestIssuer::with_pipeline(PendingTransport, pipeline);

        drop(issuer.subscribe(HttpRequest::get(test_url())));
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
