//! Request issuer and single-shot outcome delivery.

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::pipeline::{ErrorNormalizer, Failure, Outcome, Pipeline};

use super::{HttpRequest, HttpTransport};

/// Issues one-shot HTTP requests through an interceptor pipeline.
///
/// Every request issued here produces exactly one [`Outcome`]: the raw
/// transport result is folded through the pipeline's stages in
/// registration order before the caller sees it.
///
/// # Type Parameters
///
/// - `T`: the HTTP transport implementation
///
/// # Example
///
/// ```no_run
/// use apiprobe::issuer::{HttpRequest, ReqwestTransport, RequestIssuer};
/// use url::Url;
///
/// # async fn example() {
/// let issuer = RequestIssuer::new(ReqwestTransport::new());
/// let url = Url::parse("https://api.example.com/data").unwrap();
/// match issuer.issue(HttpRequest::get(url)).await {
///     Ok(response) => println!("{}", response.status),
///     Err(failure) => eprintln!("{failure}"),
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct RequestIssuer<T> {
    transport: T,
    pipeline: Arc<Pipeline>,
}

impl<T> RequestIssuer<T> {
    /// Creates an issuer with the [`ErrorNormalizer`] registered as the
    /// only pipeline stage.
    ///
    /// Registration happens exactly once, at construction; every request
    /// issued afterwards flows through the normalizer.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_pipeline(transport, Pipeline::new().with_stage(ErrorNormalizer))
    }

    /// Creates an issuer with a caller-supplied pipeline.
    #[must_use]
    pub fn with_pipeline(transport: T, pipeline: Pipeline) -> Self {
        Self {
            transport,
            pipeline: Arc::new(pipeline),
        }
    }

    /// Returns the number of registered pipeline stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.pipeline.len()
    }
}

impl<T: HttpTransport> RequestIssuer<T> {
    /// Issues one request and returns its processed outcome.
    ///
    /// Dropping the returned future before it resolves cancels the
    /// request: no outcome is produced and no pipeline stage runs.
    pub async fn issue(&self, request: HttpRequest) -> Outcome {
        dispatch(&self.transport, &self.pipeline, request).await
    }
}

impl<T> RequestIssuer<T>
where
    T: HttpTransport + Clone + 'static,
{
    /// Issues a request on a background task and returns a handle for
    /// observing the single-shot outcome.
    ///
    /// The returned [`Delivery`] yields at most one outcome. Cancelling
    /// (or dropping) it before the transport resolves aborts the task,
    /// so nothing is delivered and no pipeline stage runs.
    #[must_use]
    pub fn subscribe(&self, request: HttpRequest) -> Delivery {
        let transport = self.transport.clone();
        let pipeline = Arc::clone(&self.pipeline);
        let (tx, rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            let outcome = dispatch(&transport, &pipeline, request).await;
            // The observer may already be gone; the outcome is then discarded.
            let _ = tx.send(outcome);
        });

        Delivery { rx, task }
    }
}

/// Sends the request and folds the raw result through the pipeline.
async fn dispatch<T: HttpTransport>(
    transport: &T,
    pipeline: &Pipeline,
    request: HttpRequest,
) -> Outcome {
    let raw = match transport.send(request).await {
        Ok(response) => Ok(response),
        Err(e) => Err(Failure::Transport(e)),
    };

    pipeline.apply(raw)
}

/// Observer handle for a single-shot request outcome.
///
/// Obtained from [`RequestIssuer::subscribe`]. Consuming the handle via
/// [`Delivery::recv`] yields the outcome once the transport resolves;
/// dropping it first aborts the in-flight request.
#[derive(Debug)]
pub struct Delivery {
    rx: oneshot::Receiver<Outcome>,
    task: JoinHandle<()>,
}

impl Delivery {
    /// Waits for the outcome.
    ///
    /// Returns `None` if the background task was aborted or panicked
    /// before an outcome could be delivered.
    pub async fn recv(mut self) -> Option<Outcome> {
        (&mut self.rx).await.ok()
    }

    /// Cancels the request.
    ///
    /// If the transport has not resolved yet, the in-flight request is
    /// aborted: no outcome is ever delivered and no pipeline stage runs.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Delivery {
    fn drop(&mut self) {
        self.task.abort();
    }
}
