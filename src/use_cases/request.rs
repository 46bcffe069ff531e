use crate::domain::{Envelope, RawResponse, RequestDescriptor, Transport, Verb};
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;

// The only status treated as success; every other status takes the error path.
pub const SUCCESS_STATUS: u16 = 200;

/// Issues one request per call and turns its outcome into an [`Envelope`].
///
/// Nothing escapes as a Rust error once a request is built: transport
/// failures, non-200 statuses and unreadable bodies all come back as
/// envelopes through the same channel as success.
#[derive(Clone)]
pub struct RequestHelper {
    // Any transport implementation can be injected here.
    transport: Arc<dyn Transport>,
}

impl RequestHelper {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send the request and resolve to its envelope.
    #[tracing::instrument(
        name = "request",
        skip_all,
        fields(verb = %descriptor.verb, url = %descriptor.url())
    )]
    pub async fn send(&self, descriptor: RequestDescriptor) -> Envelope {
        let verb = descriptor.verb;
        let url = descriptor.url();
        let payload = descriptor.payload();

        match self.transport.execute(verb, &url, payload).await {
            Ok(response) => classify(verb, &url, response),
            Err(error) => {
                // No response arrived, so there is no body to salvage.
                tracing::warn!(error = %error, "{}", diagnostic_line(verb, &url));
                Envelope::fallback()
            }
        }
    }

    /// Callback form of [`RequestHelper::send`].
    ///
    /// Returns as soon as the request is spawned onto the current Tokio
    /// runtime. The callback, when given, runs exactly once with the outcome.
    /// Pass `None::<fn(Envelope)>` to fire and forget.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn request<F>(
        &self,
        verb: Verb,
        base_address: impl Into<String>,
        endpoint: Option<&str>,
        body: Option<Value>,
        callback: Option<F>,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Envelope) + Send + 'static,
    {
        let descriptor = RequestDescriptor {
            verb,
            base_address: base_address.into(),
            endpoint: endpoint.map(str::to_string),
            body,
        };
        self.dispatch(descriptor, callback)
    }

    /// Spawn an already built descriptor; see [`RequestHelper::request`].
    ///
    /// Must be called from within a Tokio runtime.
    pub fn dispatch<F>(&self, descriptor: RequestDescriptor, callback: Option<F>) -> JoinHandle<()>
    where
        F: FnOnce(Envelope) + Send + 'static,
    {
        let helper = self.clone();
        tokio::spawn(async move {
            let envelope = helper.send(descriptor).await;
            // The callback is optional on both paths; without one the outcome is dropped.
            if let Some(callback) = callback {
                callback(envelope);
            }
        })
    }
}

/// Line logged for every failed request.
pub fn diagnostic_line(verb: Verb, url: &str) -> String {
    format!("Error in request: {verb} {url}")
}

fn classify(verb: Verb, url: &str, response: RawResponse) -> Envelope {
    let status = response.status;

    if status == SUCCESS_STATUS {
        return match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => {
                tracing::debug!(status, "request completed");
                Envelope::response(body)
            }
            Err(error) => {
                tracing::warn!(status, error = %error, "{}", diagnostic_line(verb, url));
                Envelope::fallback()
            }
        };
    }

    tracing::warn!(status, "{}", diagnostic_line(verb, url));
    serde_json::from_str::<Value>(&response.body)
        .map(Envelope::error)
        .unwrap_or_else(|_| Envelope::fallback())
}
