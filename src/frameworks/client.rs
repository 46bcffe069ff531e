// Default wiring of the request helper over the reqwest transport.

use crate::domain::{Envelope, Verb};
use crate::interface_adapters::clients::HttpTransport;
use crate::use_cases::RequestHelper;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub fn default_helper() -> RequestHelper {
    RequestHelper::new(Arc::new(HttpTransport::new()))
}

/// Issue one request with a fresh reqwest-backed helper.
///
/// Must be called from within a Tokio runtime. See [`RequestHelper::request`].
pub fn request<F>(
    verb: Verb,
    base_address: impl Into<String>,
    endpoint: Option<&str>,
    body: Option<Value>,
    callback: Option<F>,
) -> JoinHandle<()>
where
    F: FnOnce(Envelope) + Send + 'static,
{
    default_helper().request(verb, base_address, endpoint, body, callback)
}
