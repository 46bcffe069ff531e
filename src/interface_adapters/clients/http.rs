use crate::domain::{RawResponse, Transport, TransportError, Verb};
use crate::interface_adapters::protocol::JSON_MEDIA_TYPE;
use async_trait::async_trait;
use reqwest::{Client, Method, header};
use std::fmt;

#[derive(Debug)]
pub enum HttpTransportError {
    Send(reqwest::Error),
    Body(reqwest::Error),
}

impl fmt::Display for HttpTransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpTransportError::Send(err) => write!(f, "http transport error: {err}"),
            HttpTransportError::Body(err) => write!(f, "http response body error: {err}"),
        }
    }
}

impl std::error::Error for HttpTransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HttpTransportError::Send(err) | HttpTransportError::Body(err) => Some(err),
        }
    }
}

// Thin wrapper around reqwest that speaks JSON headers on every request.
// No timeout is set; a request lives as long as the connection does.
#[derive(Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

fn method(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        verb: Verb,
        url: &str,
        payload: String,
    ) -> Result<RawResponse, TransportError> {
        let res = self
            .http
            .request(method(verb), url)
            .header(header::CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(header::ACCEPT, JSON_MEDIA_TYPE)
            .body(payload)
            .send()
            .await
            .map_err(HttpTransportError::Send)?;

        // Non-success statuses are still completed exchanges; the caller classifies them.
        let status = res.status().as_u16();
        let body = res.text().await.map_err(HttpTransportError::Body)?;

        Ok(RawResponse { status, body })
    }
}
