use async_trait::async_trait;

use crate::domain::request::Verb;

// Status and raw text of a completed exchange, before it is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

// The request use case depends on this trait, not the concrete HTTP client.
// Implementations report every completed exchange as Ok, whatever its status;
// Err is reserved for exchanges that never produced a response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        verb: Verb,
        url: &str,
        payload: String,
    ) -> Result<RawResponse, TransportError>;
}
