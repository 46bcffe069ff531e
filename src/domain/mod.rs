// Domain layer: request inputs, delivered envelopes, and the transport port.

pub mod envelope;
pub mod errors;
pub mod ports;
pub mod request;

pub use envelope::Envelope;
pub use errors::RequestError;
pub use ports::{RawResponse, Transport, TransportError};
pub use request::{RequestDescriptor, Verb, compose_url};
