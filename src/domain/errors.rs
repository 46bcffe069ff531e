use std::fmt;

// Errors raised while building a request, before anything reaches the wire.
#[derive(Debug)]
pub enum RequestError {
    InvalidVerb(String),
    InvalidBody(serde_json::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidVerb(token) => write!(f, "unsupported http verb: {token:?}"),
            RequestError::InvalidBody(err) => write!(f, "request body is not serializable: {err}"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::InvalidVerb(_) => None,
            RequestError::InvalidBody(err) => Some(err),
        }
    }
}
