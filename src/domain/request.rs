use crate::domain::errors::RequestError;
use serde::Serialize;
use serde_json::Value;
use std::{fmt, str::FromStr};

// HTTP verbs the request helper knows how to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = RequestError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(RequestError::InvalidVerb(token.to_string())),
        }
    }
}

/// Inputs for a single request. Built per call and consumed when it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub verb: Verb,
    pub base_address: String,
    pub endpoint: Option<String>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(verb: Verb, base_address: impl Into<String>) -> Self {
        Self {
            verb,
            base_address: base_address.into(),
            endpoint: None,
            body: None,
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach any serializable value as the JSON body.
    pub fn with_json<T: Serialize>(self, body: &T) -> Result<Self, RequestError> {
        let value = serde_json::to_value(body).map_err(RequestError::InvalidBody)?;
        Ok(self.body(value))
    }

    /// Full target URL: `base_address`, plus `/endpoint` when one is set.
    pub fn url(&self) -> String {
        compose_url(&self.base_address, self.endpoint.as_deref())
    }

    /// JSON text sent on the wire; empty when there is no body.
    ///
    /// Falsy bodies (`null`, `false`, `0`, `""`) count as no body.
    pub fn payload(&self) -> String {
        match &self.body {
            Some(body) if !is_falsy(body) => body.to_string(),
            _ => String::new(),
        }
    }
}

fn is_falsy(body: &Value) -> bool {
    match body {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

// An empty endpoint counts as absent so no trailing slash is produced.
pub fn compose_url(base_address: &str, endpoint: Option<&str>) -> String {
    match endpoint {
        Some(endpoint) if !endpoint.is_empty() => format!("{base_address}/{endpoint}"),
        _ => base_address.to_string(),
    }
}
