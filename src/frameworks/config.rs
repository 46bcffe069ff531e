use crate::domain::{RequestDescriptor, Verb};
use serde_json::Value;
use std::{env, fmt};

// Runtime configuration for the one-shot request binary.

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug)]
pub enum ConfigError {
    InvalidVerb(String),
    InvalidBody(serde_json::Error),
    MissingBaseUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVerb(token) => write!(f, "REQUEST_VERB is not a known verb: {token:?}"),
            ConfigError::InvalidBody(err) => write!(f, "REQUEST_BODY is not valid json: {err}"),
            ConfigError::MissingBaseUrl => write!(f, "REQUEST_BASE_URL is set but empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub verb: Verb,
    pub base_url: String,
    pub endpoint: Option<String>,
    pub body: Option<Value>,
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let verb = match lookup("REQUEST_VERB") {
            Some(token) => token
                .parse::<Verb>()
                .map_err(|_| ConfigError::InvalidVerb(token.clone()))?,
            None => Verb::Get,
        };

        let base_url = match lookup("REQUEST_BASE_URL") {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::MissingBaseUrl),
            Some(value) => value.trim().to_string(),
            None => DEFAULT_BASE_URL.to_string(),
        };

        // Empty values behave like unset ones.
        let endpoint = lookup("REQUEST_ENDPOINT")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let body = match lookup("REQUEST_BODY").filter(|value| !value.trim().is_empty()) {
            Some(text) => Some(serde_json::from_str(&text).map_err(ConfigError::InvalidBody)?),
            None => None,
        };

        Ok(Self {
            verb,
            base_url,
            endpoint,
            body,
        })
    }

    pub fn descriptor(&self) -> RequestDescriptor {
        RequestDescriptor {
            verb: self.verb,
            base_address: self.base_url.clone(),
            endpoint: self.endpoint.clone(),
            body: self.body.clone(),
        }
    }
}

pub fn log_format_json() -> bool {
    matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"))
}
