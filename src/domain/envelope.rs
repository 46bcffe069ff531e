use serde::Serialize;
use serde_json::{Map, Value};

// Field the helper uses to flag failures inside an envelope.
pub const ERROR_FIELD: &str = "error";
// Value of the error field when a failed response had no usable JSON body.
pub const FALLBACK_ERROR: &str = "error";

/// The single value delivered for a request.
///
/// Serializes as the bare JSON it wraps, so callers see exactly the object
/// the service returned (plus `error: null` on success).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Response(Value),
    Error(Value),
}

impl Envelope {
    // Success bodies that are objects get `error` forced to null; other JSON
    // shapes have nowhere to carry the field and pass through untouched.
    pub fn response(body: Value) -> Self {
        match body {
            Value::Object(mut map) => {
                map.insert(ERROR_FIELD.to_string(), Value::Null);
                Envelope::Response(Value::Object(map))
            }
            other => Envelope::Response(other),
        }
    }

    pub fn error(body: Value) -> Self {
        Envelope::Error(body)
    }

    pub fn fallback() -> Self {
        let mut map = Map::new();
        map.insert(ERROR_FIELD.to_string(), Value::from(FALLBACK_ERROR));
        Envelope::Error(Value::Object(map))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error(_))
    }

    pub fn value(&self) -> &Value {
        match self {
            Envelope::Response(value) | Envelope::Error(value) => value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Envelope::Response(value) | Envelope::Error(value) => value,
        }
    }
}

impl From<Envelope> for Value {
    fn from(envelope: Envelope) -> Self {
        envelope.into_value()
    }
}
