//! Message envelope.

use serde_json::{json, Value};

/// Envelope posted on the message bus in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Destination channel name.
    pub to: String,
    /// Opaque correlation token chosen by the requester; forwarded unchanged.
    pub index: Value,
    /// Payload, tagged by its `type` field.
    pub data: Value,
}

impl Envelope {
    pub fn new(to: impl Into<String>, index: Value, data: Value) -> Self {
        Self {
            to: to.into(),
            index,
            data,
        }
    }

    /// Envelope as a bus payload.
    pub fn to_value(&self) -> Value {
        json!({
            "to": self.to,
            "index": self.index,
            "data": self.data,
        })
    }

    /// Destination of a raw bus payload, if it looks like an envelope.
    pub fn peek_to(value: &Value) -> Option<&str> {
        value.get("to").and_then(Value::as_str)
    }

    /// Split a raw bus payload into an envelope.
    ///
    /// Missing `index` or `data` fields become `null`. Returns `None` when the
    /// payload is not an object with a string `to`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let to = Self::peek_to(value)?;
        Some(Self {
            to: to.to_string(),
            index: value.get("index").cloned().unwrap_or(Value::Null),
            data: value.get("data").cloned().unwrap_or(Value::Null),
        })
    }
}

/// Whether a bus payload counts as present.
///
/// Mirrors the page's truthiness rule: `null`, `false`, `0` and `""` are
/// treated as no payload at all.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
