//! Payload vocabulary.
//!
//! Inbound commands form a closed set (`load`, `ping`). Anything else is
//! unrecognized and gets no reply. The only outbound notification is
//! `open_url_in_player`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BridgeError, Result};

/// Inbound command (field name is `type` in JSON).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Install the player, merging `config` into the global configuration.
    /// Any JSON value is accepted; see [`spread_entries`].
    Load {
        #[serde(default)]
        config: Value,
    },
    /// Liveness check; answered with `{}`.
    Ping,
}

impl Command {
    /// Tags this side understands.
    pub const KINDS: &'static [&'static str] = &["load", "ping"];

    /// Parse the `data` of an inbound envelope.
    ///
    /// `Ok(None)` means the payload is not a recognized command. An error means
    /// the tag is known but the payload around it is malformed.
    pub fn parse(data: &Value) -> Result<Option<Self>> {
        let Some(kind) = data.get("type").and_then(Value::as_str) else {
            return Ok(None);
        };
        if !Self::KINDS.contains(&kind) {
            return Ok(None);
        }
        serde_json::from_value(data.clone())
            .map(Some)
            .map_err(|e| BridgeError::Malformed(format!("{kind} payload: {e}")))
    }
}

/// Outbound notification, page -> content script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notification {
    /// The player asked to open `url` in the extension's own player.
    OpenUrlInPlayer { url: String },
}

/// Own enumerable entries of `value`, as object spread (`{ ...value }`) sees
/// them on the page.
///
/// Objects are taken as is. Strings and arrays contribute one entry per
/// element, keyed by index. `null`, booleans and numbers contribute nothing.
/// String indices count chars, not UTF-16 code units, so text outside the
/// basic multilingual plane is keyed differently than on the page.
pub fn spread_entries(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.clone()))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    }
}

/// Empty success reply.
pub fn ack() -> Value {
    Value::Object(Map::new())
}
