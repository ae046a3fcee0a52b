//! Core types for the state table.

use crate::error::{Result, StateError};
use serde::Serialize;
use serde_json::{Map, Value};

/// Event type of the room's official name.
pub const ROOM_NAME: &str = "m.room.name";

/// Event type of the room's canonical alias.
pub const ROOM_CANONICAL_ALIAS: &str = "m.room.canonical_alias";

/// Event type of per-server alias lists. The state key is the server domain.
pub const ROOM_ALIASES: &str = "m.room.aliases";

/// Event type of room membership. The state key is the member's user id.
pub const ROOM_MEMBER: &str = "m.room.member";

/// Ephemeral typing notification.
pub const TYPING: &str = "m.typing";

/// The current value of one (type, state key) slot.
///
/// Stored events are never mutated; an update installs a fresh value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateEvent {
    #[serde(rename = "type")]
    event_type: String,
    sender: String,
    content: Value,
}

impl StateEvent {
    pub fn new(event_type: impl Into<String>, sender: impl Into<String>, content: Value) -> Self {
        Self {
            event_type: event_type.into(),
            sender: sender.into(),
            content,
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Author of the event. Empty for synthetic entries.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    /// A string member of the content, if present and a string.
    pub fn content_str(&self, name: &str) -> Option<&str> {
        self.content.get(name).and_then(Value::as_str)
    }

    /// An array member of the content, if present and an array.
    pub fn content_array(&self, name: &str) -> Option<&[Value]> {
        self.content
            .get(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

/// Envelope fields pulled out of an inbound event, before validation.
///
/// A member with the wrong JSON type is treated as absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawStateEvent {
    pub event_type: Option<String>,
    pub state_key: Option<String>,
    pub sender: Option<String>,
    pub content: Option<Map<String, Value>>,
}

impl RawStateEvent {
    /// Extract the envelope from a JSON event object.
    pub fn from_value(event: &Value) -> Result<Self> {
        let obj = event.as_object().ok_or(StateError::NotAnObject)?;
        let string_member = |name: &str| obj.get(name).and_then(Value::as_str).map(str::to_owned);

        Ok(Self {
            event_type: string_member("type"),
            state_key: string_member("state_key"),
            sender: string_member("sender"),
            content: obj.get("content").and_then(Value::as_object).cloned(),
        })
    }

    /// Parse a JSON document and extract its envelope.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}
