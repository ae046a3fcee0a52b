//! Envelope normalization and validation.

use crate::error::{Field, Result, StateError};
use crate::types::{RawStateEvent, StateEvent, TYPING};
use serde_json::Value;

/// Turn a raw envelope into the state key and event to store.
///
/// Typing notifications are folded into a single slot: the state key is
/// forced to `typing_state_key` and the sender to empty, whatever the event
/// carried. For every other event an empty sender counts as missing; an
/// empty type or state key is valid.
pub fn normalize_event(raw: RawStateEvent, typing_state_key: &str) -> Result<(String, StateEvent)> {
    let RawStateEvent {
        event_type,
        mut state_key,
        mut sender,
        content,
    } = raw;

    let event_type = event_type.ok_or(StateError::MissingField(Field::Type))?;

    if event_type == TYPING {
        state_key = Some(typing_state_key.to_owned());
        sender = Some(String::new());
    } else {
        sender = sender.filter(|s| !s.is_empty());
    }

    let state_key = state_key.ok_or(StateError::MissingField(Field::StateKey))?;
    let sender = sender.ok_or(StateError::MissingField(Field::Sender))?;
    let content = content.ok_or(StateError::MissingField(Field::Content))?;

    Ok((state_key, StateEvent::new(event_type, sender, Value::Object(content))))
}
