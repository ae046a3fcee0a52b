//! The per-room state table.

use crate::alias;
use crate::error::StateError;
use crate::observers::{NoopObserver, StateChange, StateObserver};
use crate::types::{RawStateEvent, StateEvent, TYPING};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::normalize::normalize_event;

/// State key used for the single typing-notification slot.
pub const DEFAULT_TYPING_STATE_KEY: &str = "typing";

/// State table configuration.
#[derive(Clone, Debug)]
pub struct StateTableConfig {
    /// Synthetic state key every `m.typing` event is stored under.
    pub typing_state_key: String,

    /// Whether rejected updates emit a warning.
    pub log_rejections: bool,
}

impl Default for StateTableConfig {
    fn default() -> Self {
        Self {
            typing_state_key: DEFAULT_TYPING_STATE_KEY.to_string(),
            log_rejections: true,
        }
    }
}

/// What an update did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The event was stored. `replaced` is true if it overwrote a value.
    Applied { replaced: bool },

    /// The event was missing a required field; nothing changed.
    Rejected(StateError),
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, UpdateOutcome::Applied { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, UpdateOutcome::Rejected(_))
    }

    /// The rejection reason, if the update was rejected.
    pub fn error(&self) -> Option<&StateError> {
        match self {
            UpdateOutcome::Rejected(err) => Some(err),
            UpdateOutcome::Applied { .. } => None,
        }
    }
}

/// Latest state event for every (type, state key) pair of one room.
///
/// Event type maps to an inner map from state key to event. Each pair holds
/// at most one event: the last one applied.
#[derive(Clone, Debug, Default)]
pub struct StateTable {
    config: StateTableConfig,
    events: HashMap<String, HashMap<String, StateEvent>>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with custom configuration.
    pub fn with_config(config: StateTableConfig) -> Self {
        Self {
            config,
            events: HashMap::new(),
        }
    }

    pub fn config(&self) -> &StateTableConfig {
        &self.config
    }

    /// Release every stored event and the table itself.
    ///
    /// Returns the number of events released.
    pub fn destroy(self) -> usize {
        let released = self.len();
        debug!(types = self.events.len(), released, "destroying state table");
        released
    }

    /// Release every stored event, keeping the table usable.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Current event for `(event_type, state_key)`.
    ///
    /// Missing types are not created by the lookup.
    pub fn get_event(&self, event_type: &str, state_key: &str) -> Option<&StateEvent> {
        self.events.get(event_type)?.get(state_key)
    }

    /// All current events of one type, keyed by state key.
    pub fn events_of_type(&self, event_type: &str) -> Option<&HashMap<String, StateEvent>> {
        self.events.get(event_type)
    }

    /// Every stored `(type, state key, event)`, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &StateEvent)> + '_ {
        self.events.iter().flat_map(|(event_type, by_key)| {
            by_key
                .iter()
                .map(move |(key, event)| (event_type.as_str(), key.as_str(), event))
        })
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of event types seen.
    pub fn type_count(&self) -> usize {
        self.events.len()
    }

    /// Apply an inbound event, showing the transition to `observer` first.
    ///
    /// Events missing `type`, `state_key`, `sender` or `content` are
    /// rejected: a warning is logged, the table is untouched and the
    /// observer is not called.
    pub fn update<O>(&mut self, raw_event: &Value, observer: &mut O) -> UpdateOutcome
    where
        O: StateObserver + ?Sized,
    {
        match RawStateEvent::from_value(raw_event) {
            Ok(raw) => self.update_raw(raw, observer),
            Err(err) => self.reject(None, err),
        }
    }

    /// Apply an inbound event with nobody watching.
    pub fn apply(&mut self, raw_event: &Value) -> UpdateOutcome {
        self.update(raw_event, &mut NoopObserver)
    }

    /// Apply an already extracted envelope.
    pub fn update_raw<O>(&mut self, raw: RawStateEvent, observer: &mut O) -> UpdateOutcome
    where
        O: StateObserver + ?Sized,
    {
        let event_type = raw.event_type.clone();
        match normalize_event(raw, &self.config.typing_state_key) {
            Ok((state_key, event)) => self.commit(state_key, event, observer),
            Err(err) => self.reject(event_type.as_deref(), err),
        }
    }

    fn commit<O>(&mut self, state_key: String, event: StateEvent, observer: &mut O) -> UpdateOutcome
    where
        O: StateObserver + ?Sized,
    {
        let by_key = self
            .events
            .entry(event.event_type().to_owned())
            .or_default();

        observer.on_state_change(&StateChange {
            event_type: event.event_type(),
            state_key: &state_key,
            old: by_key.get(&state_key),
            new: &event,
        });

        debug!(
            event_type = %event.event_type(),
            state_key = %state_key,
            "committing state event"
        );

        let replaced = by_key.insert(state_key, event).is_some();
        UpdateOutcome::Applied { replaced }
    }

    fn reject(&self, event_type: Option<&str>, err: StateError) -> UpdateOutcome {
        if self.config.log_rejections {
            warn!(
                event_type = event_type.unwrap_or("<none>"),
                error = %err,
                "rejected state event"
            );
        }
        UpdateOutcome::Rejected(err)
    }

    /// Users currently typing, from the typing slot's `user_ids`.
    pub fn typing_users(&self) -> Vec<String> {
        self.get_event(TYPING, &self.config.typing_state_key)
            .and_then(|event| event.content_array("user_ids"))
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Display name: official name, else an alias.
    pub fn room_name(&self) -> Option<String> {
        alias::resolve_room_name(self, false)
    }

    /// An alias for the room, ignoring its official name.
    pub fn room_alias_only(&self) -> Option<String> {
        alias::resolve_room_name(self, true)
    }
}
