//! Observer trait and change types.

use crate::types::StateEvent;
use serde::Serialize;

/// A transition of one state slot, seen before it is committed.
///
/// `new` is not yet in the table when the observer runs; `old` is still
/// there and is released once the observer returns.
#[derive(Clone, Copy, Debug)]
pub struct StateChange<'a> {
    pub event_type: &'a str,
    pub state_key: &'a str,
    pub old: Option<&'a StateEvent>,
    pub new: &'a StateEvent,
}

impl StateChange<'_> {
    /// Whether this change replaces an existing value.
    pub fn is_replacement(&self) -> bool {
        self.old.is_some()
    }

    /// Copy the change into an owned summary.
    pub fn to_summary(&self) -> StateChangeSummary {
        StateChangeSummary {
            event_type: self.event_type.to_owned(),
            state_key: self.state_key.to_owned(),
            old: self.old.cloned(),
            new: self.new.clone(),
        }
    }
}

/// Owned copy of a [`StateChange`], for keeping or sending elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateChangeSummary {
    pub event_type: String,
    pub state_key: String,
    pub old: Option<StateEvent>,
    pub new: StateEvent,
}

/// Receives every accepted update of a state table.
///
/// Called synchronously from inside `update`. The table is mutably borrowed
/// for the whole call, so an observer cannot read or write it.
pub trait StateObserver {
    fn on_state_change(&mut self, change: &StateChange<'_>);
}

impl<F> StateObserver for F
where
    F: FnMut(&StateChange<'_>),
{
    fn on_state_change(&mut self, change: &StateChange<'_>) {
        self(change)
    }
}

/// Observer that ignores every change.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StateObserver for NoopObserver {
    fn on_state_change(&mut self, _change: &StateChange<'_>) {}
}

/// Observer that records every change it sees, in order.
#[derive(Clone, Debug, Default)]
pub struct ChangeLog {
    changes: Vec<StateChangeSummary>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> &[StateChangeSummary] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Take the recorded changes, leaving the log empty.
    pub fn take(&mut self) -> Vec<StateChangeSummary> {
        std::mem::take(&mut self.changes)
    }
}

impl StateObserver for ChangeLog {
    fn on_state_change(&mut self, change: &StateChange<'_>) {
        self.changes.push(change.to_summary());
    }
}
