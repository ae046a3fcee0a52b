//! # Room State
//!
//! The current state of a chat room in a federated, event-sourced messaging
//! protocol, kept as the latest event per (event type, state key).
//!
//! ## Core Concepts
//!
//! - **State table**: event type → state key → latest [`StateEvent`]; the last
//!   update for a pair wins
//! - **Typing slot**: `m.typing` notifications all land in one synthetic entry
//! - **Observers**: every accepted update is shown to a [`StateObserver`] with
//!   the old and new values before it is committed
//! - **Name resolution**: room name, then canonical alias, then any published
//!   alias
//!
//! ## Example
//!
//! ```ignore
//! use room_state::{ChangeLog, StateTable};
//! use serde_json::json;
//!
//! let mut table = StateTable::new();
//! let mut log = ChangeLog::new();
//!
//! table.update(&json!({
//!     "type": "m.room.name",
//!     "state_key": "",
//!     "sender": "@alice:example.org",
//!     "content": {"name": "Demo Room"},
//! }), &mut log);
//!
//! assert_eq!(table.room_name().as_deref(), Some("Demo Room"));
//! ```

pub mod alias;
pub mod error;
pub mod observers;
pub mod table;
pub mod types;

// Re-exports
pub use alias::{resolve_room_name, room_alias};
pub use error::{Field, Result, StateError};
pub use observers::{
    ChangeFeed, ChangeFeedHandle, ChangeLog, NoopObserver, StateChange, StateChangeSummary,
    StateObserver, DEFAULT_FEED_BUFFER,
};
pub use table::{
    normalize_event, StateTable, StateTableConfig, UpdateOutcome, DEFAULT_TYPING_STATE_KEY,
};
pub use types::*;
