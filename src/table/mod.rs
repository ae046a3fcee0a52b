//! Room state storage.
//!
//! Inbound events are reduced to their envelope, normalized (typing
//! notifications share one slot), validated, and then overwrite whatever
//! was stored for the same (type, state key).

mod normalize;
mod store;

pub use normalize::normalize_event;
pub use store::{StateTable, StateTableConfig, UpdateOutcome, DEFAULT_TYPING_STATE_KEY};
