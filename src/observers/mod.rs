//! Update notification for state tables.
//!
//! Every accepted update is shown to a [`StateObserver`] before it is
//! committed, with the previous value (if any) and the new one:
//! - closures taking `&StateChange` are observers
//! - [`ChangeLog`] records owned summaries
//! - [`ChangeFeed`] pushes summaries into a bounded channel for another thread
//!
//! # Example
//!
//! ```ignore
//! let (mut feed, handle) = ChangeFeed::new(DEFAULT_FEED_BUFFER);
//! table.update(&event, &mut feed);
//!
//! for change in handle.drain() {
//!     if change.event_type == "m.room.name" {
//!         refresh_title();
//!     }
//! }
//! ```

mod feed;
mod types;

pub use feed::{ChangeFeed, ChangeFeedHandle, DEFAULT_FEED_BUFFER};
pub use types::{ChangeLog, NoopObserver, StateChange, StateChangeSummary, StateObserver};
