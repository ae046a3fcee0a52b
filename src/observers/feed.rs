//! Channel-backed observer for handing changes to another thread.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::time::Duration;
use tracing::warn;

use super::types::{StateChange, StateChangeSummary, StateObserver};

/// Default number of buffered changes before new ones are dropped.
pub const DEFAULT_FEED_BUFFER: usize = 256;

/// Observer that forwards owned change summaries into a bounded channel.
///
/// Sending never blocks the table: when the buffer is full or the receiver
/// is gone, the change is dropped and counted.
pub struct ChangeFeed {
    sender: Sender<StateChangeSummary>,
    dropped: u64,
}

impl ChangeFeed {
    /// Create a feed and the handle that receives from it.
    pub fn new(buffer_size: usize) -> (Self, ChangeFeedHandle) {
        let (sender, receiver) = bounded(buffer_size);
        (Self { sender, dropped: 0 }, ChangeFeedHandle { receiver })
    }

    /// Number of changes dropped so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    fn try_send(&mut self, summary: StateChangeSummary) -> bool {
        match self.sender.try_send(summary) {
            Ok(()) => true,
            Err(TrySendError::Full(s)) | Err(TrySendError::Disconnected(s)) => {
                self.dropped += 1;
                warn!(
                    event_type = %s.event_type,
                    state_key = %s.state_key,
                    dropped = self.dropped,
                    "change feed dropped a state change"
                );
                false
            }
        }
    }
}

impl StateObserver for ChangeFeed {
    fn on_state_change(&mut self, change: &StateChange<'_>) {
        self.try_send(change.to_summary());
    }
}

/// Receiving side of a [`ChangeFeed`].
pub struct ChangeFeedHandle {
    receiver: Receiver<StateChangeSummary>,
}

impl ChangeFeedHandle {
    /// Next change if one is buffered.
    pub fn try_recv(&self) -> Option<StateChangeSummary> {
        self.receiver.try_recv().ok()
    }

    /// Wait up to `timeout` for the next change.
    ///
    /// Returns `None` on timeout or once the feed is gone and drained.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<StateChangeSummary> {
        match self.receiver.recv_timeout(timeout) {
            Ok(summary) => Some(summary),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// All currently buffered changes.
    pub fn drain(&self) -> Vec<StateChangeSummary> {
        self.receiver.try_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
