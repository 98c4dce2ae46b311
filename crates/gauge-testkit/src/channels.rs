//! Channel fakes
//!
//! [`RecordingChannel`] records every message instead of delivering it;
//! [`FailingChannel`] refuses every message with a fixed reason. Together
//! they cover both sides of the dispatcher contract: verbatim delegation and
//! unchanged error propagation.

use std::sync::{Arc, Mutex, PoisonError};

use gauge_core::effects::MessageChannel;
use gauge_core::GaugeError;

/// Channel fake that records messages in order.
///
/// Clones share the same record, so a test can hand one clone to a
/// [`Dispatcher`](gauge_core::Dispatcher) and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    sent: Arc<Mutex<Vec<String>>>,
}

impl RecordingChannel {
    /// Create a channel with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all recorded messages.
    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.sent.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of `send` calls observed.
    pub fn send_count(&self) -> usize {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl MessageChannel for RecordingChannel {
    fn send(&self, message: &str) -> Result<(), GaugeError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        Ok(())
    }
}

/// Channel fake that fails every delivery with a fixed reason.
#[derive(Debug, Clone)]
pub struct FailingChannel {
    reason: String,
}

impl FailingChannel {
    /// Create a channel that fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for FailingChannel {
    fn default() -> Self {
        Self::new("injected failure")
    }
}

impl MessageChannel for FailingChannel {
    fn send(&self, _message: &str) -> Result<(), GaugeError> {
        Err(GaugeError::delivery(self.reason.clone()))
    }
}
