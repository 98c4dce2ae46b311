//! Bounded in-memory channel
//!
//! Useful when the host application wants to collect notifications and flush
//! them on its own schedule. The channel owns its buffer exclusively and
//! reports a delivery failure once the buffer is full, rather than silently
//! dropping messages.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use gauge_core::effects::MessageChannel;
use gauge_core::GaugeError;

/// Channel that retains messages in a bounded FIFO buffer.
///
/// Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct MemoryChannel {
    buffer: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl MemoryChannel {
    /// Create a channel that holds at most `capacity` undelivered messages.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Number of messages currently buffered.
    pub fn len(&self) -> usize {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return all buffered messages in delivery order.
    pub fn drain(&self) -> Vec<String> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }
}

impl MessageChannel for MemoryChannel {
    fn send(&self, message: &str) -> Result<(), GaugeError> {
        let mut buffer = self
            .buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if buffer.len() >= self.capacity {
            return Err(GaugeError::delivery(format!(
                "buffer full ({} messages)",
                self.capacity
            )));
        }
        buffer.push_back(message.to_string());
        Ok(())
    }
}
