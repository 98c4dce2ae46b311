//! Console channel
//!
//! Delivers messages through the `tracing` stack. Stateless: the subscriber
//! installed by the host application owns the actual output resource.

use gauge_core::effects::MessageChannel;
use gauge_core::GaugeError;

/// Channel that emits each message as an info-level log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleChannel;

impl ConsoleChannel {
    /// Create a console channel.
    pub fn new() -> Self {
        Self
    }
}

impl MessageChannel for ConsoleChannel {
    fn send(&self, message: &str) -> Result<(), GaugeError> {
        tracing::info!(target: "gauge::channel", "{message}");
        Ok(())
    }
}
