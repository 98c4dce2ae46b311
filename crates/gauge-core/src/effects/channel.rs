//! Message channel capability
//!
//! Implemented in `gauge-effects` (console, in-memory) and faked in
//! `gauge-testkit` (recording, failing). A channel owns whatever transport
//! resource it needs; nothing else in the toolkit acquires or releases one.

use crate::errors::GaugeError;

/// Capability to deliver a text message to an external sink.
pub trait MessageChannel: Send + Sync {
    /// Deliver one message.
    ///
    /// A failed delivery is reported as [`GaugeError::Delivery`]; callers
    /// decide whether and how to recover.
    fn send(&self, message: &str) -> Result<(), GaugeError>;
}
