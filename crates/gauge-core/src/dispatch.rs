//! Message dispatch through an injected channel
//!
//! The dispatcher is the high-level end of the action path. It holds exactly
//! one [`MessageChannel`] reference supplied at construction and contains no
//! logic that selects or builds a concrete channel; wiring happens in the
//! caller's configuration step. Adding a new channel kind therefore never
//! touches this module.

use std::sync::Arc;

use crate::effects::MessageChannel;
use crate::errors::GaugeError;

/// Delivers notifications through a channel bound at construction.
#[derive(Clone)]
pub struct Dispatcher {
    channel: Arc<dyn MessageChannel>,
}

impl Dispatcher {
    /// Create a dispatcher bound to `channel` for its whole lifetime.
    pub fn new(channel: Arc<dyn MessageChannel>) -> Self {
        Self { channel }
    }

    /// Deliver `message` through the bound channel.
    ///
    /// Delegates verbatim and propagates any [`GaugeError::Delivery`]
    /// unchanged: no retry, no swallowing.
    pub fn notify(&self, message: &str) -> Result<(), GaugeError> {
        tracing::trace!(len = message.len(), "dispatching notification");
        self.channel.send(message)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Minimal local fake; the full-featured recording channel lives in
    // gauge-testkit, which depends on this crate.
    #[derive(Default)]
    struct CapturingChannel {
        sent: Mutex<Vec<String>>,
    }

    impl MessageChannel for CapturingChannel {
        fn send(&self, message: &str) -> Result<(), GaugeError> {
            self.sent.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn notify_delegates_verbatim() {
        let channel = Arc::new(CapturingChannel::default());
        let dispatcher = Dispatcher::new(channel.clone());

        dispatcher.notify("x").unwrap();

        let sent = channel.sent.lock().unwrap();
        assert_eq!(sent.as_slice(), ["x"]);
    }

    #[test]
    fn notify_propagates_delivery_errors_unchanged() {
        struct DownChannel;

        impl MessageChannel for DownChannel {
            fn send(&self, _message: &str) -> Result<(), GaugeError> {
                Err(GaugeError::delivery("sink offline"))
            }
        }

        let dispatcher = Dispatcher::new(Arc::new(DownChannel));
        let err = dispatcher.notify("x").unwrap_err();
        assert_eq!(err, GaugeError::delivery("sink offline"));
    }
}
