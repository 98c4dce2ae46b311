//! Unified error system for gauge
//!
//! A single error type covers every fallible operation in the toolkit.
//! Capability absence is deliberately not represented here: a variant that
//! lacks a capability simply does not implement the trait, so misuse is a
//! compile error rather than a runtime failure.

use serde::{Deserialize, Serialize};

/// Unified error type for all gauge operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum GaugeError {
    /// Invalid input at construction time (e.g. a negative dimension)
    #[error("Invalid: {message}")]
    Invalid {
        /// Description of the rejected input
        message: String,
    },

    /// A channel failed to deliver a message
    #[error("Delivery failed: {message}")]
    Delivery {
        /// Description of the delivery failure
        message: String,
    },

    /// A requested resource was not available
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was missing
        message: String,
    },

    /// Internal invariant violation
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl GaugeError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a delivery failure error
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = GaugeError::invalid("radius must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid: radius must be non-negative, got -1"
        );
    }

    #[test]
    fn errors_round_trip_through_json() {
        let err = GaugeError::delivery("sink unavailable");
        let json = serde_json::to_string(&err).unwrap();
        let back: GaugeError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
