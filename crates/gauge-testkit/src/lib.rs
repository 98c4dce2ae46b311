//! Gauge Testkit - deterministic test doubles and fixtures
//!
//! Fakes for the capability traits in `gauge-core`, plus shared fixtures and
//! proptest strategies. Production handlers never live here; this crate
//! exists so every other crate can test against recorded, controllable
//! behavior instead of real delivery.

#![forbid(unsafe_code)]

/// Recording and failing channel fakes
pub mod channels;

/// Shared registries and proptest strategies
pub mod fixtures;

pub use channels::{FailingChannel, RecordingChannel};
pub use fixtures::{arb_registry, arb_shape, sample_registry, AnyShape, SAMPLE_REGISTRY_TOTAL};
