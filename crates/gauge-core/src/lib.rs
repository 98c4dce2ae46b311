//! Gauge Core - contracts and domain logic
//!
//! This crate defines the pure contracts of the gauge toolkit and the domain
//! logic built directly on them. It contains no production handlers: concrete
//! channels and devices live in `gauge-effects`, deterministic test doubles in
//! `gauge-testkit`.
//!
//! # Architecture
//!
//! Two independent paths share one principle (depend on contracts, never on
//! concrete variants):
//!
//! - **Read path**: [`Registry`] of [`Measurable`] items → [`Aggregator`] →
//!   [`AggregateResult`] → [`RenderReport`] implementors.
//! - **Action path**: [`Dispatcher`] → injected [`effects::MessageChannel`] →
//!   external sink.
//!
//! The aggregator and dispatcher never inspect a concrete variant; adding a
//! new shape or channel requires no change to either.

#![forbid(unsafe_code)]

/// Aggregation over a registry of measurable items
pub mod aggregate;

/// Channel and device capability traits (no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// Message dispatch through an injected channel
pub mod dispatch;

/// The `Measurable` capability contract
pub mod measure;

/// Ordered owning collection of measurable items
pub mod registry;

/// Report rendering contracts and built-in renderers
pub mod render;

/// Validated geometric shape variants
pub mod shapes;

pub use aggregate::{AggregateResult, Aggregator};
pub use dispatch::Dispatcher;
pub use errors::GaugeError;
pub use measure::Measurable;
pub use registry::Registry;
pub use render::{JsonRenderer, RenderReport, TextRenderer};
