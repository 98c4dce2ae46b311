//! Capability trait definitions
//!
//! Pure trait definitions for the toolkit's pluggable behaviors. This module
//! defines **what** a capability does; implementations define **how**:
//! production variants live in `gauge-effects`, deterministic fakes in
//! `gauge-testkit`.
//!
//! Each trait is minimal on purpose. A variant implements exactly the
//! capabilities it genuinely supports, and callers declare a dependency on
//! one capability at a time, so "unsupported operation" is a compile error
//! rather than a runtime path.

pub mod channel;
pub mod device;

pub use channel::MessageChannel;
pub use device::{Fax, Print, Scan};
