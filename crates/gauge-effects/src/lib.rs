//! Gauge Effects - production capability handlers
//!
//! Concrete implementations of the capability traits defined in
//! `gauge-core`: message channels that actually deliver, and report devices
//! that actually print, scan, and fax (within this toolkit's in-process
//! scope). Test doubles do not belong here; they live in `gauge-testkit`.
//!
//! Every handler owns its own resources at its boundary. Nothing in
//! `gauge-core` acquires a buffer, a log sink, or a tray; the handlers here
//! do.

#![forbid(unsafe_code)]

/// Channel delivering through the tracing log stack
pub mod console;

/// Report devices with segregated capabilities
pub mod devices;

/// Bounded in-memory channel
pub mod memory;

pub use console::ConsoleChannel;
pub use devices::{BasicPrinter, FlatbedScanner, Multifunction};
pub use memory::MemoryChannel;
