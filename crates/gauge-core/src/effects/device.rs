//! Report device capabilities
//!
//! One trait per independent device behavior, never an umbrella trait. A
//! device that only prints implements [`Print`] alone; a caller that needs to
//! fax declares `&impl Fax` and cannot be handed a print-only device:
//!
//! ```compile_fail
//! use gauge_core::effects::{Fax, Print};
//! use gauge_core::GaugeError;
//!
//! struct PrintOnly;
//!
//! impl Print for PrintOnly {
//!     fn print(&self, _page: &str) -> Result<(), GaugeError> {
//!         Ok(())
//!     }
//! }
//!
//! fn transmit(device: &impl Fax) -> Result<(), GaugeError> {
//!     device.fax("report", "+15550100")
//! }
//!
//! // PrintOnly does not implement Fax: this is a type error, not a
//! // runtime "unsupported operation".
//! transmit(&PrintOnly).unwrap();
//! ```

use crate::errors::GaugeError;

/// Capability to put a page on paper (or the device's equivalent).
pub trait Print: Send + Sync {
    /// Print one rendered page.
    fn print(&self, page: &str) -> Result<(), GaugeError>;
}

/// Capability to digitize a page from the device's feeder.
pub trait Scan: Send + Sync {
    /// Scan the next loaded page.
    ///
    /// Returns [`GaugeError::NotFound`] when the feeder is empty.
    fn scan(&self) -> Result<String, GaugeError>;
}

/// Capability to transmit a page to a remote destination.
pub trait Fax: Send + Sync {
    /// Transmit one page to `destination`.
    fn fax(&self, page: &str, destination: &str) -> Result<(), GaugeError>;
}
