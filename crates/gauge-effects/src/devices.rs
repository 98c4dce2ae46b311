//! Report devices with segregated capabilities
//!
//! Each device implements exactly the capability traits it supports:
//! [`BasicPrinter`] only prints, [`FlatbedScanner`] only scans, and
//! [`Multifunction`] does all three. There is no umbrella device trait, so a
//! caller that needs `Fax` can never be handed a printer by mistake.
//!
//! Devices are in-process: pages land in internal trays rather than on real
//! paper, and the trays are inspectable so callers can verify what the device
//! received.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use gauge_core::effects::{Fax, Print, Scan};
use gauge_core::GaugeError;

/// A device that can only print.
///
/// Clones share the same output tray.
#[derive(Debug, Clone, Default)]
pub struct BasicPrinter {
    tray: Arc<Mutex<Vec<String>>>,
}

impl BasicPrinter {
    /// Create a printer with an empty output tray.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages printed so far, oldest first.
    pub fn printed(&self) -> Vec<String> {
        self.tray
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Print for BasicPrinter {
    fn print(&self, page: &str) -> Result<(), GaugeError> {
        tracing::debug!(target: "gauge::device", bytes = page.len(), "printing page");
        self.tray
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(page.to_string());
        Ok(())
    }
}

/// A device that can only scan.
///
/// Constructed with the pages loaded in its feeder; each scan consumes one.
#[derive(Debug)]
pub struct FlatbedScanner {
    feeder: Mutex<VecDeque<String>>,
}

impl FlatbedScanner {
    /// Create a scanner with `pages` loaded in the feeder.
    pub fn new(pages: impl IntoIterator<Item = String>) -> Self {
        Self {
            feeder: Mutex::new(pages.into_iter().collect()),
        }
    }

    /// Number of pages left in the feeder.
    pub fn remaining(&self) -> usize {
        self.feeder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Scan for FlatbedScanner {
    fn scan(&self) -> Result<String, GaugeError> {
        self.feeder
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .ok_or_else(|| GaugeError::not_found("scanner feeder is empty"))
    }
}

/// A device supporting print, scan, and fax.
///
/// Composes a printer and a scanner internally and adds transmission; each
/// capability still reaches callers through its own trait.
#[derive(Debug)]
pub struct Multifunction {
    printer: BasicPrinter,
    scanner: FlatbedScanner,
    outbox: Mutex<Vec<(String, String)>>,
}

impl Multifunction {
    /// Create a multifunction device with `pages` loaded in the feeder.
    pub fn new(pages: impl IntoIterator<Item = String>) -> Self {
        Self {
            printer: BasicPrinter::new(),
            scanner: FlatbedScanner::new(pages),
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// Pages printed so far, oldest first.
    pub fn printed(&self) -> Vec<String> {
        self.printer.printed()
    }

    /// Transmitted (destination, page) pairs, oldest first.
    pub fn transmitted(&self) -> Vec<(String, String)> {
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Print for Multifunction {
    fn print(&self, page: &str) -> Result<(), GaugeError> {
        self.printer.print(page)
    }
}

impl Scan for Multifunction {
    fn scan(&self) -> Result<String, GaugeError> {
        self.scanner.scan()
    }
}

impl Fax for Multifunction {
    fn fax(&self, page: &str, destination: &str) -> Result<(), GaugeError> {
        if destination.is_empty() {
            return Err(GaugeError::invalid("fax destination must not be empty"));
        }
        tracing::debug!(target: "gauge::device", destination, "transmitting page");
        self.outbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((destination.to_string(), page.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printer_retains_pages_in_order() {
        let printer = BasicPrinter::new();
        printer.print("page one").unwrap();
        printer.print("page two").unwrap();
        assert_eq!(printer.printed(), vec!["page one", "page two"]);
    }

    #[test]
    fn scanner_consumes_feeder() {
        let scanner = FlatbedScanner::new(["a".to_string(), "b".to_string()]);
        assert_eq!(scanner.scan().unwrap(), "a");
        assert_eq!(scanner.scan().unwrap(), "b");
        assert_eq!(scanner.remaining(), 0);

        let err = scanner.scan().unwrap_err();
        assert!(matches!(err, GaugeError::NotFound { .. }));
    }

    #[test]
    fn multifunction_supports_all_three_capabilities() {
        let device = Multifunction::new(["loaded".to_string()]);

        device.print("report").unwrap();
        assert_eq!(device.scan().unwrap(), "loaded");
        device.fax("report", "+15550100").unwrap();

        assert_eq!(device.printed(), vec!["report"]);
        assert_eq!(
            device.transmitted(),
            vec![("+15550100".to_string(), "report".to_string())]
        );
    }

    #[test]
    fn fax_rejects_empty_destination() {
        let device = Multifunction::new([]);
        let err = device.fax("report", "").unwrap_err();
        assert!(matches!(err, GaugeError::Invalid { .. }));
        assert!(device.transmitted().is_empty());
    }

    // Capability access goes through the narrow trait, not the concrete type.
    fn print_with(device: &impl Print, page: &str) -> Result<(), GaugeError> {
        device.print(page)
    }

    #[test]
    fn devices_are_usable_through_trait_bounds() {
        let printer = BasicPrinter::new();
        let device = Multifunction::new([]);

        print_with(&printer, "via trait").unwrap();
        print_with(&device, "via trait").unwrap();

        assert_eq!(printer.printed(), vec!["via trait"]);
        assert_eq!(device.printed(), vec!["via trait"]);
    }
}
