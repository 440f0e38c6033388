//! Transport seam: the extension controller bus session.

use core::future::Future;

use wii_ext_proto::{IdentFrame, ReportFrame};

/// Error type for bus operations.
///
/// "Peripheral produced no data yet" is not an error - the transport methods
/// return `Ok(None)` for that expected transient condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Bus-level fault (arbitration loss, bus stuck, controller error).
    Bus,
    /// Transaction timed out.
    Timeout,
}

/// Async seam for the extension controller bus session.
///
/// Construction of the implementing type is the session open; dropping it
/// closes the session. The hardware protocol is strictly request-then-read:
/// implementations must never pipeline more than one outstanding request.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ExtTransport {
    /// Read the identification registers.
    ///
    /// Called once at startup. `Ok(None)` means the peripheral did not
    /// answer; the caller treats that as a fatal startup condition.
    fn read_ident(&mut self) -> impl Future<Output = Result<Option<IdentFrame>, TransportError>>;

    /// Ask the peripheral to capture its next report.
    fn request_report(&mut self) -> impl Future<Output = Result<(), TransportError>>;

    /// Fetch the most recently requested report.
    ///
    /// `Ok(None)` means no report was ready this cycle (expected transient).
    fn read_report(&mut self) -> impl Future<Output = Result<Option<ReportFrame>, TransportError>>;
}
