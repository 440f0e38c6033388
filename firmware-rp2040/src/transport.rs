//! I2C session with the extension controller.
//!
//! Extension controllers sit at address 0x52 and expose a register space.
//! The session is opened with the unencrypted init handshake (0xF0=0x55,
//! 0xFB=0x00 - no XOR scrambling of report bytes), identity is read from
//! register 0xFA, and each report is produced by pointing the register
//! cursor at 0x00 and reading 6 bytes once the peripheral has had time to
//! acquire a sample.
//!
//! A peripheral that NACKs a read simply has nothing for us yet; that maps
//! to `Ok(None)`, not an error. Every other bus fault is surfaced as
//! [`TransportError`].

use embassy_time::Timer;
use embedded_hal_async::i2c::{Error as I2cError, ErrorKind, I2c};
use monitor_core::{ExtTransport, TransportError};
use wii_ext_proto::{IdentFrame, ReportFrame, IDENT_LEN, REPORT_LEN};

/// Bus address of every extension controller.
pub const EXT_ADDR: u8 = 0x52;

/// Register holding the identification bytes.
const REG_IDENT: u8 = 0xFA;

/// Register holding the report data.
const REG_REPORT: u8 = 0x00;

/// Settle time after moving the register cursor before reading.
const CURSOR_SETTLE_US: u64 = 300;

/// Convert an I2C error to [`TransportError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule
/// issues (both error types are defined in external crates).
#[inline]
fn bus_fault<E: I2cError>(_e: E) -> TransportError {
    TransportError::Bus
}

#[inline]
fn is_nack<E: I2cError>(e: &E) -> bool {
    matches!(e.kind(), ErrorKind::NoAcknowledge(_))
}

/// The extension controller bus session.
///
/// Constructing it performs the init handshake; from then on the peripheral
/// reports unencrypted data.
pub struct WiiI2c<B> {
    bus: B,
}

impl<B: I2c> WiiI2c<B> {
    /// Open the session: put the peripheral into unencrypted mode.
    ///
    /// # Errors
    ///
    /// Any bus fault here (including a NACK - nothing is plugged in) is
    /// fatal for the session.
    pub async fn init(mut bus: B) -> Result<Self, TransportError> {
        bus.write(EXT_ADDR, &[0xF0, 0x55]).await.map_err(bus_fault)?;
        Timer::after_millis(1).await;
        bus.write(EXT_ADDR, &[0xFB, 0x00]).await.map_err(bus_fault)?;
        Timer::after_millis(1).await;
        Ok(Self { bus })
    }
}

impl<B: I2c> ExtTransport for WiiI2c<B> {
    async fn read_ident(&mut self) -> Result<Option<IdentFrame>, TransportError> {
        self.bus
            .write(EXT_ADDR, &[REG_IDENT])
            .await
            .map_err(bus_fault)?;
        Timer::after_micros(CURSOR_SETTLE_US).await;

        let mut ident = [0u8; IDENT_LEN];
        match self.bus.read(EXT_ADDR, &mut ident).await {
            Ok(()) => Ok(Some(ident)),
            Err(e) if is_nack(&e) => Ok(None),
            Err(e) => Err(bus_fault(e)),
        }
    }

    async fn request_report(&mut self) -> Result<(), TransportError> {
        self.bus
            .write(EXT_ADDR, &[REG_REPORT])
            .await
            .map_err(bus_fault)
    }

    async fn read_report(&mut self) -> Result<Option<ReportFrame>, TransportError> {
        let mut frame = [0u8; REPORT_LEN];
        match self.bus.read(EXT_ADDR, &mut frame).await {
            Ok(()) => Ok(Some(frame)),
            Err(e) if is_nack(&e) => Ok(None),
            Err(e) => Err(bus_fault(e)),
        }
    }
}
