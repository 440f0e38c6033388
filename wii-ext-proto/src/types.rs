//! Core controller types: ControllerId, NunchukState, ClassicState.

/// Length of a report frame in bytes, for both supported schemas.
pub const REPORT_LEN: usize = 6;

/// Length of the identification register block in bytes.
pub const IDENT_LEN: usize = 6;

/// One report read from the peripheral per poll cycle.
pub type ReportFrame = [u8; REPORT_LEN];

/// The identification registers (0xFA..0xFF), read once at startup.
pub type IdentFrame = [u8; IDENT_LEN];

/// The class of the attached extension controller.
///
/// Resolved once per session from the identification registers and never
/// re-resolved; the poll loop selects its decoder from this tag alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerId {
    /// Nunchuk (joystick + accelerometer + C/Z buttons).
    Nunchuk,
    /// Classic Controller (two sticks, triggers, full button set).
    Classic,
    /// Any other peripheral; carries the raw 24-bit identity code for
    /// diagnostics.
    Unknown(u32),
}

/// Decoded Nunchuk report.
///
/// Joystick axes are raw 8-bit readings, accelerometer axes are 10-bit
/// (0-1023). Buttons are active-low on the wire but presented as plain
/// pressed/not-pressed booleans here.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NunchukState {
    pub joy_x: u8,
    pub joy_y: u8,
    pub acc_x: u16,
    pub acc_y: u16,
    pub acc_z: u16,
    pub c: bool,
    pub z: bool,
}

/// Decoded Classic Controller report (standard 6-byte data format).
///
/// Left stick axes are 6-bit (0-63), right stick and analog triggers are
/// 5-bit (0-31). All buttons are active-low on the wire but presented as
/// plain pressed/not-pressed booleans here.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassicState {
    pub lx: u8,
    pub ly: u8,
    pub rx: u8,
    pub ry: u8,
    /// Analog left trigger position.
    pub a_lt: u8,
    /// Analog right trigger position.
    pub a_rt: u8,
    /// Digital left trigger (full pull click).
    pub d_lt: bool,
    /// Digital right trigger (full pull click).
    pub d_rt: bool,
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub home: bool,
    pub plus: bool,
    pub minus: bool,
    pub zl: bool,
    pub zr: bool,
}
