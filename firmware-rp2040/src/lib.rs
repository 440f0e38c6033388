//! Wii extension controller monitor for RP2040.
//!
//! Polls a Wii extension peripheral (Nunchuk or Classic Controller) over I2C
//! on a Raspberry Pi Pico, decodes its reports and renders them to the defmt
//! console and an optional SSD1306 OLED.
//!
//! # Hardware Configuration
//!
//! | Function       | GPIO | Description                    |
//! |----------------|------|--------------------------------|
//! | Controller SDA | 4    | Extension controller bus, I2C0 |
//! | Controller SCL | 5    | Extension controller bus, I2C0 |
//! | Display SDA    | 2    | SSD1306 OLED bus, I2C1         |
//! | Display SCL    | 3    | SSD1306 OLED bus, I2C1         |
//!
//! Pin/bus assignment lives in `src/bin/main.rs`; the cadence and bus clocks
//! are the constants below. Each is overridable independently without
//! touching the poll loop.
//!
//! # Architecture
//!
//! A single Embassy task runs [`monitor_core`]'s `PollDriver`: identify the
//! peripheral once at startup, then read/request/decode/render every
//! [`POLL_INTERVAL_MS`]. The hardware protocol is strictly
//! request-then-read, so there is never more than one outstanding request.
//!
//! # Modules
//!
//! - [`transport`]: I2C extension controller bus session ([`WiiI2c`])
//! - [`console`]: defmt text sink ([`DefmtConsole`])
//! - [`display`]: SSD1306 panel sink ([`OledPanel`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent reset)

#![no_std]

// Ensure mutually exclusive panic handler features
#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they define conflicting panic handlers");

/// Delay between poll cycles, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 250;

/// Extension controller bus clock. The peripheral speaks standard-mode I2C.
pub const CONTROLLER_I2C_HZ: u32 = 100_000;

/// Display bus clock.
pub const DISPLAY_I2C_HZ: u32 = 400_000;

pub mod console;
pub mod display;
pub mod transport;

pub use console::DefmtConsole;
pub use display::OledPanel;
pub use transport::WiiI2c;

// Re-export core types for convenience
pub use monitor_core::{ControllerId, CycleOutcome, PollDriver, StartupError};
