//! Wii extension controller wire format: identity resolution and report decoding.
//!
//! Extension controllers (Nunchuk, Classic Controller, ...) plug into the
//! Wiimote's expansion port and speak a simple register protocol over I2C.
//! This crate covers the device-independent half of that protocol: classifying
//! the peripheral from its identification registers and unpacking its 6-byte
//! report frames into typed state.
//!
//! # Overview
//!
//! - [`types`]: Core data structures ([`ControllerId`], [`NunchukState`], [`ClassicState`])
//! - [`ident`]: Identity resolution ([`identify`])
//! - [`decode`]: Report decoders ([`decode_nunchuk`], [`decode_classic`])
//! - [`encode`]: Companion encoders, exact inverses of the decoders
//!
//! The bus transactions themselves (init handshake, report requests) live in
//! the firmware crates; everything here is pure and host-testable.
//!
//! # Example
//!
//! ```rust
//! use wii_ext_proto::{identify, decode_nunchuk, ControllerId};
//!
//! // Identification registers of a Nunchuk
//! let ident = [0x00, 0x00, 0xA4, 0x20, 0x00, 0x00];
//! assert_eq!(identify(&ident), ControllerId::Nunchuk);
//!
//! let state = decode_nunchuk(&[0x7F, 0x80, 0x84, 0x7B, 0x9D, 0x03]);
//! assert_eq!(state.joy_x, 0x7F);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod decode;
pub mod encode;
pub mod ident;
pub mod types;

// Re-export main items at crate root
pub use decode::{decode_classic, decode_nunchuk};
pub use encode::{encode_classic, encode_nunchuk};
pub use ident::{identify, IDENT_CLASSIC, IDENT_NUNCHUK};
pub use types::{ClassicState, ControllerId, IdentFrame, NunchukState, ReportFrame, IDENT_LEN, REPORT_LEN};
