//! Platform-agnostic poll loop, transport seam and render sinks.
//!
//! This crate ties [`wii_ext_proto`]'s pure decoders to the outside world
//! without depending on any particular hardware. It can be used both in
//! embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! - [`transport`]: Bus seam ([`ExtTransport`]) - request/read report frames
//! - [`render`]: Pure text formatting for console and OLED panel output
//! - [`sink`]: Output seams ([`TextSink`], [`PanelDisplay`])
//! - [`driver`]: The poll loop ([`PollDriver`]) - identify once, then
//!   read/request/decode/render on a fixed cadence
//!
//! # Data flow
//!
//! ```text
//! PollDriver -> ExtTransport (read report)
//!            -> ExtTransport (request next report)
//!            -> decoder selected by the session's ControllerId
//!            -> TextSink (+ PanelDisplay for the Nunchuk)
//! ```
//!
//! The request for the *next* report is issued immediately after the current
//! read, so the peripheral's acquisition latency overlaps the cadence sleep
//! instead of adding to it.
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod driver;
pub mod render;
pub mod sink;
pub mod transport;

// Re-export main types at crate root
pub use driver::{CycleOutcome, PollDriver, StartupError};
pub use sink::{DisplayError, PanelDisplay, SinkError, TextSink};
pub use transport::{ExtTransport, TransportError};

// Re-export the protocol crate so consumers only need one dependency
pub use wii_ext_proto::{ClassicState, ControllerId, NunchukState, ReportFrame};
