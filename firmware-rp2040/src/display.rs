//! SSD1306 OLED panel sink.
//!
//! Drives a 128x64 SSD1306 in buffered-graphics mode with the 6x10 font,
//! giving a 21x6 character grid - comfortably more than the panel block
//! needs. Drawing goes into the frame buffer; only `flush` touches the bus.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use monitor_core::{DisplayError, PanelDisplay};
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

/// Character cell size of [`FONT_6X10`].
const CELL_W: i32 = 6;
const CELL_H: i32 = 10;

/// The OLED panel sink.
pub struct OledPanel<B> {
    display: Ssd1306<I2CInterface<B>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
    row: u8,
    col: u8,
}

impl<B: I2c> OledPanel<B> {
    /// Probe and initialize the display.
    ///
    /// Returns `None` if no display answers - the panel sink is an optional
    /// feature, not a required peripheral.
    pub fn new(bus: B) -> Option<Self> {
        let interface = I2CDisplayInterface::new(bus);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().ok()?;
        display.flush().ok()?;
        Some(Self {
            display,
            row: 0,
            col: 0,
        })
    }
}

impl<B: I2c> PanelDisplay for OledPanel<B> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Draw)
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        self.row = row;
        self.col = col;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        for (i, line) in text.lines().enumerate() {
            let origin = Point::new(
                i32::from(self.col) * CELL_W,
                (i32::from(self.row) + i as i32) * CELL_H,
            );
            Text::with_baseline(line, origin, style, Baseline::Top)
                .draw(&mut self.display)
                .map_err(|_| DisplayError::Draw)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.display.flush().map_err(|_| DisplayError::Bus)
    }
}
