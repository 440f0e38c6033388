//! Output seams: console text sink and OLED panel display.

/// Error type for text sink writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// The underlying output rejected the write.
    Io,
}

/// Error type for panel display operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus-level fault talking to the display.
    Bus,
    /// Drawing into the frame buffer failed.
    Draw,
}

/// Line-oriented, unbuffered text output.
///
/// Each call renders one complete block (one or more `\n`-separated lines)
/// and flushes immediately. Rendering the same state twice must produce
/// byte-identical output - implementations hold no formatting state.
pub trait TextSink {
    /// Write a block of text, flushing immediately.
    fn write_block(&mut self, text: &str) -> Result<(), SinkError>;
}

/// Character-grid display surface for the panel sink.
///
/// The driver renders a cycle by clearing the buffer, placing the cursor at
/// a fixed origin, writing one text block and flushing - implementations
/// only need those four operations. `write_text` interprets `\n` as
/// "advance to the next row at the cursor column".
pub trait PanelDisplay {
    /// Clear the frame buffer (not yet visible until [`flush`](Self::flush)).
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Place the cursor at the given character cell.
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Write text at the cursor into the frame buffer.
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Push the frame buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;
}
