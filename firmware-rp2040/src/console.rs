//! defmt-backed console sink.

use monitor_core::{SinkError, TextSink};

/// Text sink that emits each rendered line as one defmt record.
///
/// RTT is this firmware's standard output; records are flushed by the
/// transport as they are produced, so the sink itself holds no buffer.
pub struct DefmtConsole;

impl TextSink for DefmtConsole {
    fn write_block(&mut self, text: &str) -> Result<(), SinkError> {
        for line in text.lines() {
            defmt::info!("{=str}", line);
        }
        Ok(())
    }
}
