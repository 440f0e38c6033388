//! Pure text formatting for the render sinks.
//!
//! The console layout (field order, labels, widths) is a compatibility
//! contract: test harnesses diff this output, so it must stay byte-stable.
//! All functions here are pure - formatting the same state twice produces
//! identical bytes.

use core::fmt::Write;

use wii_ext_proto::{ClassicState, NunchukState, ReportFrame};

/// Capacity of a console text block (sized for the Classic's eight lines).
pub const TEXT_BLOCK_CAP: usize = 192;

/// One console text block, one or more `\n`-terminated lines.
pub type TextBlock = heapless::String<TEXT_BLOCK_CAP>;

/// Capacity of an OLED panel block.
pub const PANEL_BLOCK_CAP: usize = 48;

/// One OLED panel block.
pub type PanelBlock = heapless::String<PANEL_BLOCK_CAP>;

/// Character columns available on the OLED panel.
pub const PANEL_COLS: usize = 16;

/// Notification emitted once per cycle the peripheral had no report ready.
pub const NO_DATA: &str = "no data :(\n";

/// Format a Nunchuk state for the console: accelerometer triple, joystick
/// pair, button pair - one line each.
#[must_use]
pub fn format_nunchuk(state: &NunchukState) -> TextBlock {
    let mut out = TextBlock::new();
    // Capacity is sized for the worst-case field widths; these cannot overflow.
    let _ = writeln!(
        out,
        "a = ({:5},{:5},{:5})",
        state.acc_x, state.acc_y, state.acc_z
    );
    let _ = writeln!(out, "d = ({:5},{:5})", state.joy_x, state.joy_y);
    let _ = writeln!(out, "c={}, z={}", u8::from(state.c), u8::from(state.z));
    out
}

/// Format a Classic Controller state for the console, one line per field
/// group.
#[must_use]
pub fn format_classic(state: &ClassicState) -> TextBlock {
    let mut out = TextBlock::new();
    let _ = writeln!(out, "lx,ly = ({:3},{:3})", state.lx, state.ly);
    let _ = writeln!(out, "rx,ry = ({:3},{:3})", state.rx, state.ry);
    let _ = writeln!(out, "a lt,rt = ({:3},{:3})", state.a_lt, state.a_rt);
    let _ = writeln!(
        out,
        "d lt,rt = ({},{})",
        u8::from(state.d_lt),
        u8::from(state.d_rt)
    );
    let _ = writeln!(
        out,
        "a,b,x,y = ({},{},{},{})",
        u8::from(state.a),
        u8::from(state.b),
        u8::from(state.x),
        u8::from(state.y)
    );
    let _ = writeln!(
        out,
        "up, down, left, right = ({},{},{},{})",
        u8::from(state.up),
        u8::from(state.down),
        u8::from(state.left),
        u8::from(state.right)
    );
    let _ = writeln!(
        out,
        "home, plus, minus = ({},{},{})",
        u8::from(state.home),
        u8::from(state.plus),
        u8::from(state.minus)
    );
    let _ = writeln!(out, "zl, zr = ({},{})", u8::from(state.zl), u8::from(state.zr));
    out
}

/// Hex-dump a report frame from an unknown peripheral.
#[must_use]
pub fn format_raw(frame: &ReportFrame) -> TextBlock {
    let mut out = TextBlock::new();
    let _ = out.push_str("data:");
    for byte in frame {
        let _ = write!(out, " {byte:02x}");
    }
    let _ = out.push('\n');
    out
}

/// Compose the OLED panel block for a Nunchuk: a label row plus one row per
/// joystick axis with the raw value and a scaled bar, sized for a
/// [`PANEL_COLS`]-column grid.
#[must_use]
pub fn format_panel(state: &NunchukState) -> PanelBlock {
    let mut out = PanelBlock::new();
    let _ = out.push_str("nunchuk\n");
    let _ = write!(out, "X:{:3} ", state.joy_x);
    push_bar(&mut out, state.joy_x);
    let _ = out.push('\n');
    let _ = write!(out, "Y:{:3} ", state.joy_y);
    push_bar(&mut out, state.joy_y);
    out
}

/// Append an 8-cell bar scaled from the 0-255 axis reading.
fn push_bar(out: &mut PanelBlock, value: u8) {
    let filled = usize::from(value) * 8 / 256;
    for cell in 0..8 {
        let _ = out.push(if cell < filled { '#' } else { '-' });
    }
}
