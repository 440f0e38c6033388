//! Report decoders for the two supported schemas.
//!
//! Both schemas pack their state into 6 bytes. The bit layout is fixed by the
//! peripheral and reproduced here exactly; frames are typed as fixed-size
//! arrays so length never needs re-validation, and contents are trusted
//! (garbage in, garbage out - framing is the transport's contract).
//!
//! # Nunchuk layout
//!
//! | Byte | Contents                                      |
//! |------|-----------------------------------------------|
//! | 0    | joystick X                                    |
//! | 1    | joystick Y                                    |
//! | 2    | accel X bits 9..2                             |
//! | 3    | accel Y bits 9..2                             |
//! | 4    | accel Z bits 9..2                             |
//! | 5    | accel Z/Y/X bits 1..0 (bits 7..2), C, Z       |
//!
//! # Classic Controller layout (standard data format)
//!
//! | Byte | Contents                                      |
//! |------|-----------------------------------------------|
//! | 0    | RX bits 4..3 (bits 7..6), LX (bits 5..0)      |
//! | 1    | RX bits 2..1 (bits 7..6), LY (bits 5..0)      |
//! | 2    | RX bit 0, LT bits 4..3, RY (bits 4..0)        |
//! | 3    | LT bits 2..0 (bits 7..5), RT (bits 4..0)      |
//! | 4    | button lines (see masks below)                |
//! | 5    | button lines (see masks below)                |
//!
//! All button lines are active-low: a clear bit means pressed.

use crate::types::{ClassicState, NunchukState, ReportFrame};

/// Unpack a Nunchuk report frame.
#[must_use]
pub fn decode_nunchuk(frame: &ReportFrame) -> NunchukState {
    NunchukState {
        joy_x: frame[0],
        joy_y: frame[1],
        acc_x: u16::from(frame[2]) << 2 | u16::from(frame[5] >> 2 & 0x03),
        acc_y: u16::from(frame[3]) << 2 | u16::from(frame[5] >> 4 & 0x03),
        acc_z: u16::from(frame[4]) << 2 | u16::from(frame[5] >> 6 & 0x03),
        c: (frame[5] & 0x02) == 0,
        z: (frame[5] & 0x01) == 0,
    }
}

/// Unpack a Classic Controller report frame.
#[must_use]
pub fn decode_classic(frame: &ReportFrame) -> ClassicState {
    ClassicState {
        lx: frame[0] & 0x3F,
        ly: frame[1] & 0x3F,
        rx: (frame[0] & 0xC0) >> 3 | (frame[1] & 0xC0) >> 5 | (frame[2] & 0x80) >> 7,
        ry: frame[2] & 0x1F,
        a_lt: (frame[2] & 0x60) >> 2 | (frame[3] & 0xE0) >> 5,
        a_rt: frame[3] & 0x1F,
        // byte 4 button lines (bit 0 is unused and reads 1)
        d_rt: (frame[4] & 0x02) == 0,
        plus: (frame[4] & 0x04) == 0,
        home: (frame[4] & 0x08) == 0,
        minus: (frame[4] & 0x10) == 0,
        d_lt: (frame[4] & 0x20) == 0,
        down: (frame[4] & 0x40) == 0,
        right: (frame[4] & 0x80) == 0,
        // byte 5 button lines
        up: (frame[5] & 0x01) == 0,
        left: (frame[5] & 0x02) == 0,
        zr: (frame[5] & 0x04) == 0,
        x: (frame[5] & 0x08) == 0,
        a: (frame[5] & 0x10) == 0,
        y: (frame[5] & 0x20) == 0,
        b: (frame[5] & 0x40) == 0,
        zl: (frame[5] & 0x80) == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nunchuk_zero_frame() {
        let state = decode_nunchuk(&[0u8; 6]);
        assert_eq!(state.joy_x, 0);
        assert_eq!(state.joy_y, 0);
        assert_eq!(state.acc_x, 0);
        assert_eq!(state.acc_y, 0);
        assert_eq!(state.acc_z, 0);
        // Button lines are active-low, so a zero frame reads as both pressed
        assert!(state.c);
        assert!(state.z);
    }

    #[test]
    fn test_nunchuk_idle_frame() {
        // Roughly centered sticks, 1g on Z, no buttons held
        let state = decode_nunchuk(&[0x7F, 0x80, 0x80, 0x80, 0x98, 0x03]);
        assert_eq!(state.joy_x, 0x7F);
        assert_eq!(state.joy_y, 0x80);
        assert_eq!(state.acc_x, 0x200);
        assert_eq!(state.acc_y, 0x200);
        assert_eq!(state.acc_z, 0x260);
        assert!(!state.c);
        assert!(!state.z);
    }

    #[test]
    fn test_nunchuk_accel_low_bits() {
        // Low two bits of each axis live in byte 5, bits 2..7
        let state = decode_nunchuk(&[0, 0, 0, 0, 0, 0b1001_0111]);
        assert_eq!(state.acc_x, 0b01);
        assert_eq!(state.acc_y, 0b01);
        assert_eq!(state.acc_z, 0b10);
        assert!(!state.c); // bit 1 set = released
        assert!(!state.z); // bit 0 set = released
    }

    #[test]
    fn test_nunchuk_accel_full_range() {
        let state = decode_nunchuk(&[0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(state.acc_x, 1023);
        assert_eq!(state.acc_y, 1023);
        assert_eq!(state.acc_z, 1023);
    }

    #[test]
    fn test_classic_sticks_and_triggers() {
        // lx = 0x2A, ly = 0x15, rx = 0b11011 spread over three bytes,
        // ry = 0x0B, a_lt = 0b10110, a_rt = 0x11
        let b0 = 0x2A | 0b11 << 6;
        let b1 = 0x15 | 0b01 << 6;
        let b2 = 0x0B | (0b10u8) << 5 | 0x80;
        let b3 = 0x11 | 0b110 << 5;
        let state = decode_classic(&[b0, b1, b2, b3, 0xFF, 0xFF]);
        assert_eq!(state.lx, 0x2A);
        assert_eq!(state.ly, 0x15);
        assert_eq!(state.rx, 0b11011);
        assert_eq!(state.ry, 0x0B);
        assert_eq!(state.a_lt, 0b10110);
        assert_eq!(state.a_rt, 0x11);
    }

    #[test]
    fn test_classic_idle_buttons() {
        // All button lines high = nothing pressed
        let state = decode_classic(&[0, 0, 0, 0, 0xFF, 0xFF]);
        assert!(!state.a && !state.b && !state.x && !state.y);
        assert!(!state.up && !state.down && !state.left && !state.right);
        assert!(!state.home && !state.plus && !state.minus);
        assert!(!state.d_lt && !state.d_rt && !state.zl && !state.zr);
    }

    #[test]
    fn test_classic_single_buttons() {
        let state = decode_classic(&[0, 0, 0, 0, 0xFF & !0x04, 0xFF & !0x10]);
        assert!(state.plus);
        assert!(state.a);
        assert!(!state.b);
        assert!(!state.home);
    }

    #[test]
    fn test_classic_all_buttons_pressed() {
        // Everything pulled low except the unused byte-4 bit 0
        let state = decode_classic(&[0, 0, 0, 0, 0x01, 0x00]);
        assert!(state.a && state.b && state.x && state.y);
        assert!(state.up && state.down && state.left && state.right);
        assert!(state.home && state.plus && state.minus);
        assert!(state.d_lt && state.d_rt && state.zl && state.zr);
    }
}
