//! Companion encoders: exact bit-for-bit inverses of the decoders.
//!
//! Used by the round-trip tests and by anything emulating an extension
//! controller. Field values wider than their wire width are masked down;
//! the unused Classic byte-4 bit 0 is emitted as 1, the idle level of the
//! active-low button lines.

use crate::types::{ClassicState, NunchukState, ReportFrame};

/// Pack a Nunchuk state into its report frame.
#[must_use]
pub fn encode_nunchuk(state: &NunchukState) -> ReportFrame {
    let mut b5 = (state.acc_z & 0x03) << 6 | (state.acc_y & 0x03) << 4 | (state.acc_x & 0x03) << 2;
    if !state.c {
        b5 |= 0x02;
    }
    if !state.z {
        b5 |= 0x01;
    }
    [
        state.joy_x,
        state.joy_y,
        (state.acc_x >> 2) as u8,
        (state.acc_y >> 2) as u8,
        (state.acc_z >> 2) as u8,
        b5 as u8,
    ]
}

/// Pack a Classic Controller state into its report frame.
#[must_use]
pub fn encode_classic(state: &ClassicState) -> ReportFrame {
    let b0 = state.lx & 0x3F | (state.rx & 0x18) << 3;
    let b1 = state.ly & 0x3F | (state.rx & 0x06) << 5;
    let b2 = state.ry & 0x1F | (state.a_lt & 0x18) << 2 | (state.rx & 0x01) << 7;
    let b3 = state.a_rt & 0x1F | (state.a_lt & 0x07) << 5;

    // Button lines idle high; clear the bit for each pressed button.
    let mut b4 = 0xFFu8;
    let mut b5 = 0xFFu8;
    for (pressed, byte, mask) in [
        (state.d_rt, 0, 0x02u8),
        (state.plus, 0, 0x04),
        (state.home, 0, 0x08),
        (state.minus, 0, 0x10),
        (state.d_lt, 0, 0x20),
        (state.down, 0, 0x40),
        (state.right, 0, 0x80),
        (state.up, 1, 0x01),
        (state.left, 1, 0x02),
        (state.zr, 1, 0x04),
        (state.x, 1, 0x08),
        (state.a, 1, 0x10),
        (state.y, 1, 0x20),
        (state.b, 1, 0x40),
        (state.zl, 1, 0x80),
    ] {
        if pressed {
            if byte == 0 {
                b4 &= !mask;
            } else {
                b5 &= !mask;
            }
        }
    }

    [b0, b1, b2, b3, b4, b5]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_classic, decode_nunchuk};

    #[test]
    fn test_nunchuk_state_round_trip() {
        let state = NunchukState {
            joy_x: 0x7F,
            joy_y: 0xC3,
            acc_x: 0x3A5,
            acc_y: 0x012,
            acc_z: 0x2F1,
            c: true,
            z: false,
        };
        assert_eq!(decode_nunchuk(&encode_nunchuk(&state)), state);
    }

    #[test]
    fn test_nunchuk_frame_round_trip() {
        // Every one of the 48 frame bits is captured by a field, so
        // encode(decode(f)) must reproduce any frame exactly.
        for frame in [
            [0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
            [0x7F, 0x80, 0x84, 0x7B, 0x9D, 0x03],
            [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC],
        ] {
            assert_eq!(encode_nunchuk(&decode_nunchuk(&frame)), frame);
        }
    }

    #[test]
    fn test_classic_state_round_trip() {
        let state = ClassicState {
            lx: 0x2A,
            ly: 0x15,
            rx: 0x1B,
            ry: 0x0B,
            a_lt: 0x16,
            a_rt: 0x11,
            d_lt: true,
            d_rt: false,
            a: true,
            b: false,
            x: true,
            y: false,
            up: true,
            down: false,
            left: true,
            right: false,
            home: true,
            plus: false,
            minus: true,
            zl: false,
            zr: true,
        };
        assert_eq!(decode_classic(&encode_classic(&state)), state);
    }

    #[test]
    fn test_classic_extreme_states_round_trip() {
        let all_on = ClassicState {
            lx: 0x3F,
            ly: 0x3F,
            rx: 0x1F,
            ry: 0x1F,
            a_lt: 0x1F,
            a_rt: 0x1F,
            d_lt: true,
            d_rt: true,
            a: true,
            b: true,
            x: true,
            y: true,
            up: true,
            down: true,
            left: true,
            right: true,
            home: true,
            plus: true,
            minus: true,
            zl: true,
            zr: true,
        };
        assert_eq!(decode_classic(&encode_classic(&all_on)), all_on);

        let all_off = ClassicState::default();
        assert_eq!(decode_classic(&encode_classic(&all_off)), all_off);
    }

    #[test]
    fn test_classic_frame_round_trip() {
        // Valid frames carry the unused byte-4 bit 0 high.
        for frame in [
            [0x00, 0x00, 0x00, 0x00, 0x01, 0x00],
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
            [0xAA, 0x55, 0xCB, 0xD1, 0xFD, 0xEF],
        ] {
            assert_eq!(encode_classic(&decode_classic(&frame)), frame);
        }
    }

    #[test]
    fn test_classic_unused_bit_idles_high() {
        let frame = encode_classic(&ClassicState::default());
        assert_eq!(frame[4] & 0x01, 0x01);
    }
}
