//! Controller identity resolution.
//!
//! Every extension controller exposes six identification registers at
//! 0xFA..0xFF. The class is encoded in bytes 2, 4 and 5 (byte 3 is a data
//! format revision and bytes 0-1 vary between third-party clones), packed
//! here into a 24-bit code:
//!
//! ```text
//! code = ident[2] << 16 | ident[4] << 8 | ident[5]
//! ```
//!
//! Known codes:
//!
//! | Code       | Peripheral         |
//! |------------|--------------------|
//! | `0xA40000` | Nunchuk            |
//! | `0xA40101` | Classic Controller |
//!
//! Anything else maps to [`ControllerId::Unknown`] with the code preserved.

use crate::types::{ControllerId, IdentFrame};

/// 24-bit identity code of a Nunchuk.
pub const IDENT_NUNCHUK: u32 = 0xA4_0000;

/// 24-bit identity code of a Classic Controller.
pub const IDENT_CLASSIC: u32 = 0xA4_0101;

/// Classify the attached peripheral from its identification registers.
///
/// Total over all inputs: unrecognized codes are a valid classification
/// ([`ControllerId::Unknown`]), not an error.
#[must_use]
pub fn identify(ident: &IdentFrame) -> ControllerId {
    let code = u32::from(ident[2]) << 16 | u32::from(ident[4]) << 8 | u32::from(ident[5]);
    match code {
        IDENT_NUNCHUK => ControllerId::Nunchuk,
        IDENT_CLASSIC => ControllerId::Classic,
        other => ControllerId::Unknown(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_nunchuk() {
        let ident = [0x00, 0x00, 0xA4, 0x20, 0x00, 0x00];
        assert_eq!(identify(&ident), ControllerId::Nunchuk);
    }

    #[test]
    fn test_identify_classic() {
        let ident = [0x00, 0x00, 0xA4, 0x20, 0x01, 0x01];
        assert_eq!(identify(&ident), ControllerId::Classic);
    }

    #[test]
    fn test_identify_ignores_clone_prefix_and_format_byte() {
        // Third-party clones report different bytes 0-1; byte 3 is the data
        // format revision. None of them affect classification.
        let ident = [0xFF, 0x01, 0xA4, 0x30, 0x00, 0x00];
        assert_eq!(identify(&ident), ControllerId::Nunchuk);
    }

    #[test]
    fn test_identify_unknown_preserves_code() {
        let ident = [0x00, 0x00, 0xA4, 0x20, 0x04, 0x02];
        assert_eq!(identify(&ident), ControllerId::Unknown(0xA4_0402));
    }

    #[test]
    fn test_identify_all_zero_ident() {
        assert_eq!(identify(&[0u8; 6]), ControllerId::Unknown(0x00_0000));
    }

    #[test]
    fn test_identify_deterministic() {
        let ident = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC];
        assert_eq!(identify(&ident), identify(&ident));
        assert_eq!(identify(&ident), ControllerId::Unknown(0x56_9ABC));
    }
}
