// src/common/frame.rs

use super::checksum::{additive_checksum, frame_checksum_ok};
use super::error::Am2302Error;
use core::fmt;

/// Number of bytes in one captured frame: 16-bit humidity, 16-bit
/// temperature, 8-bit additive checksum.
pub const FRAME_LEN: usize = 5;

/// One captured sensor frame.
///
/// The transfer engine fills this buffer during a capture; the supervisor
/// reads it after the period boundary. The `Display` implementation renders
/// the bytes as a dot-separated hex dump (`01.95.00.C8.5E`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Creates a frame with every byte zero, the state between captures.
    pub const fn zeroed() -> Self {
        Frame([0; FRAME_LEN])
    }

    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8; FRAME_LEN] {
        &mut self.0
    }

    /// Resets every byte to zero.
    pub fn clear(&mut self) {
        self.0 = [0; FRAME_LEN];
    }

    /// Returns true if the trailing byte matches the additive checksum of
    /// the four payload bytes.
    #[inline]
    pub fn checksum_ok(&self) -> bool {
        frame_checksum_ok(&self.0)
    }

    /// Verifies the trailing checksum byte, reporting both values on
    /// mismatch.
    pub fn verify_checksum(&self) -> Result<(), Am2302Error> {
        let expected = self.0[FRAME_LEN - 1];
        let calculated = additive_checksum(&self.0[..FRAME_LEN - 1]);
        if calculated == expected {
            Ok(())
        } else {
            Err(Am2302Error::ChecksumMismatch { expected, calculated })
        }
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_frame() {
        let frame = Frame::zeroed();
        assert_eq!(frame.as_bytes(), &[0; FRAME_LEN]);
        assert_eq!(frame, Frame::default());
    }

    #[test]
    fn test_clear_resets_bytes() {
        let mut frame = Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x5E]);
        frame.clear();
        assert_eq!(frame, Frame::zeroed());
    }

    #[test]
    fn test_mutation_through_as_mut_bytes() {
        let mut frame = Frame::zeroed();
        frame.as_mut_bytes()[1] = 0x95;
        assert_eq!(frame.as_bytes()[1], 0x95);
    }

    #[test]
    fn test_display_hex_dump() {
        let frame = Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x5E]);
        assert_eq!(format!("{}", frame), "01.95.00.C8.5E");
        assert_eq!(format!("{}", Frame::zeroed()), "00.00.00.00.00");
    }

    #[test]
    fn test_checksum_ok() {
        assert!(Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x5E]).checksum_ok());
        assert!(!Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x00]).checksum_ok());
    }

    #[test]
    fn test_verify_checksum_reports_both_values() {
        let frame = Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x00]);
        assert!(matches!(
            frame.verify_checksum(),
            Err(Am2302Error::ChecksumMismatch { expected: 0x00, calculated: 0x5E })
        ));
        assert!(Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x5E]).verify_checksum().is_ok());
    }
}
