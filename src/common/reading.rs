// src/common/reading.rs

use super::frame::Frame;
use core::fmt;

/// A sensor quantity in tenths of its unit (tenths of a percent for
/// humidity, tenths of a degree for temperature).
///
/// The AM2302 reports both channels as unsigned 16-bit values scaled by ten;
/// this type keeps the raw value and splits it into integer and fractional
/// digits on demand. The temperature sign bit is not interpreted: readings
/// below zero surface as their raw magnitude.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tenths(u16);

impl Tenths {
    pub const fn from_raw(raw: u16) -> Self {
        Tenths(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Integer part, `raw / 10`.
    #[inline]
    pub const fn whole(self) -> u16 {
        self.0 / 10
    }

    /// Fractional digit, `raw % 10`.
    #[inline]
    pub const fn tenth(self) -> u16 {
        self.0 % 10
    }
}

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.whole(), self.tenth())
    }
}

/// Decoded physical values of one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Relative humidity in tenths of a percent.
    pub humidity: Tenths,
    /// Temperature in tenths of a degree Celsius.
    pub temperature: Tenths,
}

impl Reading {
    /// Extracts humidity and temperature from the first four frame bytes.
    ///
    /// Byte layout: `[0]`/`[1]` humidity big-endian, `[2]`/`[3]` temperature
    /// big-endian. Pure: the checksum byte and frame validity play no part
    /// here.
    pub const fn decode(frame: &Frame) -> Self {
        let bytes = frame.as_bytes();
        Reading {
            humidity: Tenths::from_raw(u16::from_be_bytes([bytes[0], bytes[1]])),
            temperature: Tenths::from_raw(u16::from_be_bytes([bytes[2], bytes[3]])),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_frame() {
        // 0x0195 = 405 tenths of a percent, 0x00C8 = 200 tenths of a degree
        let frame = Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x5E]);
        let reading = Reading::decode(&frame);
        assert_eq!(reading.humidity.raw(), 405);
        assert_eq!(reading.temperature.raw(), 200);
        assert_eq!(reading.humidity.whole(), 40);
        assert_eq!(reading.humidity.tenth(), 5);
        assert_eq!(reading.temperature.whole(), 20);
        assert_eq!(reading.temperature.tenth(), 0);
    }

    #[test]
    fn test_decode_ignores_checksum_byte() {
        let valid = Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x5E]);
        let corrupted = Frame::from_bytes([0x01, 0x95, 0x00, 0xC8, 0x00]);
        assert_eq!(Reading::decode(&valid), Reading::decode(&corrupted));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let frame = Frame::from_bytes([0x03, 0x0A, 0x01, 0x18, 0x26]);
        assert_eq!(Reading::decode(&frame), Reading::decode(&frame));
    }

    #[test]
    fn test_tenths_display() {
        assert_eq!(format!("{}", Tenths::from_raw(405)), "40.5");
        assert_eq!(format!("{}", Tenths::from_raw(200)), "20.0");
        assert_eq!(format!("{}", Tenths::from_raw(7)), "0.7");
        assert_eq!(format!("{}", Tenths::from_raw(0)), "0.0");
        assert_eq!(format!("{}", Tenths::from_raw(u16::MAX)), "6553.5");
    }

    #[test]
    fn test_decode_zero_frame() {
        let reading = Reading::decode(&Frame::zeroed());
        assert_eq!(reading.humidity.raw(), 0);
        assert_eq!(reading.temperature.raw(), 0);
    }
}
