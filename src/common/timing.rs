// src/common/timing.rs

use core::time::Duration;

// Nominal values from the AM2302 (DHT22) datasheet, Sec 7 "Communication and
// Signal". The wire protocol itself is executed by the external protocol
// engine; these constants document the budget the capture loop is built
// around.

// === Wire Protocol Timing ===

/// Minimum host start pulse (line held low) before the sensor answers.
pub const HOST_START_PULSE_MIN: Duration = Duration::from_micros(800);
/// Typical host start pulse.
pub const HOST_START_PULSE_TYP: Duration = Duration::from_millis(1);
/// Sensor response preamble: 80 us low followed by 80 us high.
pub const SENSOR_RESPONSE_PULSE: Duration = Duration::from_micros(80);
/// Low period preceding every data bit.
pub const BIT_PREAMBLE_LOW: Duration = Duration::from_micros(50);
/// High period encoding a zero bit.
pub const BIT_HIGH_ZERO: Duration = Duration::from_micros(26);
/// High period encoding a one bit.
pub const BIT_HIGH_ONE: Duration = Duration::from_micros(70);

/// Upper bound on one full capture: start pulse, response preamble, forty
/// worst-case bits and the transfer drain. Must stay far below
/// [`SAMPLE_PERIOD`]; the supervisor never waits on completion and a capture
/// still in flight at the next period boundary races the restart.
pub const CAPTURE_DURATION_MAX: Duration = Duration::from_millis(6);

// === Sampling Cadence ===

/// Minimum interval between two sensor reads per the datasheet (the sensor
/// needs 2 s to refresh its internal measurement).
pub const SENSOR_REFRESH_INTERVAL_MIN: Duration = Duration::from_secs(2);

/// Interval between two capture starts.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(2000);

/// Base interval at which the supervisor tick runs. The sampling period is
/// derived by counting ticks, not from a real-time clock, so period jitter
/// accumulates at this resolution.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Supervisor ticks per sampling period.
pub const TICKS_PER_SAMPLE: u32 = (SAMPLE_PERIOD.as_millis() / TICK_INTERVAL.as_millis()) as u32;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_derivation() {
        assert_eq!(TICKS_PER_SAMPLE, 8);
    }

    #[test]
    fn test_capture_fits_inside_period() {
        assert!(CAPTURE_DURATION_MAX < SAMPLE_PERIOD);
    }

    #[test]
    fn test_period_respects_sensor_refresh() {
        assert!(SAMPLE_PERIOD >= SENSOR_REFRESH_INTERVAL_MIN);
    }
}
