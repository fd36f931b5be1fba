// src/sampler/sync_sampler.rs

use crate::capture::CaptureCell;
use crate::common::{
    error::Am2302Error,
    frame::Frame,
    hal_traits::{AcquisitionInterface, ReportSink},
    reading::Reading,
};
use arrayvec::ArrayString;
use core::fmt::Write as _;

#[cfg(feature = "defmt")]
use defmt::{debug, warn};
#[cfg(feature = "log")]
use log::{debug, warn};
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

/// Validity line emitted when the frame checksum matches.
pub const DATA_VALID_LINE: &str = "data valid";
/// Validity line emitted when the frame checksum does not match.
pub const DATA_CORRUPTED_LINE: &str = "data corrupted";
/// One-time line emitted when engine configuration succeeds.
pub const INIT_OK_LINE: &str = "acquisition ready";
/// One-time line emitted when engine configuration fails.
pub const INIT_FAILED_LINE: &str = "acquisition init failed";

// Longest line is the hex dump at 25 characters; 48 leaves headroom for the
// prefixes.
const REPORT_LINE_CAP: usize = 48;

/// Periodic supervisor over the capture cycle.
///
/// An external scheduling primitive calls [`tick`](Self::tick) once per base
/// interval (see [`timing::TICK_INTERVAL`]); the sampling period is derived
/// by counting invocations against `ticks_per_period`. At each period
/// boundary the supervisor reports the previous capture (hex dump, checksum
/// validity, humidity, temperature), zeroes the frame and unconditionally
/// starts the next capture. It never waits on capture completion: the design
/// assumes a capture finishes well inside one period
/// ([`timing::CAPTURE_DURATION_MAX`]).
///
/// The completion-order verdict the [`CaptureCell`] derives is stored and
/// queryable but does not gate reporting: validity comes from the frame
/// checksum alone.
///
/// [`timing::TICK_INTERVAL`]: crate::common::timing::TICK_INTERVAL
/// [`timing::CAPTURE_DURATION_MAX`]: crate::common::timing::CAPTURE_DURATION_MAX
pub struct Sampler<A, R>
where
    A: AcquisitionInterface,
    R: ReportSink,
{
    engine: A,
    sink: R,
    signals: &'static CaptureCell,
    frame: Frame,
    ticks: u32,
    ticks_per_period: u32,
    started: bool,
    initialized: bool,
}

impl<A, R> Sampler<A, R>
where
    A: AcquisitionInterface,
    R: ReportSink,
{
    /// Creates a supervisor driving `engine` and reporting into `sink`.
    ///
    /// `ticks_per_period` is the number of [`tick`](Self::tick) invocations
    /// that make up one sampling period ([`timing::TICKS_PER_SAMPLE`] for
    /// the stock cadence); it is clamped to at least one.
    ///
    /// [`timing::TICKS_PER_SAMPLE`]: crate::common::timing::TICKS_PER_SAMPLE
    pub fn new(engine: A, sink: R, signals: &'static CaptureCell, ticks_per_period: u32) -> Self {
        Sampler {
            engine,
            sink,
            signals,
            frame: Frame::zeroed(),
            ticks: 0,
            ticks_per_period: ticks_per_period.max(1),
            started: false,
            initialized: false,
        }
    }

    /// Configures the protocol and transfer engines.
    ///
    /// The outcome is surfaced once on the report sink (best-effort) and
    /// recorded in [`is_initialized`](Self::is_initialized). Failure is not
    /// fatal: [`tick`](Self::tick) keeps starting captures against the
    /// unconfigured engines, which simply never signal completion.
    pub fn initialize(&mut self) -> Result<(), Am2302Error<A::Error>> {
        match self.engine.initialize(self.signals) {
            Ok(()) => {
                self.initialized = true;
                let _ = self.sink.write_line(INIT_OK_LINE);
                debug!("acquisition engines configured");
                Ok(())
            }
            Err(e) => {
                let _ = self.sink.write_line(INIT_FAILED_LINE);
                warn!("acquisition engine configuration failed");
                Err(Am2302Error::Io(e))
            }
        }
    }

    /// Whether engine configuration has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The completion flags this supervisor arms and the engines signal
    /// into.
    pub fn signals(&self) -> &'static CaptureCell {
        self.signals
    }

    /// Per-tick entry point, to be invoked once per base interval.
    ///
    /// Below the period boundary this only advances the tick counter. At the
    /// boundary it clears the completion flags, reports the previous frame
    /// (if a capture was ever started), zeroes the buffer and starts the
    /// next capture. A sink error is returned to the caller but never
    /// prevents the restart; every period begins a fresh capture regardless
    /// of the previous outcome.
    pub fn tick(&mut self) -> Result<(), Am2302Error<R::Error>> {
        self.ticks += 1;
        if self.ticks < self.ticks_per_period {
            return Ok(());
        }
        self.ticks = 0;

        let mut outcome = Ok(());
        if self.started {
            // Flags are cleared before the report is produced; the report
            // consequently never consults the stored verdict.
            self.signals.arm();
            let snapshot = self.frame;
            outcome = self.report(&snapshot);
            self.frame.clear();
        }

        self.started = true;
        debug!("starting capture");
        self.engine.start_capture(&mut self.frame);
        outcome
    }

    /// Emits the four report lines for one frame snapshot.
    fn report(&mut self, frame: &Frame) -> Result<(), Am2302Error<R::Error>> {
        let mut line = ArrayString::<REPORT_LINE_CAP>::new();
        write!(line, "read data: {}", frame).map_err(|_| Am2302Error::ReportOverflow)?;
        self.sink.write_line(&line).map_err(Am2302Error::Io)?;

        let valid = frame.checksum_ok();
        if !valid {
            warn!("frame checksum mismatch");
        }
        self.sink
            .write_line(if valid { DATA_VALID_LINE } else { DATA_CORRUPTED_LINE })
            .map_err(Am2302Error::Io)?;

        // Decoding does not depend on validity; both values are reported
        // either way.
        let reading = Reading::decode(frame);

        line.clear();
        write!(line, "humidity: {}", reading.humidity).map_err(|_| Am2302Error::ReportOverflow)?;
        self.sink.write_line(&line).map_err(Am2302Error::Io)?;

        line.clear();
        write!(line, "temperature: {}", reading.temperature)
            .map_err(|_| Am2302Error::ReportOverflow)?;
        self.sink.write_line(&line).map_err(Am2302Error::Io)?;

        Ok(())
    }
}
