// src/common/hal_traits.rs

use super::frame::Frame;
use crate::capture::CaptureCell;
use core::fmt::Debug;

/// Abstraction over the paired protocol and transfer engines that execute
/// one capture.
///
/// An implementation bundles the bit-level timing engine that drives the
/// sensor line and the transfer engine that streams the captured bytes into
/// the frame buffer (a PIO state machine plus a DMA channel on a typical
/// target). Pin and channel selection belong to the implementation's
/// constructor.
pub trait AcquisitionInterface {
    /// Associated error type for hardware configuration failures.
    type Error: Debug;

    /// Claims the hardware resources and registers completion signalling.
    ///
    /// Both engines must deliver their completion interrupts into `signals`:
    /// the transfer engine through [`CaptureCell::on_transfer_complete`], the
    /// protocol engine through [`CaptureCell::on_protocol_complete`].
    /// Acknowledging the interrupt at the peripheral is the implementation's
    /// job; the cell only records completion.
    ///
    /// Returns `Err` if the hardware resources cannot be claimed.
    fn initialize(&mut self, signals: &'static CaptureCell) -> Result<(), Self::Error>;

    /// Begins one capture into `frame`.
    ///
    /// Fire-and-forget: the call returns immediately and completion is
    /// signalled later, at most once per engine, in any relative order,
    /// through the callbacks registered at [`initialize`](Self::initialize).
    fn start_capture(&mut self, frame: &mut Frame);
}

/// Abstraction for the line-oriented console the supervisor reports into.
pub trait ReportSink {
    /// Associated error type for output errors.
    type Error: Debug;

    /// Writes one report line. Line termination is the sink's concern.
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}
