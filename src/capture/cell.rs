// src/capture/cell.rs

use crate::common::error::Am2302Error;
use core::convert::Infallible;
use core::fmt::Debug;
use core::sync::atomic::{AtomicBool, Ordering};

/// Completion state of one capture cycle, as observed from the flags alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CapturePhase {
    /// No completion signal observed since the last [`CaptureCell::arm`].
    Pending,
    /// Exactly one of the two engines has signalled.
    PartiallyResolved,
    /// Both engines have signalled; the verdict is final.
    Resolved,
}

/// Final verdict of a resolved capture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureVerdict {
    /// The transfer engine had finished by the time the protocol engine
    /// signalled; the frame buffer holds a complete capture.
    Complete,
    /// The protocol engine finished first; the transfer likely under-ran and
    /// the frame may be short.
    TransferLagged,
}

impl CaptureVerdict {
    /// Converts the verdict into a result, for callers that treat a lagged
    /// transfer as an error.
    pub fn into_result<E: Debug>(self) -> Result<(), Am2302Error<E>> {
        match self {
            CaptureVerdict::Complete => Ok(()),
            CaptureVerdict::TransferLagged => Err(Am2302Error::TransferLagged),
        }
    }
}

/// Shared completion flags of the capture in flight.
///
/// One instance lives for the whole process, typically in a `static`, and is
/// handed to [`AcquisitionInterface::initialize`] so the two engine
/// interrupts can signal into it. The handlers touch disjoint flags and
/// carry no business logic; deciding what to do with a verdict is the
/// supervisor's job alone.
///
/// Per cycle the flags move `false -> true` only; the sole reset is
/// [`arm`](Self::arm), called by the supervisor when it starts a new
/// capture. If one engine never signals, the cycle never resolves, and the
/// supervisor's next-period restart is the only recovery.
///
/// [`AcquisitionInterface::initialize`]: crate::common::hal_traits::AcquisitionInterface::initialize
pub struct CaptureCell {
    transfer_done: AtomicBool,
    protocol_done: AtomicBool,
    capture_error: AtomicBool,
}

impl CaptureCell {
    pub const fn new() -> Self {
        CaptureCell {
            transfer_done: AtomicBool::new(false),
            protocol_done: AtomicBool::new(false),
            capture_error: AtomicBool::new(false),
        }
    }

    /// Clears all flags for the next capture.
    ///
    /// Must only be called from the supervisor context, and only at the
    /// moment a new capture is started.
    pub fn arm(&self) {
        self.transfer_done.store(false, Ordering::Release);
        self.protocol_done.store(false, Ordering::Release);
        self.capture_error.store(false, Ordering::Release);
    }

    /// Transfer-engine completion entry point. Interrupt-safe.
    ///
    /// Records that every captured byte has been moved into the frame
    /// buffer. Nothing else is touched.
    pub fn on_transfer_complete(&self) {
        self.transfer_done.store(true, Ordering::Release);
    }

    /// Protocol-engine completion entry point. Interrupt-safe.
    ///
    /// Records protocol completion, then derives the error verdict from the
    /// transfer flag as it stands at this instant: a protocol that frames
    /// out before the transfer engine has drained the bytes means the
    /// capture is erroneous.
    pub fn on_protocol_complete(&self) {
        self.protocol_done.store(true, Ordering::Release);
        let transfer_done = self.transfer_done.load(Ordering::Acquire);
        self.capture_error.store(!transfer_done, Ordering::Release);
    }

    #[inline]
    pub fn transfer_done(&self) -> bool {
        self.transfer_done.load(Ordering::Acquire)
    }

    #[inline]
    pub fn protocol_done(&self) -> bool {
        self.protocol_done.load(Ordering::Acquire)
    }

    /// The stored completion-order verdict. Meaningful once the protocol
    /// engine has signalled; false before that.
    #[inline]
    pub fn capture_error(&self) -> bool {
        self.capture_error.load(Ordering::Acquire)
    }

    /// Current position in the per-cycle state machine.
    pub fn phase(&self) -> CapturePhase {
        match (self.transfer_done(), self.protocol_done()) {
            (false, false) => CapturePhase::Pending,
            (true, true) => CapturePhase::Resolved,
            _ => CapturePhase::PartiallyResolved,
        }
    }

    /// Non-blocking poll for the final verdict.
    ///
    /// Returns `WouldBlock` until both engines have signalled. A capture
    /// whose transfer never completes therefore never yields a verdict
    /// here; the error flag is still readable through
    /// [`capture_error`](Self::capture_error).
    pub fn try_verdict(&self) -> nb::Result<CaptureVerdict, Infallible> {
        match self.phase() {
            CapturePhase::Resolved => {
                if self.capture_error() {
                    Ok(CaptureVerdict::TransferLagged)
                } else {
                    Ok(CaptureVerdict::Complete)
                }
            }
            _ => Err(nb::Error::WouldBlock),
        }
    }
}

impl Default for CaptureCell {
    fn default() -> Self {
        Self::new()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cell_is_pending() {
        let cell = CaptureCell::new();
        assert!(!cell.transfer_done());
        assert!(!cell.protocol_done());
        assert!(!cell.capture_error());
        assert_eq!(cell.phase(), CapturePhase::Pending);
        assert_eq!(cell.try_verdict(), Err(nb::Error::WouldBlock));
    }

    #[test]
    fn test_transfer_then_protocol_is_clean() {
        let cell = CaptureCell::new();
        cell.on_transfer_complete();
        assert_eq!(cell.phase(), CapturePhase::PartiallyResolved);
        assert_eq!(cell.try_verdict(), Err(nb::Error::WouldBlock));

        cell.on_protocol_complete();
        assert_eq!(cell.phase(), CapturePhase::Resolved);
        assert!(!cell.capture_error());
        assert_eq!(cell.try_verdict(), Ok(CaptureVerdict::Complete));
    }

    #[test]
    fn test_protocol_before_transfer_flags_error() {
        let cell = CaptureCell::new();
        cell.on_protocol_complete();
        assert!(cell.capture_error());
        assert_eq!(cell.phase(), CapturePhase::PartiallyResolved);
        // still unresolved: the transfer never signalled
        assert_eq!(cell.try_verdict(), Err(nb::Error::WouldBlock));
    }

    #[test]
    fn test_error_verdict_latched_at_protocol_instant() {
        let cell = CaptureCell::new();
        cell.on_protocol_complete();
        // the transfer arriving late does not clear the verdict
        cell.on_transfer_complete();
        assert_eq!(cell.phase(), CapturePhase::Resolved);
        assert!(cell.capture_error());
        assert_eq!(cell.try_verdict(), Ok(CaptureVerdict::TransferLagged));
    }

    #[test]
    fn test_arm_clears_all_flags() {
        let cell = CaptureCell::new();
        cell.on_protocol_complete();
        cell.on_transfer_complete();
        cell.arm();
        assert!(!cell.transfer_done());
        assert!(!cell.protocol_done());
        assert!(!cell.capture_error());
        assert_eq!(cell.phase(), CapturePhase::Pending);
    }

    #[test]
    fn test_flags_are_monotonic_between_arms() {
        let cell = CaptureCell::new();
        cell.on_transfer_complete();
        cell.on_transfer_complete();
        assert!(cell.transfer_done());
        cell.on_protocol_complete();
        assert!(cell.protocol_done());
        assert!(!cell.capture_error());
    }

    #[test]
    fn test_verdict_into_result() {
        assert!(CaptureVerdict::Complete.into_result::<()>().is_ok());
        assert!(matches!(
            CaptureVerdict::TransferLagged.into_result::<()>(),
            Err(Am2302Error::TransferLagged)
        ));
    }

    #[test]
    fn test_cell_usable_from_static() {
        static SIGNALS: CaptureCell = CaptureCell::new();
        SIGNALS.arm();
        SIGNALS.on_transfer_complete();
        SIGNALS.on_protocol_complete();
        assert_eq!(SIGNALS.try_verdict(), Ok(CaptureVerdict::Complete));
        SIGNALS.arm();
        assert_eq!(SIGNALS.phase(), CapturePhase::Pending);
    }
}
