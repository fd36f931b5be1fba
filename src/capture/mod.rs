// src/capture/mod.rs

// The completion synchronizer: shared flag state between the two engine
// interrupts and the supervisor.
mod cell;

// --- Public Re-exports ---
pub use cell::{CaptureCell, CapturePhase, CaptureVerdict};
