// src/sampler/mod.rs

// The periodic supervisor: owns the sampling cadence and the
// "report previous result, then start next capture" sequence.
pub mod runner;
pub mod sync_sampler;

// --- Public Re-exports ---
pub use runner::run;
#[cfg(feature = "async")]
pub use runner::run_async;
pub use sync_sampler::{
    Sampler, DATA_CORRUPTED_LINE, DATA_VALID_LINE, INIT_FAILED_LINE, INIT_OK_LINE,
};
