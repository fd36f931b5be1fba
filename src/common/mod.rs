// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod checksum;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod reading;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From checksum.rs
pub use checksum::{additive_checksum, frame_checksum_ok};

// From error.rs
pub use error::Am2302Error;

// From frame.rs
pub use frame::{Frame, FRAME_LEN};

// From hal_traits.rs
pub use hal_traits::{AcquisitionInterface, ReportSink};

// From reading.rs
pub use reading::{Reading, Tenths};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.
