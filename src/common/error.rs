// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Am2302Error<E = ()>
where
    E: core::fmt::Debug, // Debug is all we can ask of a HAL error in no_std
{
    /// Underlying error from a collaborator implementation (acquisition
    /// engines at bring-up, report sink while emitting a cycle report).
    #[error("interface error: {0:?}")]
    Io(E),

    /// The trailing frame byte does not match the additive checksum of the
    /// payload bytes.
    #[error("checksum mismatch: frame carries {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },

    /// The protocol engine signalled completion while the transfer engine was
    /// still moving bytes; the frame is likely short.
    #[error("protocol engine completed before the transfer engine")]
    TransferLagged,

    /// A report line did not fit the fixed formatting buffer.
    #[error("report line exceeded the formatting buffer")]
    ReportOverflow,
}

// Allow mapping from an underlying collaborator error via `?`
impl<E: core::fmt::Debug> From<E> for Am2302Error<E> {
    fn from(e: E) -> Self {
        Am2302Error::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work in no_std,
// the underlying error type `E` only has to implement `core::fmt::Debug`.
