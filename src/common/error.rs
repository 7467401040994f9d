// src/common/error.rs

/// Errors produced by the LD2420 driver.
///
/// Generic over the transport's own error type so HAL failures surface
/// unchanged through [`Ld2420Error::Io`].
#[derive(Debug, thiserror::Error)]
pub enum Ld2420Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying I/O error from the transport implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// A write or flush kept returning `WouldBlock` past its deadline.
    #[error("Operation timed out")]
    Timeout,

    /// The operation needs a successfully initialized driver.
    #[error("Driver is not initialized")]
    NotInitialized,

    /// No transport is bound to the driver.
    #[error("No transport bound")]
    NoTransport,

    /// The command string could not be encoded; nothing was transmitted.
    #[error("Malformed command string, no bytes transmitted: {0}")]
    MalformedCommand(#[from] HexError),
}

/// Reasons a hexadecimal command string is rejected by the encoder.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum HexError {
    /// A character other than 0-9 / A-F remained after normalization.
    /// `position` counts normalized hex digits before the offending one.
    #[error("invalid hex digit '{character}' at digit {position}")]
    InvalidDigit { character: char, position: usize },

    /// The normalized string has an odd number of hex digits.
    #[error("odd number of hex digits ({digits})")]
    OddLength { digits: usize },

    /// The decoded command does not fit in the command buffer.
    #[error("command longer than {capacity} bytes")]
    TooLong { capacity: usize },
}
