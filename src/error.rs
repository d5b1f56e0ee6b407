//! Error types for codec operations.

use thiserror::Error;

/// Failures reported by [`HuffmanCodec`](crate::HuffmanCodec) operations.
///
/// Both variants are expected, reportable conditions: they describe bad
/// input, not a broken codec. All operations are deterministic, so a
/// failure is never transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The message contains a character the codec was never trained on.
    #[error("symbol {0:?} is not part of the trained alphabet")]
    UnknownSymbol(char),

    /// The compressed stream ran out of bits before the message terminator
    /// appeared. The input is truncated, corrupt, or was produced by a
    /// codec trained on a different corpus.
    #[error("compressed stream ended before the message terminator")]
    TruncatedMessage,
}

/// Type alias for Result with [`CodecError`].
pub type Result<T> = std::result::Result<T, CodecError>;
