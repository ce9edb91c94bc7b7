//! Error taxonomy for the codec.
//!
//! Every fallible surface returns [`Result<T>`] rather than asserting or panicking; the
//! only exception is an internal invariant of the rotation sort (the output permutation
//! must be a bijection over the block's indices), which would indicate a bug in this
//! crate rather than bad input and is guarded by `debug_assert!` instead.

use std::io;

/// Errors that can occur while transforming or reverse-transforming a stream.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The decoder encountered malformed framing.
    #[error("block {block}: {reason}")]
    Format {
        /// Zero-based ordinal of the block that failed to decode.
        block: usize,
        /// Human-readable description of what was wrong.
        reason: String,
    },

    /// The caller passed an argument the public API rejects outright.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;
