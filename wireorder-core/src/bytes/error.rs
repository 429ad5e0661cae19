//! Error types for the byte codec.

use snafu::Snafu;

/// Error during byte serialization or deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum BytesError {
    /// Buffer too small for serialization.
    #[snafu(display("buffer too small: needed {needed} bytes, only {available} available"))]
    BufferTooSmall {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// Unexpected end of input.
    #[snafu(display("unexpected end of input: needed {needed} bytes, only {available} available"))]
    UnexpectedEof {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },
}

impl BytesError {
    /// Bytes the failed operation required.
    #[must_use]
    pub const fn needed(&self) -> usize {
        match *self {
            Self::BufferTooSmall { needed, .. } | Self::UnexpectedEof { needed, .. } => needed,
        }
    }

    /// Bytes that were actually present.
    #[must_use]
    pub const fn available(&self) -> usize {
        match *self {
            Self::BufferTooSmall { available, .. } | Self::UnexpectedEof { available, .. } => {
                available
            }
        }
    }
}

/// Result type for bytes operations.
pub type Result<T, E = BytesError> = core::result::Result<T, E>;
