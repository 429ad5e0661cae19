//! Byte serialization traits.

use crate::bytes::BytesError;

/// Serialize a value to bytes.
///
/// Caller provides the buffer. Returns bytes written.
///
/// # Example
///
/// ```
/// use wireorder_core::{Le, ToBytes};
///
/// let mut buf = [0u8; 2];
/// let written = Le(0x1234u16).to_bytes(&mut buf).unwrap();
/// assert_eq!(written, 2);
/// assert_eq!(buf, [0x34, 0x12]);
/// ```
pub trait ToBytes {
    /// Maximum serialized size, if known at compile time.
    const MAX_SIZE: Option<usize> = None;

    /// Serialize into the provided buffer.
    ///
    /// Returns the number of bytes written.
    fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError>;

    /// Runtime size calculation.
    ///
    /// Default returns `MAX_SIZE` if known.
    #[inline]
    fn byte_len(&self) -> Option<usize> {
        Self::MAX_SIZE
    }
}

/// Deserialize from bytes to an owned value.
///
/// # Example
///
/// ```
/// use wireorder_core::{Be, FromBytes};
///
/// let bytes = [0x12u8, 0x34];
/// let (value, consumed) = Be::<u16>::from_bytes(&bytes).unwrap();
/// assert_eq!(value.get(), 0x1234);
/// assert_eq!(consumed, 2);
/// ```
pub trait FromBytes: Sized {
    /// Deserialize from bytes.
    ///
    /// Returns the value and number of bytes consumed.
    fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError>;
}
