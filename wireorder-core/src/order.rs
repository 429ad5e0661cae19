//! Byte order descriptors.
//!
//! [`Endianness`] names an order as a value, for formats that record their
//! order in a header. [`ByteOrder`] names it as a type, for formats that fix
//! it at compile time.

use core::fmt;
use core::str::FromStr;

use snafu::Snafu;

use crate::bytes::{BufferTooSmallSnafu, BytesError, UnexpectedEofSnafu};
use crate::swap::Swap;

/// The byte order of the compilation target.
pub const HOST: Endianness = by_host_order!(little => Endianness::Little, big => Endianness::Big);

/// A byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endianness {
    /// The order of the compilation target.
    pub const HOST: Self = HOST;
    /// Network byte order.
    pub const NETWORK: Self = Self::Big;
    /// Little-endian.
    pub const LITTLE: Self = Self::Little;
    /// Big-endian.
    pub const BIG: Self = Self::Big;

    /// Both variants, little-endian first.
    pub const VARIANTS: [Self; 2] = [Self::Little, Self::Big];

    /// The other order.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }

    /// True if this is the order of the compilation target.
    #[inline]
    #[must_use]
    pub const fn is_host(self) -> bool {
        matches!((self, HOST), (Self::Little, Self::Little) | (Self::Big, Self::Big))
    }

    /// True for [`Endianness::Little`].
    #[inline]
    #[must_use]
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }

    /// True for [`Endianness::Big`].
    #[inline]
    #[must_use]
    pub const fn is_big(self) -> bool {
        matches!(self, Self::Big)
    }

    /// Convert a host-order value to this order.
    ///
    /// ```
    /// use wireorder_core::Endianness;
    ///
    /// let order: Endianness = "be".parse().unwrap();
    /// assert_eq!(order.to_wire(0x0102u16).to_ne_bytes(), [0x01, 0x02]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_wire<T: Swap>(self, v: T) -> T {
        match self {
            Self::Little => v.to_little_endian(),
            Self::Big => v.to_big_endian(),
        }
    }

    /// Convert a value in this order to host order.
    #[inline]
    #[must_use]
    pub fn from_wire<T: Swap>(self, v: T) -> T {
        match self {
            Self::Little => v.from_little_endian(),
            Self::Big => v.from_big_endian(),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => f.write_str("little-endian"),
            Self::Big => f.write_str("big-endian"),
        }
    }
}

/// Error returned when parsing an [`Endianness`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum ParseEndiannessError {
    /// The name is not one of the recognized spellings.
    #[snafu(display(
        "unrecognized byte order name, expected one of: little, le, big, be, network, native, host"
    ))]
    UnknownName,
}

impl FromStr for Endianness {
    type Err = ParseEndiannessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Endianness); 9] = [
            ("little", Endianness::Little),
            ("le", Endianness::Little),
            ("little-endian", Endianness::Little),
            ("big", Endianness::Big),
            ("be", Endianness::Big),
            ("big-endian", Endianness::Big),
            ("network", Endianness::NETWORK),
            ("native", HOST),
            ("host", HOST),
        ];

        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, order)| order)
            .ok_or(UnknownNameSnafu.build())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::BigEndian {}
    impl Sealed for super::LittleEndian {}
    impl Sealed for super::NativeEndian {}
}

/// Most-significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigEndian;

/// Least-significant byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LittleEndian;

/// The order of the compilation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NativeEndian;

/// Network byte order.
pub type NetworkEndian = BigEndian;

/// A byte order fixed at compile time.
///
/// # Example
///
/// ```
/// use wireorder_core::{BigEndian, ByteOrder, LittleEndian};
///
/// let mut buf = [0u8; 4];
/// BigEndian::write(0x0102_0304u32, &mut buf).unwrap();
/// assert_eq!(buf, [1, 2, 3, 4]);
///
/// LittleEndian::write(0x0102_0304u32, &mut buf).unwrap();
/// assert_eq!(buf, [4, 3, 2, 1]);
/// assert_eq!(LittleEndian::read::<u32>(&buf).unwrap(), 0x0102_0304);
/// ```
pub trait ByteOrder: sealed::Sealed + Copy + Default + fmt::Debug {
    /// The order as a value.
    const ENDIANNESS: Endianness;

    /// Convert a host-order value to this order.
    #[inline(always)]
    fn to_wire<T: Swap>(v: T) -> T {
        Self::ENDIANNESS.to_wire(v)
    }

    /// Convert a value in this order to host order.
    #[inline(always)]
    fn from_wire<T: Swap>(v: T) -> T {
        Self::ENDIANNESS.from_wire(v)
    }

    /// Write `v` in this order to the front of `buf`.
    ///
    /// Returns the number of bytes written.
    #[inline]
    fn write<T: Swap>(v: T, buf: &mut [u8]) -> Result<usize, BytesError> {
        if buf.len() < T::SIZE {
            return BufferTooSmallSnafu {
                needed: T::SIZE,
                available: buf.len(),
            }
            .fail();
        }
        buf[..T::SIZE].copy_from_slice(Self::to_wire(v).to_ne_bytes().as_ref());
        Ok(T::SIZE)
    }

    /// Read a value in this order from the front of `buf`.
    #[inline]
    fn read<T: Swap>(buf: &[u8]) -> Result<T, BytesError> {
        if buf.len() < T::SIZE {
            return UnexpectedEofSnafu {
                needed: T::SIZE,
                available: buf.len(),
            }
            .fail();
        }
        let mut bytes = T::Bytes::default();
        bytes.as_mut().copy_from_slice(&buf[..T::SIZE]);
        Ok(Self::from_wire(T::from_ne_bytes(bytes)))
    }
}

impl ByteOrder for BigEndian {
    const ENDIANNESS: Endianness = Endianness::Big;
}

impl ByteOrder for LittleEndian {
    const ENDIANNESS: Endianness = Endianness::Little;
}

impl ByteOrder for NativeEndian {
    const ENDIANNESS: Endianness = HOST;
}
