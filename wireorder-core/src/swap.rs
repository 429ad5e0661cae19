//! Byte reversal and the width-generic [`Swap`] trait.

use crate::convert::{
    from_big_endian_u16, from_big_endian_u32, from_big_endian_u64, from_little_endian_u16,
    from_little_endian_u32, from_little_endian_u64, to_big_endian_u16, to_big_endian_u32,
    to_big_endian_u64, to_little_endian_u16, to_little_endian_u32, to_little_endian_u64,
};

/// Reverse the two bytes of `v`.
#[inline(always)]
#[must_use]
pub const fn reverse_u16(v: u16) -> u16 {
    (v << 8) | (v >> 8)
}

/// Reverse the four bytes of `v`.
#[inline(always)]
#[must_use]
pub const fn reverse_u32(v: u32) -> u32 {
    let v = ((v & 0x00ff_00ff) << 8) | ((v >> 8) & 0x00ff_00ff);
    (v << 16) | (v >> 16)
}

/// Reverse the eight bytes of `v`.
#[inline(always)]
#[must_use]
pub const fn reverse_u64(v: u64) -> u64 {
    let v = ((v & 0x00ff_00ff_00ff_00ff) << 8) | ((v >> 8) & 0x00ff_00ff_00ff_00ff);
    let v = ((v & 0x0000_ffff_0000_ffff) << 16) | ((v >> 16) & 0x0000_ffff_0000_ffff);
    (v << 32) | (v >> 32)
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// A fixed-width unsigned integer that can be moved between host order and
/// a wire order.
///
/// Implemented for `u16`, `u32` and `u64`. Sealed.
///
/// # Example
///
/// ```
/// use wireorder_core::Swap;
///
/// let v: u32 = 0x0102_0304;
/// assert_eq!(v.reverse_bytes(), 0x0403_0201);
/// assert_eq!(v.to_big_endian().from_big_endian(), v);
/// ```
pub trait Swap: Copy + Eq + core::fmt::Debug + sealed::Sealed {
    /// Width in bytes.
    const SIZE: usize;

    /// Byte array of exactly [`SIZE`](Self::SIZE) bytes.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Reverse the bytes of `self`.
    fn reverse_bytes(self) -> Self;

    /// Host order to big-endian.
    fn to_big_endian(self) -> Self;

    /// Host order to little-endian.
    fn to_little_endian(self) -> Self;

    /// Big-endian to host order.
    fn from_big_endian(self) -> Self;

    /// Little-endian to host order.
    fn from_little_endian(self) -> Self;

    /// The in-memory representation of `self`.
    fn to_ne_bytes(self) -> Self::Bytes;

    /// Rebuild a value from its in-memory representation.
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_swap {
    ($($ty:ty => $reverse:ident, $to_be:ident, $to_le:ident, $from_be:ident, $from_le:ident);+ $(;)?) => {
        $(
            impl Swap for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                type Bytes = [u8; core::mem::size_of::<$ty>()];

                #[inline(always)]
                fn reverse_bytes(self) -> Self {
                    $reverse(self)
                }

                #[inline(always)]
                fn to_big_endian(self) -> Self {
                    $to_be(self)
                }

                #[inline(always)]
                fn to_little_endian(self) -> Self {
                    $to_le(self)
                }

                #[inline(always)]
                fn from_big_endian(self) -> Self {
                    $from_be(self)
                }

                #[inline(always)]
                fn from_little_endian(self) -> Self {
                    $from_le(self)
                }

                #[inline(always)]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                #[inline(always)]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )+
    };
}

impl_swap! {
    u16 => reverse_u16, to_big_endian_u16, to_little_endian_u16, from_big_endian_u16, from_little_endian_u16;
    u32 => reverse_u32, to_big_endian_u32, to_little_endian_u32, from_big_endian_u32, from_little_endian_u32;
    u64 => reverse_u64, to_big_endian_u64, to_little_endian_u64, from_big_endian_u64, from_little_endian_u64;
}
