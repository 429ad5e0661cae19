//! Host-order conversions.
//!
//! Each function is the identity when the requested order matches the host
//! and a byte reversal otherwise. The choice is made by `cfg(target_endian)`,
//! so no branch survives into the compiled function.

use crate::swap::{Swap, reverse_u16, reverse_u32, reverse_u64};

macro_rules! conversions {
    ($($ty:ident => $reverse:ident {
        to_big: $to_be:ident,
        to_little: $to_le:ident,
        from_big: $from_be:ident,
        from_little: $from_le:ident $(,)?
    })+) => {
        $(
            #[doc = concat!("Convert a host-order `", stringify!($ty), "` to big-endian.")]
            #[inline(always)]
            #[must_use]
            pub const fn $to_be(v: $ty) -> $ty {
                by_host_order!(little => $reverse(v), big => v)
            }

            #[doc = concat!("Convert a host-order `", stringify!($ty), "` to little-endian.")]
            #[inline(always)]
            #[must_use]
            pub const fn $to_le(v: $ty) -> $ty {
                by_host_order!(little => v, big => $reverse(v))
            }

            #[doc = concat!("Convert a big-endian `", stringify!($ty), "` to host order.")]
            #[inline(always)]
            #[must_use]
            pub const fn $from_be(v: $ty) -> $ty {
                by_host_order!(little => $reverse(v), big => v)
            }

            #[doc = concat!("Convert a little-endian `", stringify!($ty), "` to host order.")]
            #[inline(always)]
            #[must_use]
            pub const fn $from_le(v: $ty) -> $ty {
                by_host_order!(little => v, big => $reverse(v))
            }
        )+
    };
}

conversions! {
    u16 => reverse_u16 {
        to_big: to_big_endian_u16,
        to_little: to_little_endian_u16,
        from_big: from_big_endian_u16,
        from_little: from_little_endian_u16,
    }
    u32 => reverse_u32 {
        to_big: to_big_endian_u32,
        to_little: to_little_endian_u32,
        from_big: from_big_endian_u32,
        from_little: from_little_endian_u32,
    }
    u64 => reverse_u64 {
        to_big: to_big_endian_u64,
        to_little: to_little_endian_u64,
        from_big: from_big_endian_u64,
        from_little: from_little_endian_u64,
    }
}

/// Convert a host-order value of any supported width to big-endian.
///
/// ```
/// let wire = wireorder_core::to_big_endian(0x00ffu16);
/// assert_eq!(wire.to_ne_bytes(), [0x00, 0xff]);
/// ```
#[inline(always)]
#[must_use]
pub fn to_big_endian<T: Swap>(v: T) -> T {
    v.to_big_endian()
}

/// Convert a host-order value of any supported width to little-endian.
#[inline(always)]
#[must_use]
pub fn to_little_endian<T: Swap>(v: T) -> T {
    v.to_little_endian()
}

/// Convert a big-endian value of any supported width to host order.
#[inline(always)]
#[must_use]
pub fn from_big_endian<T: Swap>(v: T) -> T {
    v.from_big_endian()
}

/// Convert a little-endian value of any supported width to host order.
#[inline(always)]
#[must_use]
pub fn from_little_endian<T: Swap>(v: T) -> T {
    v.from_little_endian()
}
