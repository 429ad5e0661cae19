//! Core implementation for wireorder.
//!
//! Converts fixed-width unsigned integers between the host's native byte
//! order and an explicit wire order. The host order is fixed by the
//! compilation target; every conversion is either the identity or a single
//! byte reversal, chosen at compile time.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!(
    "unsupported target byte order: wireorder requires a little-endian or big-endian target"
);

/// Expands to `$little` on little-endian targets and to `$big` on big-endian
/// targets. The other arm is never compiled.
#[cfg(target_endian = "little")]
macro_rules! by_host_order {
    (little => $little:expr, big => $big:expr $(,)?) => {
        $little
    };
}

#[cfg(target_endian = "big")]
macro_rules! by_host_order {
    (little => $little:expr, big => $big:expr $(,)?) => {
        $big
    };
}

pub mod bytes;
mod convert;
mod order;
mod swap;


pub use bytes::{Be, BytesError, FromBytes, Le, ToBytes};
pub use convert::{
    from_big_endian, from_big_endian_u16, from_big_endian_u32, from_big_endian_u64,
    from_little_endian, from_little_endian_u16, from_little_endian_u32, from_little_endian_u64,
    to_big_endian, to_big_endian_u16, to_big_endian_u32, to_big_endian_u64, to_little_endian,
    to_little_endian_u16, to_little_endian_u32, to_little_endian_u64,
};
pub use order::{
    BigEndian, ByteOrder, Endianness, HOST, LittleEndian, NativeEndian, NetworkEndian,
    ParseEndiannessError,
};
pub use swap::{Swap, reverse_u16, reverse_u32, reverse_u64};
