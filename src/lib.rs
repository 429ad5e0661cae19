//! A `no_std` layer for moving fixed-width integers between the host's byte
//! order and an explicit wire order, plus bounded cursors that place those
//! values into caller-owned buffers.
//!
//! # Conversions
//!
//! ```
//! use wireorder::{from_big_endian_u32, to_big_endian_u32, to_little_endian_u32};
//!
//! let wire = to_big_endian_u32(0x0102_0304);
//! assert_eq!(wire.to_ne_bytes(), [1, 2, 3, 4]);
//! assert_eq!(from_big_endian_u32(wire), 0x0102_0304);
//!
//! assert_eq!(to_little_endian_u32(0x0102_0304).to_ne_bytes(), [4, 3, 2, 1]);
//! ```
//!
//! # Cursors
//!
//! ```
//! use wireorder::{Be, Le, WireReader, WireWriter};
//!
//! let mut buf = [0u8; 6];
//! let mut w = WireWriter::new(&mut buf);
//! w.put_bytes(&Be(0xabcdu16)).unwrap();
//! w.put_bytes(&Le(7u32)).unwrap();
//!
//! let mut r = WireReader::new(&buf);
//! assert_eq!(r.get_be::<u16>().unwrap(), 0xabcd);
//! assert_eq!(r.get_bytes::<Le<u32>>().unwrap().get(), 7);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

mod cursor;
mod log;

#[cfg(test)]
mod tests;

// Conversion re-exports
pub use wireorder_core::{
    HOST, Swap, from_big_endian, from_big_endian_u16, from_big_endian_u32, from_big_endian_u64,
    from_little_endian, from_little_endian_u16, from_little_endian_u32, from_little_endian_u64,
    reverse_u16, reverse_u32, reverse_u64, to_big_endian, to_big_endian_u16, to_big_endian_u32,
    to_big_endian_u64, to_little_endian, to_little_endian_u16, to_little_endian_u32,
    to_little_endian_u64,
};

// Order re-exports
pub use wireorder_core::{
    BigEndian, ByteOrder, Endianness, LittleEndian, NativeEndian, NetworkEndian,
    ParseEndiannessError,
};

// Bytes re-exports
pub use wireorder_core::bytes;
pub use wireorder_core::{Be, BytesError, FromBytes, Le, ToBytes};

pub use cursor::{WireReader, WireWriter};
