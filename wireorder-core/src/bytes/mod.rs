//! Fixed-width byte codec.
//!
//! `no_std` traits for writing wire-order integers into caller-provided
//! buffers and reading them back, without allocation.
//!
//! # Traits
//!
//! - [`ToBytes`] - Serialize a value to a caller-provided buffer
//! - [`FromBytes`] - Deserialize a value from bytes
//!
//! # Example
//!
//! ```
//! use wireorder_core::{Be, FromBytes, ToBytes};
//!
//! let mut buf = [0u8; 4];
//!
//! let written = Be(0x0102_0304u32).to_bytes(&mut buf).unwrap();
//! assert_eq!(written, 4);
//! assert_eq!(buf, [1, 2, 3, 4]);
//!
//! let (decoded, consumed) = Be::<u32>::from_bytes(&buf).unwrap();
//! assert_eq!(decoded.get(), 0x0102_0304);
//! assert_eq!(consumed, 4);
//! ```

mod error;
mod traits;
mod wire;

pub use error::{BytesError, Result};
pub(crate) use error::{BufferTooSmallSnafu, UnexpectedEofSnafu};
pub use traits::{FromBytes, ToBytes};
pub use wire::{Be, Le};
