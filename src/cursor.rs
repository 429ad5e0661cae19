//! Bounded cursors over caller-owned buffers.
//!
//! [`WireWriter`] and [`WireReader`] track a position inside a byte slice and
//! move fixed-width integers across it in an explicit byte order. A failed
//! operation leaves the position where it was. A [`ToBytes`] or [`FromBytes`]
//! implementation that reports more bytes than it was handed is treated as a
//! short buffer.

use crate::log::trace;
use wireorder_core::{
    BigEndian, ByteOrder, BytesError, Endianness, FromBytes, LittleEndian, NativeEndian, Swap,
    ToBytes,
};

/// Writes wire-order values into a mutable byte slice.
///
/// # Example
///
/// ```
/// use wireorder::{BigEndian, WireWriter};
///
/// let mut buf = [0u8; 6];
/// let mut w = WireWriter::new(&mut buf);
///
/// w.put_be(0xcafeu16).unwrap();
/// w.put::<BigEndian, u32>(0x0102_0304).unwrap();
///
/// assert_eq!(w.written(), &[0xca, 0xfe, 1, 2, 3, 4]);
/// assert_eq!(w.remaining(), 0);
/// ```
#[derive(Debug)]
pub struct WireWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WireWriter<'a> {
    /// Start writing at the front of `buf`.
    #[inline]
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before the end of the buffer.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The written prefix of the buffer.
    #[inline]
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Give back the written prefix with the buffer's full lifetime.
    #[inline]
    #[must_use]
    pub fn into_written(self) -> &'a mut [u8] {
        let Self { buf, pos } = self;
        &mut buf[..pos]
    }

    /// Write `v` in the order `O`.
    #[inline]
    pub fn put<O: ByteOrder, T: Swap>(&mut self, v: T) -> Result<usize, BytesError> {
        let result = O::write(v, &mut self.buf[self.pos..]);
        self.advance(result)
    }

    /// Write `v` big-endian.
    #[inline]
    pub fn put_be<T: Swap>(&mut self, v: T) -> Result<usize, BytesError> {
        self.put::<BigEndian, T>(v)
    }

    /// Write `v` little-endian.
    #[inline]
    pub fn put_le<T: Swap>(&mut self, v: T) -> Result<usize, BytesError> {
        self.put::<LittleEndian, T>(v)
    }

    /// Write `v` in an order chosen at runtime.
    #[inline]
    pub fn put_in<T: Swap>(&mut self, order: Endianness, v: T) -> Result<usize, BytesError> {
        self.put::<NativeEndian, T>(order.to_wire(v))
    }

    /// Write any [`ToBytes`] value.
    pub fn put_bytes<B: ToBytes + ?Sized>(&mut self, value: &B) -> Result<usize, BytesError> {
        let result = value.to_bytes(&mut self.buf[self.pos..]);
        self.advance(result)
    }

    fn advance(&mut self, result: Result<usize, BytesError>) -> Result<usize, BytesError> {
        let checked = result.and_then(|n| {
            let available = self.remaining();
            if n > available {
                return Err(BytesError::BufferTooSmall {
                    needed: n,
                    available,
                });
            }
            Ok(n)
        });
        match checked {
            Ok(n) => {
                self.pos += n;
                Ok(n)
            }
            Err(err) => {
                trace!(
                    position = self.pos,
                    needed = err.needed(),
                    available = err.available(),
                    "wire write past end of buffer"
                );
                Err(err)
            }
        }
    }
}

/// Reads wire-order values from a byte slice.
///
/// # Example
///
/// ```
/// use wireorder::{Endianness, WireReader};
///
/// let bytes = [0x34, 0x12, 0, 0, 0, 1];
/// let mut r = WireReader::new(&bytes);
///
/// assert_eq!(r.get_le::<u16>().unwrap(), 0x1234);
/// assert_eq!(r.get_in::<u32>(Endianness::Big).unwrap(), 1);
/// assert!(r.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Start reading at the front of `buf`.
    #[inline]
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True when every byte has been consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread suffix of the buffer.
    #[inline]
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Read a value in the order `O`.
    #[inline]
    pub fn get<O: ByteOrder, T: Swap>(&mut self) -> Result<T, BytesError> {
        let result = O::read::<T>(self.rest()).map(|v| (v, T::SIZE));
        self.advance(result)
    }

    /// Read a big-endian value.
    #[inline]
    pub fn get_be<T: Swap>(&mut self) -> Result<T, BytesError> {
        self.get::<BigEndian, T>()
    }

    /// Read a little-endian value.
    #[inline]
    pub fn get_le<T: Swap>(&mut self) -> Result<T, BytesError> {
        self.get::<LittleEndian, T>()
    }

    /// Read a value in an order chosen at runtime.
    #[inline]
    pub fn get_in<T: Swap>(&mut self, order: Endianness) -> Result<T, BytesError> {
        self.get::<NativeEndian, T>().map(|wire| order.from_wire(wire))
    }

    /// Read any [`FromBytes`] value.
    pub fn get_bytes<B: FromBytes>(&mut self) -> Result<B, BytesError> {
        let result = B::from_bytes(self.rest());
        self.advance(result)
    }

    fn advance<T>(&mut self, result: Result<(T, usize), BytesError>) -> Result<T, BytesError> {
        let checked = result.and_then(|(value, n)| {
            let available = self.remaining();
            if n > available {
                return Err(BytesError::UnexpectedEof {
                    needed: n,
                    available,
                });
            }
            Ok((value, n))
        });
        match checked {
            Ok((value, n)) => {
                self.pos += n;
                Ok(value)
            }
            Err(err) => {
                trace!(
                    position = self.pos,
                    needed = err.needed(),
                    available = err.available(),
                    "wire read past end of buffer"
                );
                Err(err)
            }
        }
    }
}
