//! Wire-order wrappers.
//!
//! [`Be`] and [`Le`] hold a host-order value and tag it with the order it is
//! written in. The wrapped value is always directly usable for arithmetic;
//! conversion happens only at the buffer boundary.

use crate::bytes::{BytesError, FromBytes, ToBytes};
use crate::order::{BigEndian, ByteOrder, LittleEndian};
use crate::swap::Swap;

macro_rules! impl_wire_wrapper {
    ($($name:ident => $order:ty, $label:literal);+ $(;)?) => {
        $(
            #[doc = concat!("A host-order value serialized ", $label, ".")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
            #[repr(transparent)]
            pub struct $name<T>(pub T);

            impl<T: Swap> $name<T> {
                /// Wrap a host-order value.
                #[inline]
                #[must_use]
                pub const fn new(value: T) -> Self {
                    Self(value)
                }

                /// The host-order value.
                #[inline]
                #[must_use]
                pub const fn get(self) -> T {
                    self.0
                }

                #[doc = concat!("The bit pattern of the value ", $label, ".")]
                #[inline]
                #[must_use]
                pub fn to_wire(self) -> T {
                    <$order>::to_wire(self.0)
                }

                #[doc = concat!("Wrap a bit pattern that is ", $label, ".")]
                #[inline]
                #[must_use]
                pub fn from_wire(wire: T) -> Self {
                    Self(<$order>::from_wire(wire))
                }
            }

            impl<T: Swap> ToBytes for $name<T> {
                const MAX_SIZE: Option<usize> = Some(T::SIZE);

                #[inline]
                fn to_bytes(&self, buf: &mut [u8]) -> Result<usize, BytesError> {
                    <$order>::write(self.0, buf)
                }
            }

            impl<T: Swap> FromBytes for $name<T> {
                #[inline]
                fn from_bytes(buf: &[u8]) -> Result<(Self, usize), BytesError> {
                    let value = <$order>::read(buf)?;
                    Ok((Self(value), T::SIZE))
                }
            }

            impl<T: Swap> From<T> for $name<T> {
                #[inline]
                fn from(value: T) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

impl_wire_wrapper! {
    Be => BigEndian, "big-endian";
    Le => LittleEndian, "little-endian";
}

macro_rules! impl_unwrap {
    ($($ty:ty),+) => {
        $(
            impl From<Be<$ty>> for $ty {
                #[inline]
                fn from(value: Be<$ty>) -> Self {
                    value.0
                }
            }

            impl From<Le<$ty>> for $ty {
                #[inline]
                fn from(value: Le<$ty>) -> Self {
                    value.0
                }
            }
        )+
    };
}

impl_unwrap!(u16, u32, u64);
