/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{host_to_wire, wire_to_host};
use crate::traits::*;

type BytesOf<T> = <<T as Scalar>::Word as Word>::Bytes;

/// Reads and writes [scalars](Scalar) stored in wire order `W` on a host
/// with native order `N`.
///
/// This is a zero-sized struct: the two orders are type parameters, so every
/// access is resolved at compile time either to a plain load or store, when
/// `W` and `N` coincide, or to a load or store followed or preceded by a byte
/// reversal.
///
/// The defaults are the wire order [`PE`] and the native order [`NE`] of the
/// build, so `<ScalarAccessor>::new()` or [`ScalarAccessor::protocol`] give
/// the accessor used by the rest of the format. Choosing a native order
/// different from [`NE`] simulates a host with the other byte order, as the
/// bytes of a word are laid out in memory following `N`:
/// ```
/// use flat_endian::prelude::*;
///
/// let mut buf = [0; 4];
/// ScalarAccessor::<LE, BE>::new().write(&mut buf, 0, 0x01020304_u32);
/// assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
///
/// ScalarAccessor::<BE, BE>::new().write(&mut buf, 0, 0x01020304_u32);
/// assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
/// ```
///
/// Besides the generic methods, [accessors named after each
/// type](crate::catalogue) of the format, such as
/// [`read_uoffset`](ScalarAccessor::read_uoffset), are provided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScalarAccessor<W: Endianness = PE, N: Endianness = NE> {
    _marker: core::marker::PhantomData<(W, N)>,
}

impl ScalarAccessor {
    /// Return the accessor for the wire order and the native order of
    /// the build.
    #[inline(always)]
    pub const fn protocol() -> Self {
        Self::new()
    }
}

impl<W: Endianness, N: Endianness> ScalarAccessor<W, N> {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            _marker: core::marker::PhantomData,
        }
    }

    /// Return whether accesses are plain loads and stores.
    #[inline(always)]
    pub const fn orders_match() -> bool {
        W::IS_LITTLE == N::IS_LITTLE
    }

    /// Return the wire order.
    #[inline(always)]
    pub const fn wire(&self) -> Order {
        W::ORDER
    }

    /// Return the native order.
    #[inline(always)]
    pub const fn native(&self) -> Order {
        N::ORDER
    }

    #[inline(always)]
    fn decode<T: Scalar>(bytes: BytesOf<T>) -> T {
        T::from_word(wire_to_host::<W, N, T::Word>(
            <T::Word as Word>::load::<N>(bytes),
        ))
    }

    #[inline(always)]
    fn encode<T: Scalar>(value: T) -> BytesOf<T> {
        host_to_wire::<W, N, T::Word>(value.to_word()).store::<N>()
    }

    /// Read the scalar stored at `offset` in `buf`.
    ///
    /// # Panics
    ///
    /// If `offset + T::BYTES` exceeds the length of `buf`.
    #[inline(always)]
    pub fn read<T: Scalar>(&self, buf: &[u8], offset: usize) -> T {
        let mut bytes = BytesOf::<T>::default();
        bytes
            .as_mut()
            .copy_from_slice(&buf[offset..offset + T::BYTES]);
        Self::decode(bytes)
    }

    /// Write `value` at `offset` in `buf`.
    ///
    /// # Panics
    ///
    /// If `offset + T::BYTES` exceeds the length of `buf`.
    #[inline(always)]
    pub fn write<T: Scalar>(&self, buf: &mut [u8], offset: usize, value: T) {
        buf[offset..offset + T::BYTES].copy_from_slice(Self::encode(value).as_ref());
    }

    /// Read the scalar stored at `offset` in `buf`, checking the range first.
    #[inline]
    pub fn try_read<T: Scalar>(&self, buf: &[u8], offset: usize) -> Result<T, AccessError> {
        ScalarRead::try_read(self, buf, offset)
    }

    /// Write `value` at `offset` in `buf`, checking the range first.
    #[inline]
    pub fn try_write<T: Scalar>(
        &self,
        buf: &mut [u8],
        offset: usize,
        value: T,
    ) -> Result<(), AccessError> {
        ScalarWrite::try_write(self, buf, offset, value)
    }

    /// Read the scalar stored at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `T::BYTES` bytes. No alignment is
    /// required.
    #[inline(always)]
    pub unsafe fn read_ptr<T: Scalar>(&self, ptr: *const u8) -> T {
        // SAFETY: the caller guarantees the range is readable, and the bytes
        // of a word are a byte array with no alignment and no invalid values.
        let bytes = unsafe { ptr.cast::<BytesOf<T>>().read_unaligned() };
        Self::decode(bytes)
    }

    /// Write `value` at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `T::BYTES` bytes. No alignment is
    /// required.
    #[inline(always)]
    pub unsafe fn write_ptr<T: Scalar>(&self, ptr: *mut u8, value: T) {
        // SAFETY: see read_ptr.
        unsafe { ptr.cast::<BytesOf<T>>().write_unaligned(Self::encode(value)) }
    }

    /// Convert a value whose memory representation holds wire order into a
    /// host value.
    ///
    /// This is useful when a scalar has been copied out of a buffer as a
    /// whole, for example as part of a struct.
    #[inline(always)]
    #[must_use]
    pub fn cast_from_wire<T: Scalar>(&self, value: T) -> T {
        T::from_word(wire_to_host::<W, N, T::Word>(value.to_word()))
    }

    /// Convert a host value into a value whose memory representation holds
    /// wire order.
    #[inline(always)]
    #[must_use]
    pub fn cast_to_wire<T: Scalar>(&self, value: T) -> T {
        T::from_word(host_to_wire::<W, N, T::Word>(value.to_word()))
    }
}

impl<W: Endianness, N: Endianness> ScalarRead for ScalarAccessor<W, N> {
    #[inline(always)]
    fn read<T: Scalar>(&self, buf: &[u8], offset: usize) -> T {
        ScalarAccessor::read(self, buf, offset)
    }
}

impl<W: Endianness, N: Endianness> ScalarWrite for ScalarAccessor<W, N> {
    #[inline(always)]
    fn write<T: Scalar>(&self, buf: &mut [u8], offset: usize, value: T) {
        ScalarAccessor::write(self, buf, offset, value)
    }
}
