/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dynamic selection of byte orders.
//!
//! [`ScalarAccessor`] fixes the wire and native orders at compile time. When
//! the wire order comes from a configuration read at startup,
//! [`DynScalarAccessor`] stores the two orders as values and dispatches
//! every access with a match on them to the corresponding
//! [`ScalarAccessor`]. The match is cheap and easily predicted, but it
//! cannot be removed by the compiler as in the static case.

use super::ScalarAccessor;
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An accessor whose wire and native orders are selected at runtime.
///
/// ```
/// use flat_endian::prelude::*;
///
/// let accessor = DynScalarAccessor::new("be".parse().unwrap());
/// let mut buf = [0; 2];
/// accessor.write(&mut buf, 0, 0x0102_u16);
/// assert_eq!(buf, [0x01, 0x02]);
/// assert_eq!(accessor.read::<u16>(&buf, 0), 0x0102);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct DynScalarAccessor {
    wire: Order,
    native: Order,
}

impl Default for DynScalarAccessor {
    fn default() -> Self {
        Self::protocol()
    }
}

/// Expand `$body` with `$acc` bound to the [`ScalarAccessor`] matching
/// the orders of `$self`.
macro_rules! dispatch {
    ($self:ident, $acc:ident => $body:expr) => {
        match ($self.wire, $self.native) {
            (Order::Little, Order::Little) => {
                let $acc = ScalarAccessor::<LE, LE>::new();
                $body
            }
            (Order::Little, Order::Big) => {
                let $acc = ScalarAccessor::<LE, BE>::new();
                $body
            }
            (Order::Big, Order::Little) => {
                let $acc = ScalarAccessor::<BE, LE>::new();
                $body
            }
            (Order::Big, Order::Big) => {
                let $acc = ScalarAccessor::<BE, BE>::new();
                $body
            }
        }
    };
}

impl DynScalarAccessor {
    /// Create an accessor for the given wire order on this host. The native
    /// order is obtained from the [detector](super::is_native_little_endian).
    pub fn new(wire: Order) -> Self {
        Self {
            wire,
            native: Order::native(),
        }
    }

    /// Create an accessor for the given wire order on a host with the given
    /// native order.
    ///
    /// Passing a native order different from that of the host is only
    /// useful to simulate another host: the resulting buffers will be in
    /// the wrong wire order for this one.
    pub const fn with_native(wire: Order, native: Order) -> Self {
        Self { wire, native }
    }

    /// Create an accessor for the wire order of the build on this host.
    pub fn protocol() -> Self {
        Self::new(Order::PROTOCOL)
    }

    #[inline(always)]
    pub const fn wire(&self) -> Order {
        self.wire
    }

    #[inline(always)]
    pub const fn native(&self) -> Order {
        self.native
    }

    /// Return whether accesses are plain loads and stores.
    #[inline(always)]
    pub const fn orders_match(&self) -> bool {
        self.wire.is_little() == self.native.is_little()
    }

    /// Read the scalar stored at `offset` in `buf`.
    ///
    /// # Panics
    ///
    /// If `offset + T::BYTES` exceeds the length of `buf`.
    #[inline]
    pub fn read<T: Scalar>(&self, buf: &[u8], offset: usize) -> T {
        dispatch!(self, acc => acc.read(buf, offset))
    }

    /// Write `value` at `offset` in `buf`.
    ///
    /// # Panics
    ///
    /// If `offset + T::BYTES` exceeds the length of `buf`.
    #[inline]
    pub fn write<T: Scalar>(&self, buf: &mut [u8], offset: usize, value: T) {
        dispatch!(self, acc => acc.write(buf, offset, value))
    }

    #[inline]
    pub fn try_read<T: Scalar>(&self, buf: &[u8], offset: usize) -> Result<T, AccessError> {
        ScalarRead::try_read(self, buf, offset)
    }

    #[inline]
    pub fn try_write<T: Scalar>(
        &self,
        buf: &mut [u8],
        offset: usize,
        value: T,
    ) -> Result<(), AccessError> {
        ScalarWrite::try_write(self, buf, offset, value)
    }

    #[inline]
    #[must_use]
    pub fn cast_from_wire<T: Scalar>(&self, value: T) -> T {
        dispatch!(self, acc => acc.cast_from_wire(value))
    }

    #[inline]
    #[must_use]
    pub fn cast_to_wire<T: Scalar>(&self, value: T) -> T {
        dispatch!(self, acc => acc.cast_to_wire(value))
    }
}

impl ScalarRead for DynScalarAccessor {
    #[inline]
    fn read<T: Scalar>(&self, buf: &[u8], offset: usize) -> T {
        DynScalarAccessor::read(self, buf, offset)
    }
}

impl ScalarWrite for DynScalarAccessor {
    #[inline]
    fn write<T: Scalar>(&self, buf: &mut [u8], offset: usize, value: T) {
        DynScalarAccessor::write(self, buf, offset, value)
    }
}

impl<W: Endianness, N: Endianness> From<ScalarAccessor<W, N>> for DynScalarAccessor {
    fn from(_: ScalarAccessor<W, N>) -> Self {
        Self::with_native(W::ORDER, N::ORDER)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn check_agrees<W: Endianness, N: Endianness>() {
        let dynamic = DynScalarAccessor::from(ScalarAccessor::<W, N>::new());
        let mut dyn_buf = [0_u8; 8];
        let mut static_buf = [0_u8; 8];
        dynamic.write(&mut dyn_buf, 0, 0x0102030405060708_u64);
        ScalarAccessor::<W, N>::new().write(&mut static_buf, 0, 0x0102030405060708_u64);
        assert_eq!(dyn_buf, static_buf);
        dynamic.write(&mut dyn_buf, 3, -1.25_f32);
        ScalarAccessor::<W, N>::new().write(&mut static_buf, 3, -1.25_f32);
        assert_eq!(dyn_buf, static_buf);
        assert_eq!(dynamic.read::<f32>(&dyn_buf, 3), -1.25);
        assert_eq!(
            dynamic.cast_to_wire(0x0102_u16),
            ScalarAccessor::<W, N>::new().cast_to_wire(0x0102_u16)
        );
    }

    #[test]
    fn test_agrees_with_static() {
        check_agrees::<LE, LE>();
        check_agrees::<LE, BE>();
        check_agrees::<BE, LE>();
        check_agrees::<BE, BE>();
    }

    #[test]
    fn test_from_static() {
        let accessor: DynScalarAccessor = ScalarAccessor::<BE, LE>::new().into();
        assert_eq!(accessor.wire(), Order::Big);
        assert_eq!(accessor.native(), Order::Little);
        assert!(!accessor.orders_match());
        assert_eq!(DynScalarAccessor::default(), DynScalarAccessor::protocol());
        assert_eq!(DynScalarAccessor::protocol().native(), Order::NATIVE);
    }

    #[test]
    fn test_bytes_follow_wire_order() {
        let mut buf = [0_u8; 4];
        for native in [Order::Little, Order::Big] {
            DynScalarAccessor::with_native(Order::Little, native).write(
                &mut buf,
                0,
                0x01020304_u32,
            );
            assert_eq!(buf, [4, 3, 2, 1]);
            DynScalarAccessor::with_native(Order::Big, native).write(
                &mut buf,
                0,
                0x01020304_u32,
            );
            assert_eq!(buf, [1, 2, 3, 4]);
        }
    }
}
