/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The scalar types of the format and their named accessors.

Every entry of the catalogue gets, from a single macro instantiation:

- free functions `read_<name>`/`write_<name>` using the wire order and the
  native order of the build;
- free functions `read_<name>_le`/`write_<name>_le` and
  `read_<name>_be`/`write_<name>_be` using a fixed wire order, independently
  of the build;
- methods `read_<name>`/`write_<name>` of [`ScalarAccessor`] and
  [`DynScalarAccessor`].

All of them delegate to the generic [`ScalarAccessor::read`] and
[`ScalarAccessor::write`], so the conversion logic exists once.

Offsets are 32 bits wide (16 bits for vtable offsets) unless the feature
`large-offsets` is enabled, in which case they are 64 bits wide (32 bits for
vtable offsets).

```
use flat_endian::catalogue::*;

let mut buf = [0; 16];
write_uoffset(&mut buf, 0, 12);
write_voffset(&mut buf, 8, 4);
assert_eq!(read_uoffset(&buf, 0), 12);
assert_eq!(read_voffset(&buf, 8), 4);

write_u32_be(&mut buf, 0, 0x01020304);
assert_eq!(buf[..4], [1, 2, 3, 4]);
```

*/

use crate::impls::{DynScalarAccessor, ScalarAccessor};
use crate::traits::*;

/// The discriminant of a union field.
pub type UnionType = u8;
/// The type of a union, as stored in a table.
pub type UType = u8;
/// A type hash identifying a table type.
pub type THash = u32;

/// An unsigned offset, pointing forward to tables, vectors and strings.
#[cfg(not(feature = "large-offsets"))]
pub type UOffset = u32;
/// A signed offset from a table to its vtable.
#[cfg(not(feature = "large-offsets"))]
pub type SOffset = i32;
/// An offset inside a vtable, locating a field in a table.
#[cfg(not(feature = "large-offsets"))]
pub type VOffset = u16;

/// An unsigned offset, pointing forward to tables, vectors and strings.
#[cfg(feature = "large-offsets")]
pub type UOffset = u64;
/// A signed offset from a table to its vtable.
#[cfg(feature = "large-offsets")]
pub type SOffset = i64;
/// An offset inside a vtable, locating a field in a table.
#[cfg(feature = "large-offsets")]
pub type VOffset = u32;

/// The description of an entry of the [catalogue](CATALOGUE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScalarInfo {
    /// The name used in accessor names.
    pub name: &'static str,
    pub bits: usize,
    pub kind: ScalarKind,
}

macro_rules! scalar_catalogue {
    ($($name:ident: $ty:ty),* $(,)?) => {
        /// All scalar types with named accessors.
        pub const CATALOGUE: &[ScalarInfo] = &[$(
            ScalarInfo {
                name: stringify!($name),
                bits: <$ty as Scalar>::BITS,
                kind: <$ty as Scalar>::KIND,
            },
        )*];

        paste::paste! {
            impl<W: Endianness, N: Endianness> ScalarAccessor<W, N> {$(
                #[doc = "Read a `" $name "` scalar stored at `offset` in `buf`."]
                #[inline(always)]
                pub fn [<read_ $name>](&self, buf: &[u8], offset: usize) -> $ty {
                    self.read::<$ty>(buf, offset)
                }

                #[doc = "Write a `" $name "` scalar at `offset` in `buf`."]
                #[inline(always)]
                pub fn [<write_ $name>](&self, buf: &mut [u8], offset: usize, value: $ty) {
                    self.write::<$ty>(buf, offset, value)
                }
            )*}

            impl DynScalarAccessor {$(
                #[doc = "Read a `" $name "` scalar stored at `offset` in `buf`."]
                #[inline]
                pub fn [<read_ $name>](&self, buf: &[u8], offset: usize) -> $ty {
                    self.read::<$ty>(buf, offset)
                }

                #[doc = "Write a `" $name "` scalar at `offset` in `buf`."]
                #[inline]
                pub fn [<write_ $name>](&self, buf: &mut [u8], offset: usize, value: $ty) {
                    self.write::<$ty>(buf, offset, value)
                }
            )*}

            $(
                #[doc = "Read a `" $name "` scalar stored in wire order at `offset` in `buf`."]
                #[inline(always)]
                pub fn [<read_ $name>](buf: &[u8], offset: usize) -> $ty {
                    ScalarAccessor::protocol().read::<$ty>(buf, offset)
                }

                #[doc = "Write a `" $name "` scalar in wire order at `offset` in `buf`."]
                #[inline(always)]
                pub fn [<write_ $name>](buf: &mut [u8], offset: usize, value: $ty) {
                    ScalarAccessor::protocol().write::<$ty>(buf, offset, value)
                }

                #[doc = "Read a little-endian `" $name "` scalar at `offset` in `buf`."]
                #[inline(always)]
                pub fn [<read_ $name _le>](buf: &[u8], offset: usize) -> $ty {
                    ScalarAccessor::<LE>::new().read::<$ty>(buf, offset)
                }

                #[doc = "Write a little-endian `" $name "` scalar at `offset` in `buf`."]
                #[inline(always)]
                pub fn [<write_ $name _le>](buf: &mut [u8], offset: usize, value: $ty) {
                    ScalarAccessor::<LE>::new().write::<$ty>(buf, offset, value)
                }

                #[doc = "Read a big-endian `" $name "` scalar at `offset` in `buf`."]
                #[inline(always)]
                pub fn [<read_ $name _be>](buf: &[u8], offset: usize) -> $ty {
                    ScalarAccessor::<BE>::new().read::<$ty>(buf, offset)
                }

                #[doc = "Write a big-endian `" $name "` scalar at `offset` in `buf`."]
                #[inline(always)]
                pub fn [<write_ $name _be>](buf: &mut [u8], offset: usize, value: $ty) {
                    ScalarAccessor::<BE>::new().write::<$ty>(buf, offset, value)
                }
            )*
        }
    };
}

scalar_catalogue! {
    u8: u8,
    u16: u16,
    u32: u32,
    u64: u64,
    i8: i8,
    i16: i16,
    i32: i32,
    i64: i64,
    f32: f32,
    f64: f64,
    bool: bool,
    union_type: UnionType,
    uoffset: UOffset,
    soffset: SOffset,
    voffset: VOffset,
    utype: UType,
    thash: THash,
}
