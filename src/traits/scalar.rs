/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Word;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// How the bits of a [`Scalar`] are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScalarKind {
    /// A single byte, zero meaning false and anything else true.
    Bool,
    Unsigned,
    /// Two's complement.
    Signed,
    /// IEEE 754 binary floating point.
    Float,
}

/// A fixed-width value that can be stored in a flat buffer.
///
/// A scalar is moved in and out of a buffer as its raw [`Word`]; byte-order
/// conversion happens on the word, and only afterwards the bits are
/// reinterpreted as the scalar type, so conversion never depends on the
/// meaning of a value.
///
/// All primitive integer and floating-point types and `bool` implement this
/// trait. Generated schema code may implement it for enumerations stored as
/// integers, in which case [`from_word`](Scalar::from_word) must accept any
/// bit pattern:
/// ```
/// use flat_endian::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Color(u16);
///
/// impl Scalar for Color {
///     type Word = u16;
///     const KIND: ScalarKind = ScalarKind::Unsigned;
///     fn to_word(self) -> u16 { self.0 }
///     fn from_word(word: u16) -> Self { Color(word) }
/// }
///
/// let mut buf = [0; 4];
/// let accessor = ScalarAccessor::<LE>::new();
/// accessor.write(&mut buf, 2, Color(0x0102));
/// assert_eq!(buf, [0, 0, 0x02, 0x01]);
/// assert_eq!(accessor.read::<Color>(&buf, 2), Color(0x0102));
/// ```
pub trait Scalar: Copy + PartialEq + core::fmt::Debug {
    /// The raw word with the same width as the scalar.
    type Word: Word;

    const KIND: ScalarKind;
    /// The width of the scalar in bits.
    const BITS: usize = <Self::Word as Word>::BITS;
    /// The width of the scalar in bytes.
    const BYTES: usize = <Self::Word as Word>::BYTES;

    /// Return the bit pattern of this value.
    fn to_word(self) -> Self::Word;

    /// Return the value with the given bit pattern.
    fn from_word(word: Self::Word) -> Self;
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {$(
        impl Scalar for $ty {
            type Word = $ty;
            const KIND: ScalarKind = ScalarKind::Unsigned;

            #[inline(always)]
            fn to_word(self) -> $ty {
                self
            }

            #[inline(always)]
            fn from_word(word: $ty) -> Self {
                word
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($ty:ty => $word:ty),*) => {$(
        impl Scalar for $ty {
            type Word = $word;
            const KIND: ScalarKind = ScalarKind::Signed;

            #[inline(always)]
            fn to_word(self) -> $word {
                self as $word
            }

            #[inline(always)]
            fn from_word(word: $word) -> Self {
                word as $ty
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty => $word:ty),*) => {$(
        impl Scalar for $ty {
            type Word = $word;
            const KIND: ScalarKind = ScalarKind::Float;

            #[inline(always)]
            fn to_word(self) -> $word {
                self.to_bits()
            }

            #[inline(always)]
            fn from_word(word: $word) -> Self {
                <$ty>::from_bits(word)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
impl_float!(f32 => u32, f64 => u64);

impl Scalar for bool {
    type Word = u8;
    const KIND: ScalarKind = ScalarKind::Bool;

    #[inline(always)]
    fn to_word(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    fn from_word(word: u8) -> Self {
        word != 0
    }
}
