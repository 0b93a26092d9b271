/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Endianness;
use num_traits::{PrimInt, Unsigned, ops::bytes::NumBytes};

mod private {
    pub trait Word {}
}

/// The raw bit patterns that byte-order conversions operate on.
///
/// The only implementations are `u8`, `u16`, `u32`, and `u64`: conversions
/// never look at the meaning of a value, only at its bytes, and the
/// interpretation as a signed, floating-point or boolean value is left to
/// [`Scalar`](super::Scalar).
///
/// [`Word::Bytes`] is always `[u8; Word::BYTES]`.
pub trait Word: private::Word + PrimInt + Unsigned + core::fmt::Debug + Send + Sync + 'static {
    /// The byte array holding the memory representation of a word.
    type Bytes: NumBytes + Default + Copy;

    /// The number of bits of the word.
    const BITS: usize;
    /// The number of bytes of the word.
    const BYTES: usize;

    fn from_le_array(bytes: Self::Bytes) -> Self;
    fn from_be_array(bytes: Self::Bytes) -> Self;
    fn to_le_array(self) -> Self::Bytes;
    fn to_be_array(self) -> Self::Bytes;

    /// Interpret `bytes` as the memory representation of a word on a host
    /// with byte order `E`.
    #[inline(always)]
    fn load<E: Endianness>(bytes: Self::Bytes) -> Self {
        if E::IS_LITTLE {
            Self::from_le_array(bytes)
        } else {
            Self::from_be_array(bytes)
        }
    }

    /// Return the memory representation of this word on a host with byte
    /// order `E`.
    #[inline(always)]
    fn store<E: Endianness>(self) -> Self::Bytes {
        if E::IS_LITTLE {
            self.to_le_array()
        } else {
            self.to_be_array()
        }
    }
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl private::Word for $ty {}

        impl Word for $ty {
            type Bytes = [u8; core::mem::size_of::<$ty>()];

            const BITS: usize = <$ty>::BITS as usize;
            const BYTES: usize = core::mem::size_of::<$ty>();

            #[inline(always)]
            fn from_le_array(bytes: Self::Bytes) -> Self {
                <$ty>::from_le_bytes(bytes)
            }

            #[inline(always)]
            fn from_be_array(bytes: Self::Bytes) -> Self {
                <$ty>::from_be_bytes(bytes)
            }

            #[inline(always)]
            fn to_le_array(self) -> Self::Bytes {
                self.to_le_bytes()
            }

            #[inline(always)]
            fn to_be_array(self) -> Self::Bytes {
                self.to_be_bytes()
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64);

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::{BE, LE, NE};

    #[test]
    fn test_load_store() {
        assert_eq!(u32::load::<LE>([1, 2, 3, 4]), 0x04030201);
        assert_eq!(u32::load::<BE>([1, 2, 3, 4]), 0x01020304);
        assert_eq!(0x0102_u16.store::<LE>(), [2, 1]);
        assert_eq!(0x0102_u16.store::<BE>(), [1, 2]);
        assert_eq!(0xAB_u8.store::<BE>(), [0xAB]);
        let x = 0x0102030405060708_u64;
        assert_eq!(x.store::<NE>(), x.to_ne_bytes());
        assert_eq!(u64::load::<NE>(x.to_ne_bytes()), x);
    }

    #[test]
    fn test_sizes() {
        assert_eq!((<u8 as Word>::BITS, u8::BYTES), (8, 1));
        assert_eq!((<u16 as Word>::BITS, u16::BYTES), (16, 2));
        assert_eq!((<u32 as Word>::BITS, u32::BYTES), (32, 4));
        assert_eq!((<u64 as Word>::BITS, u64::BYTES), (64, 8));
    }
}
