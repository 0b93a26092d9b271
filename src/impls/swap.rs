/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Byte-order conversions of raw words.
//!
//! A conversion between wire order `W` and native order `N` is the identity
//! when the two orders coincide and a full byte reversal otherwise. Since the
//! test is on associated constants, after monomorphization only one of the
//! two branches is left.
//!
//! The functions with a width suffix are fixed to the wire order [`PE`] and
//! the native order [`NE`] of the build.

use crate::traits::*;

/// Convert a word read from memory holding wire order `W` into the value it
/// represents on a host with native order `N`.
#[inline(always)]
#[must_use]
pub fn wire_to_host<W: Endianness, N: Endianness, T: Word>(raw: T) -> T {
    if W::IS_LITTLE == N::IS_LITTLE {
        raw
    } else {
        raw.swap_bytes()
    }
}

/// Convert a value on a host with native order `N` into the word whose
/// memory representation holds wire order `W`.
#[inline(always)]
#[must_use]
pub fn host_to_wire<W: Endianness, N: Endianness, T: Word>(value: T) -> T {
    // A byte reversal is an involution.
    wire_to_host::<W, N, T>(value)
}

macro_rules! impl_swaps {
    ($($bits:tt => $ty:ty),*) => {
        paste::paste! {$(
            #[doc = "Convert a " $bits "-bit word from wire order to host order."]
            #[inline(always)]
            #[must_use]
            pub fn [<wire_to_host_ $bits>](raw: $ty) -> $ty {
                wire_to_host::<PE, NE, $ty>(raw)
            }

            #[doc = "Convert a " $bits "-bit word from host order to wire order."]
            #[inline(always)]
            #[must_use]
            pub fn [<host_to_wire_ $bits>](value: $ty) -> $ty {
                host_to_wire::<PE, NE, $ty>(value)
            }
        )*}
    };
}

impl_swaps!(8 => u8, 16 => u16, 32 => u32, 64 => u64);
