/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Detection of the native byte order.
//!
//! The preferred source is the compile-time signal `cfg(target_endian)`,
//! which is free. The runtime probe inspects the memory representation of a
//! known multi-byte constant; it is pure, so the result can be cached or
//! recomputed at will. [`cached_native_little_endian`] caches it in an
//! atomic without synchronization: threads racing on first use all probe and
//! all store the same value.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::traits::{Endianness, NE, PE};

const UNKNOWN: u8 = 0;
const LITTLE: u8 = 1;
const BIG: u8 = 2;

static NATIVE: AtomicU8 = AtomicU8::new(UNKNOWN);

const PROBE: u32 = 0x0403_0201;

/// Return the compile-time native order signal, if any: `Some(true)` for
/// little-endian targets, `Some(false)` for big-endian targets.
#[inline(always)]
pub const fn native_little_endian_hint() -> Option<bool> {
    if cfg!(target_endian = "little") {
        Some(true)
    } else if cfg!(target_endian = "big") {
        Some(false)
    } else {
        None
    }
}

/// Probe the native byte order at runtime, without caching.
///
/// The bytes of a 32-bit constant, in the order they lie in memory, are
/// compared with the little-endian sequence `[1, 2, 3, 4]`.
#[inline(never)]
pub fn probe_native_little_endian() -> bool {
    let probe = core::hint::black_box(PROBE);
    probe.to_ne_bytes() == [1, 2, 3, 4]
}

/// Probe the native byte order at runtime on first use, and return the
/// cached result afterwards.
#[inline]
pub fn cached_native_little_endian() -> bool {
    match NATIVE.load(Ordering::Relaxed) {
        LITTLE => true,
        BIG => false,
        _ => {
            let is_little = probe_native_little_endian();
            NATIVE.store(if is_little { LITTLE } else { BIG }, Ordering::Relaxed);
            is_little
        }
    }
}

/// Return whether the host is little-endian.
///
/// The compile-time signal is used when available; otherwise, the result of
/// a [cached runtime probe](cached_native_little_endian).
#[inline(always)]
pub fn is_native_little_endian() -> bool {
    match native_little_endian_hint() {
        Some(is_little) => is_little,
        None => cached_native_little_endian(),
    }
}

/// Return whether the host is big-endian.
#[inline(always)]
pub fn is_native_big_endian() -> bool {
    !is_native_little_endian()
}

/// Return whether the native order coincides with the wire order, that is,
/// whether accessors are plain loads and stores.
#[inline(always)]
pub fn is_native_protocol_order() -> bool {
    is_native_little_endian() == PE::IS_LITTLE
}

const _: () = assert!(matches!(
    native_little_endian_hint(),
    Some(is_little) if is_little == NE::IS_LITTLE
));
