/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Scalar;

/// Reads of [scalars](Scalar) stored in wire order at arbitrary offsets of a
/// byte buffer.
///
/// Implementors do not own the buffer and hold no state that a read can
/// change, so reading twice the same unchanged bytes returns the same value.
pub trait ScalarRead {
    /// Read the scalar stored at `offset` in `buf`.
    ///
    /// # Panics
    ///
    /// Validating `offset` against the buffer is a responsibility of the
    /// caller. If `offset + T::BYTES` exceeds the length of `buf` this
    /// method panics.
    fn read<T: Scalar>(&self, buf: &[u8], offset: usize) -> T;

    /// Read the scalar stored at `offset` in `buf`, checking first that the
    /// access is within the buffer.
    fn try_read<T: Scalar>(&self, buf: &[u8], offset: usize) -> Result<T, AccessError> {
        check_range(buf.len(), offset, T::BYTES)?;
        Ok(self.read(buf, offset))
    }
}

/// Writes of [scalars](Scalar) in wire order at arbitrary offsets of a byte
/// buffer.
///
/// Writing the same value twice at the same offset leaves the buffer as
/// after the first write.
pub trait ScalarWrite {
    /// Write `value` at `offset` in `buf`.
    ///
    /// # Panics
    ///
    /// Validating `offset` against the buffer is a responsibility of the
    /// caller. If `offset + T::BYTES` exceeds the length of `buf` this
    /// method panics.
    fn write<T: Scalar>(&self, buf: &mut [u8], offset: usize, value: T);

    /// Write `value` at `offset` in `buf`, checking first that the access is
    /// within the buffer. The buffer is left untouched on error.
    fn try_write<T: Scalar>(
        &self,
        buf: &mut [u8],
        offset: usize,
        value: T,
    ) -> Result<(), AccessError> {
        check_range(buf.len(), offset, T::BYTES)?;
        self.write(buf, offset, value);
        Ok(())
    }
}

/// The error returned by checked accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
}

impl core::error::Error for AccessError {}
impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessError::OutOfBounds { offset, width, len } => write!(
                f,
                "Access of {} bytes at offset {} is out of bounds for a buffer of {} bytes",
                width, offset, len
            ),
        }
    }
}

/// Check that `width` bytes starting at `offset` lie within a buffer of
/// length `len`.
#[inline(always)]
pub fn check_range(len: usize, offset: usize, width: usize) -> Result<(), AccessError> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(()),
        _ => Err(AccessError::OutOfBounds { offset, width, len }),
    }
}
