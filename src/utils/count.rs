/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::any::type_name;
use core::cell::Cell;

use crate::traits::*;

/// Wrapping struct that keeps track of scalar reads and writes. Optionally,
/// prints to standard error information about methods called.
///
/// Accessors take `&self`, so the counters are kept in [`Cell`]s.
#[derive(Debug, Default)]
pub struct CountAccessor<A, const PRINT: bool = false> {
    accessor: A,
    reads: Cell<usize>,
    writes: Cell<usize>,
    bytes_read: Cell<usize>,
    bytes_written: Cell<usize>,
}

impl<A, const PRINT: bool> CountAccessor<A, PRINT> {
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            reads: Cell::new(0),
            writes: Cell::new(0),
            bytes_read: Cell::new(0),
            bytes_written: Cell::new(0),
        }
    }

    pub fn into_inner(self) -> A {
        self.accessor
    }

    /// The number of scalars read so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// The number of scalars written so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// The number of bytes read so far.
    pub fn bytes_read(&self) -> usize {
        self.bytes_read.get()
    }

    /// The number of bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.bytes_written.get()
    }

    /// Set all counters to zero.
    pub fn reset(&self) {
        self.reads.set(0);
        self.writes.set(0);
        self.bytes_read.set(0);
        self.bytes_written.set(0);
    }
}

impl<A: ScalarRead, const PRINT: bool> ScalarRead for CountAccessor<A, PRINT> {
    fn read<T: Scalar>(&self, buf: &[u8], offset: usize) -> T {
        let value = self.accessor.read::<T>(buf, offset);
        self.reads.set(self.reads.get() + 1);
        self.bytes_read.set(self.bytes_read.get() + T::BYTES);
        if PRINT {
            eprintln!(
                "read::<{}>({}) = {:?} (total = {})",
                type_name::<T>(),
                offset,
                value,
                self.bytes_read.get()
            );
        }
        value
    }
}

impl<A: ScalarWrite, const PRINT: bool> ScalarWrite for CountAccessor<A, PRINT> {
    fn write<T: Scalar>(&self, buf: &mut [u8], offset: usize, value: T) {
        self.accessor.write(buf, offset, value);
        self.writes.set(self.writes.get() + 1);
        self.bytes_written.set(self.bytes_written.get() + T::BYTES);
        if PRINT {
            eprintln!(
                "write::<{}>({}, {:?}) (total = {})",
                type_name::<T>(),
                offset,
                value,
                self.bytes_written.get()
            );
        }
    }
}
