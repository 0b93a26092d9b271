/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::any::type_name;

use crate::traits::*;

/// A wrapper over an accessor that reports on standard error all accesses
/// performed, including the bytes stored by writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbgAccessor<A> {
    accessor: A,
}

impl<A> DbgAccessor<A> {
    pub fn new(accessor: A) -> Self {
        Self { accessor }
    }

    pub fn into_inner(self) -> A {
        self.accessor
    }
}

impl<A: ScalarRead> ScalarRead for DbgAccessor<A> {
    fn read<T: Scalar>(&self, buf: &[u8], offset: usize) -> T {
        let value = self.accessor.read::<T>(buf, offset);
        eprintln!(
            "read::<{}>({}): {:02x?} -> {:?}",
            type_name::<T>(),
            offset,
            &buf[offset..offset + T::BYTES],
            value
        );
        value
    }
}

impl<A: ScalarWrite> ScalarWrite for DbgAccessor<A> {
    fn write<T: Scalar>(&self, buf: &mut [u8], offset: usize, value: T) {
        self.accessor.write(buf, offset, value);
        eprintln!(
            "write::<{}>({}, {:?}) -> {:02x?}",
            type_name::<T>(),
            offset,
            value,
            &buf[offset..offset + T::BYTES]
        );
    }
}
