/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of byte-order detection, conversion, and scalar accessors.

The native order of the host is available at compile time as [`NE`], and at
runtime from [`is_native_little_endian`], which falls back to a probe of the
memory representation of a constant if no compile-time signal is available.

Byte-order conversions of raw words are provided by [`wire_to_host`] and
[`host_to_wire`], which are generic in the wire and native orders, and by
their width-specific versions for the orders of the build, such as
[`wire_to_host_32`].

Typed accesses to buffers go through [`ScalarAccessor`], whose wire and
native orders are type parameters, or through [`DynScalarAccessor`], whose
orders are selected at runtime. Both implement
[`ScalarRead`](crate::traits::ScalarRead) and
[`ScalarWrite`](crate::traits::ScalarWrite).

[`NE`]: crate::traits::NE

*/

mod native;
pub use native::*;

mod swap;
pub use swap::*;

mod accessor;
pub use accessor::ScalarAccessor;

mod dynamic;
pub use dynamic::DynScalarAccessor;
