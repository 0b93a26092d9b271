/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

*/

mod endianness;
pub use endianness::*;

mod word;
pub use word::*;

mod scalar;
pub use scalar::*;

mod access;
pub use access::*;
