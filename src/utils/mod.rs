/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Debug helpers.

[`CountAccessor`] keeps track of the number of scalars and bytes read from
or written to buffers through a [`ScalarRead`](crate::traits::ScalarRead) or
[`ScalarWrite`](crate::traits::ScalarWrite), optionally printing on standard
error the operations performed.

[`DbgAccessor`] prints on standard error all accesses, together with the
bytes involved.

*/

mod count;
pub use count::*;

mod dbg;
pub use dbg::*;
