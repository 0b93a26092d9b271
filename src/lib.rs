/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod catalogue;
pub mod impls;
pub mod traits;
#[cfg(feature = "std")]
pub mod utils;

#[cfg(feature = "fuzz")]
pub mod fuzz;

/// Prelude module to import everything from this crate
pub mod prelude {
    pub use crate::catalogue::{CATALOGUE, SOffset, THash, UOffset, UType, UnionType, VOffset};
    pub use crate::impls::*;
    pub use crate::traits::*;
    #[cfg(feature = "std")]
    pub use crate::utils::*;
}
