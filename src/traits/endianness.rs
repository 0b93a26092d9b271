/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Marker types and trait used to select byte orders at compile time, and
//! the runtime [`Order`] value describing the same choice.
//!
//! Two orders matter for a flat buffer: the *wire* order in which scalars are
//! stored in the buffer, fixed once for the whole encoding by the
//! `protocol-le`/`protocol-be` features and exposed as [`PE`], and the
//! *native* order of the host, exposed as [`NE`].

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

#[cfg(all(feature = "protocol-le", feature = "protocol-be"))]
compile_error!("features `protocol-le` and `protocol-be` are mutually exclusive");

#[cfg(not(any(feature = "protocol-le", feature = "protocol-be")))]
compile_error!("no wire byte order: enable exactly one of `protocol-le` or `protocol-be`");

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!("the target does not report a supported native byte order");

/// Inner private trait used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Endianness {}
}

/// Marker trait for endianness selector types.
///
/// Its only implementations are [`LittleEndian`] and [`BigEndian`]. The
/// associated constants make it possible to compare two orders in a `const`
/// context, so that code generic over two endiannesses collapses to a single
/// branch after monomorphization.
pub trait Endianness:
    private::Endianness + core::fmt::Debug + Clone + Copy + Default + Send + Sync + 'static
{
    /// A human-readable name for the byte order.
    const NAME: &'static str;
    /// The byte order as a runtime value.
    const ORDER: Order;
    /// Whether this is little-endian.
    const IS_LITTLE: bool;
    /// Whether this is big-endian.
    const IS_BIG: bool;
}

/// Selector type for little-endian byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Selector type for big-endian byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl private::Endianness for LittleEndian {}
impl private::Endianness for BigEndian {}

impl Endianness for LittleEndian {
    const NAME: &'static str = "little";
    const ORDER: Order = Order::Little;
    const IS_LITTLE: bool = true;
    const IS_BIG: bool = false;
}

impl Endianness for BigEndian {
    const NAME: &'static str = "big";
    const ORDER: Order = Order::Big;
    const IS_LITTLE: bool = false;
    const IS_BIG: bool = true;
}

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

/// The native byte order of the target, as reported by `cfg(target_endian)`.
#[cfg(target_endian = "little")]
pub type NE = LittleEndian;

/// The native byte order of the target, as reported by `cfg(target_endian)`.
#[cfg(target_endian = "big")]
pub type NE = BigEndian;

/// The wire (protocol) byte order of the encoding, selected by the
/// `protocol-le` feature.
#[cfg(feature = "protocol-le")]
pub type PE = LittleEndian;

/// The wire (protocol) byte order of the encoding, selected by the
/// `protocol-be` feature.
#[cfg(all(feature = "protocol-be", not(feature = "protocol-le")))]
pub type PE = BigEndian;

/// A byte order as a value.
///
/// This is the runtime counterpart of the [`Endianness`] selector types,
/// suitable for configuration files and for [runtime
/// dispatch](crate::impls::DynScalarAccessor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Order {
    Little,
    Big,
}

impl Order {
    /// The wire order of this build.
    pub const PROTOCOL: Order = PE::ORDER;

    /// The native order of the target, as known at compile time.
    pub const NATIVE: Order = NE::ORDER;

    /// Return the native order as computed by the
    /// [native-order detector](crate::impls::is_native_little_endian).
    pub fn native() -> Order {
        Order::from_little(crate::impls::is_native_little_endian())
    }

    /// Return [`Order::Little`] if `is_little` is true, [`Order::Big`]
    /// otherwise.
    #[inline(always)]
    pub const fn from_little(is_little: bool) -> Order {
        if is_little { Order::Little } else { Order::Big }
    }

    /// Select an order from a pair of mutually exclusive flags.
    ///
    /// This is the value-level version of the check performed at build time
    /// on the `protocol-le`/`protocol-be` features: exactly one flag must be
    /// set.
    pub const fn from_flags(little: bool, big: bool) -> Result<Order, OrderError> {
        match (little, big) {
            (true, false) => Ok(Order::Little),
            (false, true) => Ok(Order::Big),
            (false, false) => Err(OrderError::Unspecified),
            (true, true) => Err(OrderError::Conflicting),
        }
    }

    #[inline(always)]
    pub const fn is_little(self) -> bool {
        matches!(self, Order::Little)
    }

    #[inline(always)]
    pub const fn is_big(self) -> bool {
        matches!(self, Order::Big)
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Order::Little => LittleEndian::NAME,
            Order::Big => BigEndian::NAME,
        })
    }
}

impl core::str::FromStr for Order {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const LITTLE: [&str; 3] = ["le", "little", "little-endian"];
        const BIG: [&str; 3] = ["be", "big", "big-endian"];
        if LITTLE.iter().any(|name| name.eq_ignore_ascii_case(s)) {
            Ok(Order::Little)
        } else if BIG.iter().any(|name| name.eq_ignore_ascii_case(s)) {
            Ok(Order::Big)
        } else {
            Err(OrderError::Unknown)
        }
    }
}

/// The error returned when a byte order cannot be established from a
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    /// Neither little- nor big-endian was selected.
    Unspecified,
    /// Both little- and big-endian were selected.
    Conflicting,
    /// The name of the order was not recognized.
    Unknown,
}

impl core::error::Error for OrderError {}
impl core::fmt::Display for OrderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderError::Unspecified => write!(f, "No byte order has been selected"),
            OrderError::Conflicting => {
                write!(f, "Both little-endian and big-endian byte orders have been selected")
            }
            OrderError::Unknown => write!(
                f,
                "Unknown byte order (expected one of le, little, little-endian, be, big, big-endian)"
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_markers() {
        assert!(LE::IS_LITTLE && !LE::IS_BIG);
        assert!(BE::IS_BIG && !BE::IS_LITTLE);
        assert_eq!(NE::IS_LITTLE, cfg!(target_endian = "little"));
        assert_eq!(PE::IS_LITTLE, cfg!(feature = "protocol-le"));
        assert_eq!(Order::PROTOCOL, PE::ORDER);
        assert_eq!(Order::NATIVE, NE::ORDER);
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(Order::from_flags(true, false), Ok(Order::Little));
        assert_eq!(Order::from_flags(false, true), Ok(Order::Big));
        assert_eq!(Order::from_flags(false, false), Err(OrderError::Unspecified));
        assert_eq!(Order::from_flags(true, true), Err(OrderError::Conflicting));
        assert_eq!(Order::from_little(true), Order::Little);
        assert_eq!(Order::from_little(false), Order::Big);
        assert_eq!(Order::from_little(NE::IS_LITTLE), Order::NATIVE);
    }

    #[test]
    fn test_parse() {
        for name in ["le", "LE", "Little", "little-endian"] {
            assert_eq!(name.parse::<Order>(), Ok(Order::Little));
        }
        for name in ["be", "BIG", "big-Endian"] {
            assert_eq!(name.parse::<Order>(), Ok(Order::Big));
        }
        assert_eq!("middle".parse::<Order>(), Err(OrderError::Unknown));
        assert_eq!("".parse::<Order>(), Err(OrderError::Unknown));
    }
}
