/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use flat_endian::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_matches_static() {
    let mut rng = SmallRng::seed_from_u64(0);
    for wire in [Order::Little, Order::Big] {
        for native in [Order::Little, Order::Big] {
            let dynamic = DynScalarAccessor::with_native(wire, native);
            let mut dyn_buf = [0_u8; 16];
            let mut static_buf = [0_u8; 16];
            for _ in 0..1000 {
                let value: u32 = rng.random();
                let offset = rng.random_range(0..12);
                dynamic.write(&mut dyn_buf, offset, value);
                match wire {
                    Order::Little => {
                        ScalarAccessor::<LE>::new().write(&mut static_buf, offset, value)
                    }
                    Order::Big => {
                        ScalarAccessor::<BE>::new().write(&mut static_buf, offset, value)
                    }
                }
                assert_eq!(dyn_buf, static_buf);
                assert_eq!(dynamic.read::<u32>(&dyn_buf, offset), value);
            }
        }
    }
}

#[test]
fn test_checked() {
    let accessor = DynScalarAccessor::new(Order::Big);
    let mut buf = [0_u8; 4];
    assert_eq!(accessor.try_write(&mut buf, 2, 1_u16), Ok(()));
    assert_eq!(buf, [0, 0, 0, 1]);
    assert_eq!(
        accessor.try_read::<u32>(&buf, 1),
        Err(AccessError::OutOfBounds {
            offset: 1,
            width: 4,
            len: 4
        })
    );
    assert!(accessor.try_write(&mut buf, usize::MAX, 0_u16).is_err());
    assert_eq!(buf, [0, 0, 0, 1]);
}

#[test]
fn test_order_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let accessor = DynScalarAccessor::new("little".parse()?);
    assert_eq!(accessor.wire(), Order::Little);
    assert_eq!(accessor.native(), Order::native());
    assert!("middle".parse::<Order>().is_err());
    assert_eq!(DynScalarAccessor::default().wire(), PE::ORDER);
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
    for order in [Order::Little, Order::Big] {
        let json = serde_json::to_string(&order)?;
        assert_eq!(serde_json::from_str::<Order>(&json)?, order);
    }
    assert_eq!(serde_json::to_string(&ScalarKind::Float)?, "\"float\"");
    assert_eq!(
        serde_json::from_str::<ScalarKind>("\"signed\"")?,
        ScalarKind::Signed
    );
    Ok(())
}

#[cfg(feature = "mem_dbg")]
#[test]
fn test_mem_size() {
    use mem_dbg::{MemSize, SizeFlags};
    assert_eq!(
        Order::Big.mem_size(SizeFlags::default()),
        core::mem::size_of::<Order>()
    );
    assert_eq!(
        ScalarKind::Float.mem_size(SizeFlags::default()),
        core::mem::size_of::<ScalarKind>()
    );
    assert_eq!(
        DynScalarAccessor::protocol().mem_size(SizeFlags::default()),
        core::mem::size_of::<DynScalarAccessor>()
    );
}

#[test]
fn test_count() {
    let counter = CountAccessor::<_, false>::new(DynScalarAccessor::new(Order::Little));
    let mut buf = [0_u8; 16];
    counter.write(&mut buf, 0, 1_u64);
    counter.write(&mut buf, 8, 2_u16);
    assert_eq!(counter.read::<u64>(&buf, 0), 1);
    assert_eq!(counter.writes(), 2);
    assert_eq!(counter.reads(), 1);
    assert_eq!(counter.bytes_written(), 10);
    assert_eq!(counter.bytes_read(), 8);
}
