/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use flat_endian::catalogue;
use flat_endian::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_scenarios() {
    let mut buf = [0_u8; 4];

    ScalarAccessor::<LE, BE>::new().write(&mut buf, 0, 0x01020304_u32);
    assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);

    ScalarAccessor::<BE, BE>::new().write(&mut buf, 0, 0x01020304_u32);
    assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);

    let buf = [0x00, 0x00, 0x80, 0x3F];
    assert_eq!(ScalarAccessor::<LE, LE>::new().read::<f32>(&buf, 0), 1.0);
    assert_eq!(ScalarAccessor::<LE, BE>::new().read::<f32>(&buf, 0), 1.0);

    let mut buf = [0_u8; 2];
    ScalarAccessor::<BE, LE>::new().write(&mut buf, 0, -2_i16);
    assert_eq!(buf, [0xFF, 0xFE]);
}

#[test]
fn test_wire_bytes() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut le_on_le = [0_u8; 8];
    let mut le_on_be = [0_u8; 8];
    let mut be_on_le = [0_u8; 8];
    let mut be_on_be = [0_u8; 8];
    for _ in 0..1000 {
        let value: u64 = rng.random();
        ScalarAccessor::<LE, LE>::new().write(&mut le_on_le, 0, value);
        ScalarAccessor::<LE, BE>::new().write(&mut le_on_be, 0, value);
        ScalarAccessor::<BE, LE>::new().write(&mut be_on_le, 0, value);
        ScalarAccessor::<BE, BE>::new().write(&mut be_on_be, 0, value);

        // The bytes depend on the wire order only
        assert_eq!(le_on_le, value.to_le_bytes());
        assert_eq!(le_on_be, value.to_le_bytes());
        assert_eq!(be_on_le, value.to_be_bytes());
        assert_eq!(be_on_be, value.to_be_bytes());

        // The two wire orders lay out each other's bytes reversed
        let mut reversed = be_on_le;
        reversed.reverse();
        assert_eq!(le_on_le, reversed);
    }
}

#[test]
fn test_protocol_order() {
    let mut buf = [0_u8; 8];
    catalogue::write_u64(&mut buf, 0, 0x0102030405060708);
    let expected = if PE::IS_LITTLE {
        0x0102030405060708_u64.to_le_bytes()
    } else {
        0x0102030405060708_u64.to_be_bytes()
    };
    assert_eq!(buf, expected);
    assert_eq!(catalogue::read_u64(&buf, 0), 0x0102030405060708);
    assert_eq!(ScalarAccessor::protocol().read::<u64>(&buf, 0), 0x0102030405060708);
    assert_eq!(
        if PE::IS_LITTLE {
            catalogue::read_u64_le(&buf, 0)
        } else {
            catalogue::read_u64_be(&buf, 0)
        },
        0x0102030405060708
    );
}

#[test]
fn test_offsets() {
    // A root offset followed by a table with a vtable offset
    let mut buf = vec![0_u8; 32];
    let uoffset = <UOffset as Scalar>::BYTES;
    catalogue::write_uoffset_le(&mut buf, 0, 16);
    catalogue::write_soffset_le(&mut buf, 16, (16 - uoffset) as SOffset);
    catalogue::write_voffset_le(&mut buf, uoffset, 4);
    let table = catalogue::read_uoffset_le(&buf, 0) as usize;
    let vtable = table as isize - catalogue::read_soffset_le(&buf, table) as isize;
    assert_eq!(vtable as usize, uoffset);
    assert_eq!(catalogue::read_voffset_le(&buf, vtable as usize), 4);
    assert_eq!(buf[..uoffset], 16_u64.to_le_bytes()[..uoffset]);
}

#[test]
fn test_generic() {
    fn sum<A: ScalarRead>(accessor: &A, buf: &[u8]) -> i64 {
        (0..buf.len() / 2)
            .map(|i| accessor.read::<i16>(buf, 2 * i) as i64)
            .sum()
    }

    let mut buf = [0_u8; 8];
    let accessor = ScalarAccessor::<BE, NE>::new();
    for (i, value) in [-3_i16, 100, -1000, 7].into_iter().enumerate() {
        accessor.write(&mut buf, 2 * i, value);
    }
    assert_eq!(sum(&accessor, &buf), -896);
    assert_eq!(sum(&DynScalarAccessor::new(Order::Big), &buf), -896);
    assert_ne!(sum(&DynScalarAccessor::new(Order::Little), &buf), -896);
}
