/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u8>,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Kind {
    U8,
    I8,
    U16,
    U32,
    U64,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    Write(u16, Value),
    Read(u16, Kind),
}

/// The buffers written by the four combinations of wire and native order,
/// and the reference buffers written with `to_le_bytes`/`to_be_bytes`.
struct Buffers {
    le_on_le: Vec<u8>,
    le_on_be: Vec<u8>,
    be_on_le: Vec<u8>,
    be_on_be: Vec<u8>,
    le: Vec<u8>,
    be: Vec<u8>,
}

impl Buffers {
    fn check(&self) {
        assert_eq!(self.le_on_le, self.le);
        assert_eq!(self.le_on_be, self.le);
        assert_eq!(self.be_on_le, self.be);
        assert_eq!(self.be_on_be, self.be);
    }
}

fn write<T: Scalar>(bufs: &mut Buffers, offset: usize, value: T, le: &[u8], be: &[u8]) {
    let in_bounds = check_range(bufs.le.len(), offset, T::BYTES).is_ok();
    let results = [
        ScalarAccessor::<LE, LE>::new().try_write(&mut bufs.le_on_le, offset, value),
        ScalarAccessor::<LE, BE>::new().try_write(&mut bufs.le_on_be, offset, value),
        ScalarAccessor::<BE, LE>::new().try_write(&mut bufs.be_on_le, offset, value),
        ScalarAccessor::<BE, BE>::new().try_write(&mut bufs.be_on_be, offset, value),
    ];
    for result in results {
        assert_eq!(result.is_ok(), in_bounds);
    }
    if in_bounds {
        bufs.le[offset..offset + T::BYTES].copy_from_slice(le);
        bufs.be[offset..offset + T::BYTES].copy_from_slice(be);
    }
    bufs.check();
}

fn read<T: Scalar>(
    bufs: &Buffers,
    offset: usize,
    from_le: impl Fn(&[u8]) -> T,
    from_be: impl Fn(&[u8]) -> T,
) {
    let results = [
        ScalarAccessor::<LE, LE>::new().try_read::<T>(&bufs.le_on_le, offset),
        ScalarAccessor::<LE, BE>::new().try_read::<T>(&bufs.le_on_be, offset),
        ScalarAccessor::<BE, LE>::new().try_read::<T>(&bufs.be_on_le, offset),
        ScalarAccessor::<BE, BE>::new().try_read::<T>(&bufs.be_on_be, offset),
    ];
    if check_range(bufs.le.len(), offset, T::BYTES).is_err() {
        assert!(results.iter().all(|result| result.is_err()));
        return;
    }
    let expected_le = from_le(&bufs.le[offset..offset + T::BYTES]).to_word();
    let expected_be = from_be(&bufs.be[offset..offset + T::BYTES]).to_word();
    let words = results.map(|result| result.map(Scalar::to_word));
    assert_eq!(words[0], Ok(expected_le));
    assert_eq!(words[1], Ok(expected_le));
    assert_eq!(words[2], Ok(expected_be));
    assert_eq!(words[3], Ok(expected_be));
}

macro_rules! from_bytes {
    ($ty:ty) => {
        (
            |bytes: &[u8]| <$ty>::from_le_bytes(bytes.try_into().unwrap()),
            |bytes: &[u8]| <$ty>::from_be_bytes(bytes.try_into().unwrap()),
        )
    };
}

pub fn harness(data: FuzzCase) {
    let mut bufs = Buffers {
        le_on_le: data.init.clone(),
        le_on_be: data.init.clone(),
        be_on_le: data.init.clone(),
        be_on_be: data.init.clone(),
        le: data.init.clone(),
        be: data.init,
    };
    let modulus = bufs.le.len() + 9;

    for command in data.commands {
        match command {
            RandomCommand::Write(offset, value) => {
                let offset = offset as usize % modulus;
                match value {
                    Value::U8(v) => write(&mut bufs, offset, v, &[v], &[v]),
                    Value::U16(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::U32(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::U64(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::I8(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::I16(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::I32(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::I64(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::F32(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::F64(v) => {
                        write(&mut bufs, offset, v, &v.to_le_bytes(), &v.to_be_bytes())
                    }
                    Value::Bool(v) => write(&mut bufs, offset, v, &[v as u8], &[v as u8]),
                }
            }
            RandomCommand::Read(offset, kind) => {
                let offset = offset as usize % modulus;
                match kind {
                    Kind::U8 => read::<u8>(&bufs, offset, |b| b[0], |b| b[0]),
                    Kind::I8 => read::<i8>(&bufs, offset, |b| b[0] as i8, |b| b[0] as i8),
                    Kind::Bool => read::<bool>(&bufs, offset, |b| b[0] != 0, |b| b[0] != 0),
                    Kind::U16 => {
                        let (le, be) = from_bytes!(u16);
                        read(&bufs, offset, le, be)
                    }
                    Kind::U32 => {
                        let (le, be) = from_bytes!(u32);
                        read(&bufs, offset, le, be)
                    }
                    Kind::U64 => {
                        let (le, be) = from_bytes!(u64);
                        read(&bufs, offset, le, be)
                    }
                    Kind::I16 => {
                        let (le, be) = from_bytes!(i16);
                        read(&bufs, offset, le, be)
                    }
                    Kind::I32 => {
                        let (le, be) = from_bytes!(i32);
                        read(&bufs, offset, le, be)
                    }
                    Kind::I64 => {
                        let (le, be) = from_bytes!(i64);
                        read(&bufs, offset, le, be)
                    }
                    Kind::F32 => {
                        let (le, be) = from_bytes!(f32);
                        read(&bufs, offset, le, be)
                    }
                    Kind::F64 => {
                        let (le, be) = from_bytes!(f64);
                        read(&bufs, offset, le, be)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_harness() {
        harness(FuzzCase {
            init: vec![0x80; 12],
            commands: vec![
                RandomCommand::Read(3, Kind::I8),
                RandomCommand::Write(4, Value::I8(-5)),
                RandomCommand::Read(4, Kind::I8),
                RandomCommand::Write(2, Value::I64(-1 << 40)),
                RandomCommand::Read(2, Kind::I64),
                RandomCommand::Read(9, Kind::U32),
                RandomCommand::Write(11, Value::F32(1.5)),
                RandomCommand::Write(20, Value::U8(1)),
                RandomCommand::Read(0, Kind::Bool),
                RandomCommand::Read(0, Kind::F64),
            ],
        });
    }
}
