#![no_main]

use flat_endian::fuzz::accessors::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| harness(data));
