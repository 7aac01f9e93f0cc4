#![no_main]
use libfuzzer_sys::fuzz_target;
use sensorpack::delta::{self, ELEMENT_WIDTH};
use sensorpack::{Compressor, DifferenceEncoder};

fuzz_target!(|data: &[u8]| {
    let enc = DifferenceEncoder::new();
    let out = enc.compress(data);
    assert_eq!(out.original_size % ELEMENT_WIDTH, 0);
    assert!(out.compressed_size <= out.original_size);

    // Parsed values survive a difference round trip.
    let values = enc.parse(&String::from_utf8_lossy(data));
    assert_eq!(delta::reconstruct(&delta::encode(&values)), values);
});
