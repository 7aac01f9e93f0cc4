#![no_main]
use libfuzzer_sys::fuzz_target;
use sensorpack::prefix::FrequencyTable;
use sensorpack::{Compressor, HuffmanEncoder};

fuzz_target!(|data: &[u8]| {
    let out = HuffmanEncoder.compress(data);
    assert_eq!(out.original_size, data.len());
    assert_eq!(out.data.len(), out.compressed_size);

    let Some(table) = HuffmanEncoder.code_table(data) else {
        assert!(data.is_empty());
        assert_eq!(out.compressed_size, 0);
        return;
    };
    assert!(table.is_prefix_free());
    let bits = table.encoded_bits(&FrequencyTable::from_bytes(data));
    assert_eq!(out.compressed_size as u64, bits.div_ceil(8));
});
