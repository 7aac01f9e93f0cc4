// End-to-end tests across the public API: encoders, adapter and batch.

use sensorpack::api::{ApiError, Endpoint, Service, extract_payload};
use sensorpack::batch::{compress_batch, totals};
use sensorpack::delta::{DeltaOptions, SmoothSeries};
use sensorpack::prefix::{FrequencyTable, MergeTree};
use sensorpack::{CompressionOutcome, Compressor, DifferenceEncoder, HuffmanEncoder};

fn temperature_feed(n: usize) -> String {
    (0..n)
        .map(|i| format!("{:.2}", 21.0 + (i % 7) as f64 * 0.05))
        .collect::<Vec<_>>()
        .join(",")
}

// ---------------------------------------------------------------------------
// Huffman
// ---------------------------------------------------------------------------

#[test]
fn abracadabra_end_to_end() {
    let input = b"abracadabra";
    let freq = FrequencyTable::from_bytes(input);
    let expected: Vec<(u8, u64)> = vec![(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)];
    assert_eq!(freq.iter().collect::<Vec<_>>(), expected);

    let tree = MergeTree::build(&freq).unwrap();
    assert_eq!(tree.leaf_count(), 5);

    let table = HuffmanEncoder.code_table(input).unwrap();
    let lengths: Vec<usize> = b"abcdr".iter().map(|&b| table.get(b).unwrap().len()).collect();
    assert_eq!(lengths, vec![1, 3, 3, 3, 3]);

    // 5*1 + 6*3 = 23 bits -> 3 bytes, strictly less than 11.
    let out = HuffmanEncoder.compress(input);
    assert_eq!(out.compressed_size, 3);
    assert!(out.compressed_size < input.len());
}

#[test]
fn text_feed_shrinks_with_huffman() {
    let feed = temperature_feed(50);
    let out = HuffmanEncoder.compress(feed.as_bytes());
    assert!(out.ratio > 0.0, "ratio {}", out.ratio);
    assert_eq!(out.original_size, feed.len());
}

#[test]
fn two_symbols_pack_into_one_byte() {
    // Two distinct bytes: each gets a 1-bit code, padding rounds up to one byte.
    let out = HuffmanEncoder.compress(b"xy");
    assert_eq!(out.compressed_size, 1);
    assert_eq!(out.ratio, 50.0);
}

// ---------------------------------------------------------------------------
// Delta
// ---------------------------------------------------------------------------

#[test]
fn temperature_feed_is_simulated_by_default() {
    let feed = temperature_feed(50);
    let out = DifferenceEncoder::new().compress(feed.as_bytes());
    assert!(out.simulated);
    assert_eq!(out.original_size, 200);
    assert_eq!(out.compressed_size, 140);
    assert_eq!(out.ratio, 30.0);
}

#[test]
fn literal_sizes_without_simulation() {
    let enc = DifferenceEncoder::with_options(DeltaOptions {
        smooth_series: None,
        ..Default::default()
    });
    let out = enc.compress(temperature_feed(50).as_bytes());
    assert_eq!(out.compressed_size, out.original_size);
    assert_eq!(out.ratio, 0.0);
}

#[test]
fn stricter_threshold_rejects_feed() {
    let enc = DifferenceEncoder::with_options(DeltaOptions {
        smooth_series: Some(SmoothSeries {
            max_step: 0,
            ..Default::default()
        }),
        ..Default::default()
    });
    assert!(!enc.compress(temperature_feed(50).as_bytes()).simulated);
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

#[test]
fn service_routes_both_encoders() {
    let svc = Service::default();
    let feed = temperature_feed(50);

    let huff = svc.handle("POST", Endpoint::Huffman.path(), feed.as_bytes());
    assert_eq!(huff.status, 200);
    assert_eq!(huff.body["originalSize"], feed.len());

    let delta = svc.handle("POST", Endpoint::Delta.path(), feed.as_bytes());
    assert_eq!(delta.status, 200);
    assert_eq!(delta.body["originalSize"], 200);
    assert_eq!(delta.body["compressedSize"], 140);
    assert_eq!(delta.body["compressionRatio"], 30.0);
}

#[test]
fn service_rejects_missing_field_and_empty_body() {
    let svc = Service::default();
    let missing = svc.handle("POST", "/api/compress/delta", br#"{"values":[1,2]}"#);
    assert_eq!(missing.status, 400);
    assert_eq!(
        missing.body["error"],
        ApiError::MissingField.to_string().as_str()
    );
    assert_eq!(extract_payload(b""), Err(ApiError::EmptyPayload));
}

#[test]
fn compressor_lookup_by_endpoint() {
    let svc = Service::new(DeltaOptions::default());
    assert_eq!(svc.compressor(Endpoint::Huffman).unwrap().name(), "huffman");
    assert_eq!(svc.compressor(Endpoint::Delta).unwrap().name(), "delta");
    assert!(svc.compressor(Endpoint::Index).is_none());
}

// ---------------------------------------------------------------------------
// Batch / reentrancy
// ---------------------------------------------------------------------------

#[test]
fn concurrent_calls_are_independent() {
    let enc = HuffmanEncoder;
    let inputs: Vec<Vec<u8>> = (0..8).map(|i| temperature_feed(10 + i).into_bytes()).collect();
    let expected: Vec<CompressionOutcome> = inputs.iter().map(|i| enc.compress(i)).collect();

    let results: Vec<CompressionOutcome> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| s.spawn(move || enc.compress(input)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, expected);
}

#[test]
fn batch_totals() {
    let payloads = vec![temperature_feed(50), String::new(), "1,2,3".to_string()];
    let outcomes = compress_batch(&DifferenceEncoder::new(), &payloads);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(totals(&outcomes), (200 + 12, 140 + 12));
}
