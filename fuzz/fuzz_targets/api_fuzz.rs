#![no_main]
use libfuzzer_sys::fuzz_target;
use sensorpack::api::Service;

const PATHS: [&str; 4] = ["/", "/api/compress/huffman", "/api/compress/delta", "/nope"];
const METHODS: [&str; 3] = ["GET", "POST", "PUT"];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let path = PATHS[usize::from(data[0] & 3)];
    let method = METHODS[usize::from(data[0] >> 2) % METHODS.len()];
    let resp = Service::default().handle(method, path, &data[1..]);
    assert!(matches!(resp.status, 200 | 400 | 404 | 405));
});
