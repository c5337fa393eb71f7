#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use rollingcs::{ChunkConfig, Chunker, chunk_bytes};

// Feeding the stream in arbitrary splits must yield the same boundaries as
// a single one-shot call.
fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, split_seed) = input;
    let config = ChunkConfig::new(8, 4, 64, 4).unwrap();

    let reference = chunk_bytes(data.clone(), config).unwrap();

    let split = (split_seed as usize % 37) + 1;
    let mut chunker = Chunker::new(config).unwrap();
    let mut pieces = Vec::new();
    for part in data.chunks(split) {
        pieces.extend(chunker.feed(Bytes::copy_from_slice(part)).unwrap());
    }
    pieces.extend(chunker.finish().unwrap());

    assert_eq!(reference.len(), pieces.len());
    for (a, b) in reference.iter().zip(pieces.iter()) {
        assert_eq!(a.range(), b.range());
        assert_eq!(a.data, b.data);
    }

    // Feeding after finish is caller misuse and must surface immediately
    assert!(chunker.feed(Bytes::from_static(b"x")).is_err());
});
