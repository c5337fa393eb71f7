#![no_main]

use libfuzzer_sys::fuzz_target;
use rollingcs::{ChunkConfig, chunk_bytes};

fuzz_target!(|data: Vec<u8>| {
    let configs = vec![
        // Small chunks
        ChunkConfig::new(8, 4, 16, 3).unwrap(),
        // Medium chunks
        ChunkConfig::new(16, 64, 1024, 8).unwrap(),
        // Large chunks
        ChunkConfig::new(48, 256, 16384, 12).unwrap(),
        // Default config
        ChunkConfig::default(),
    ];

    for config in configs {
        let chunks = chunk_bytes(data.clone(), config).unwrap();

        // Verify: all chunks are within min/max bounds
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(chunk.len() <= config.max_size());
            // Only enforce min_size for chunks that are not the last one
            if i < chunks.len() - 1 {
                assert!(chunk.len() >= config.min_size());
            }
        }

        // Verify: total bytes match input
        let total_bytes: usize = chunks.iter().map(|c| c.len()).sum();
        assert_eq!(total_bytes, data.len());

        // Verify: chunks are contiguous from offset 0
        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.start(), expected_offset);
            expected_offset = chunk.end();
        }

        // Verify: determinism - same input produces same chunks
        let chunks2 = chunk_bytes(data.clone(), config).unwrap();
        assert_eq!(chunks.len(), chunks2.len());
        for (c1, c2) in chunks.iter().zip(chunks2.iter()) {
            assert_eq!(c1.data, c2.data);
            assert_eq!(c1.range(), c2.range());
        }
    }
});
