//! Chunking engine for processing byte streams.
//!
//! - [`Chunker`] - stateful engine with `feed()`/`finish()` API
//! - [`ChunkIter`] - iterator that yields chunks from a [`std::io::Read`] source
//! - [`chunk_bytes`] - one-shot convenience for in-memory data

mod engine;
mod iter;

pub use engine::{Chunker, chunk_bytes};
pub use iter::ChunkIter;
