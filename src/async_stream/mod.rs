//! Async chunking support (feature = "async-io").
//!
//! Runtime-agnostic: built on `futures_io::AsyncRead`, so it works with
//! tokio (via a compat wrapper), async-std, smol, or any futures-compatible
//! runtime.

mod stream;

pub use stream::{ChunkStream, chunk_async};
