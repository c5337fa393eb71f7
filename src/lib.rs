//! rollingcs
//!
//! Streaming content-defined chunking (CDC) on a windowed rolling checksum.
//!
//! `rollingcs` splits a byte stream into variable-length, content-aligned
//! chunks for deduplicated, content-addressed storage. Chunk boundaries are a
//! pure function of the trailing bytes in a small sliding window, not of
//! absolute position, so identical sub-regions in different versions of data
//! produce identical chunks even after insertions or deletions elsewhere.
//! It is designed as a small, composable primitive for:
//!
//! - deduplication
//! - backup systems
//! - delta synchronization
//! - content-addressable storage
//!
//! The crate intentionally:
//! - does NOT hash chunks (the caller owns chunk identity)
//! - does NOT manage files or paths
//! - does NOT persist or index chunks
//! - does NOT manage concurrency
//!
//! It only does one thing: **bytes in → chunk boundaries out**
//!
//! # Streaming
//!
//! ```
//! use rollingcs::{Chunker, ChunkConfig};
//! use bytes::Bytes;
//!
//! fn main() -> Result<(), rollingcs::ChunkError> {
//!     let mut chunker = Chunker::new(ChunkConfig::default())?;
//!
//!     for buffer in [Bytes::from_static(b"some"), Bytes::from_static(b"bytes")] {
//!         for chunk in chunker.feed(buffer)? {
//!             println!("chunk {} bytes @ {}", chunk.len(), chunk.start());
//!         }
//!     }
//!     if let Some(chunk) = chunker.finish()? {
//!         println!("final chunk {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Reader
//!
//! ```no_run
//! use std::fs::File;
//! use rollingcs::{ChunkIter, ChunkConfig, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let file = File::open("data.bin")?;
//!
//!     for chunk in ChunkIter::new(file, ChunkConfig::default())? {
//!         let chunk = chunk?;
//!         println!("chunk {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use rollingcs::{chunk_async, ChunkConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), rollingcs::ChunkError> {
//!     let mut stream = std::pin::pin!(chunk_async(reader, ChunkConfig::default())?);
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("chunk {}", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boundary;
mod chunk;
mod chunker;
mod config;
mod error;
mod rolling;

mod buffer; // internal (thread-local reuse)
mod util; // internal helpers

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use boundary::{BoundaryDetector, Decision};
pub use chunk::Chunk;
pub use chunker::{ChunkIter, Chunker, chunk_bytes};
pub use config::{
    ChunkConfig, DEFAULT_MASK_BITS, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE,
    DEFAULT_WINDOW_SIZE,
};
pub use error::ChunkError;
pub use rolling::RollingChecksum;

#[cfg(feature = "async-io")]
pub use async_stream::{ChunkStream, chunk_async};
