//! Core chunking engine - Chunker with streaming API.
//!
//! The [`Chunker`] drives each input byte through the rolling checksum and
//! the boundary detector, and emits completed chunks as boundaries are
//! confirmed:
//!
//! - `feed()` - supply bytes in any size (1 byte, 8 KiB, 1 MiB, ...)
//! - `finish()` - flush the in-flight partial chunk when the stream ends
//!
//! # Example
//!
//! ```
//! use rollingcs::{Chunker, ChunkConfig};
//! use bytes::Bytes;
//!
//! let mut chunker = Chunker::new(ChunkConfig::default())?;
//!
//! let chunks = chunker.feed(Bytes::from_static(b"first buffer"))?;
//! let more = chunker.feed(Bytes::from_static(b"second buffer"))?;
//! let last = chunker.finish()?;
//! # Ok::<(), rollingcs::ChunkError>(())
//! ```

use bytes::Bytes;

use crate::boundary::{BoundaryDetector, Decision};
use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::error::ChunkError;
use crate::rolling::RollingChecksum;
use crate::util::combine_bytes;

/// A chunker that splits streaming byte data into content-defined chunks.
///
/// `Chunker` consumes bytes strictly in order, maintains only the fixed
/// checksum window and the in-flight chunk's pending bytes, and yields each
/// chunk as soon as its boundary is confirmed. It never reads ahead and
/// never buffers the whole stream.
///
/// # Determinism
///
/// Identical byte streams produce identical chunk boundaries regardless of
/// how the input is split across `feed()` calls. Caller buffer boundaries
/// have no relationship to chunk boundaries.
///
/// # Lifecycle
///
/// A stream moves through `feed()` calls to a single `finish()`. After
/// `finish()` the stream is terminal: further `feed()` or `finish()` calls
/// return [`ChunkError::StreamClosed`]. Call [`Chunker::reset`] to reuse the
/// instance for a new stream without reallocating.
///
/// The checksum window intentionally rolls across chunk boundaries, so a
/// boundary decision depends only on the trailing `window_size` bytes of
/// content. That is what lets boundaries re-align a window's worth of bytes
/// after an insertion or deletion elsewhere in the stream.
///
/// # Zero-copy
///
/// Chunks that fall entirely inside one `feed()` buffer are zero-copy slices
/// of that buffer. Only chunks spanning multiple calls are assembled into a
/// fresh allocation.
#[derive(Debug)]
pub struct Chunker {
    checksum: RollingChecksum,
    detector: BoundaryDetector,
    pending: Option<Bytes>,
    offset: u64,
    finished: bool,
    config: ChunkConfig,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if the configuration is invalid
    /// (see [`ChunkConfig::new`]). Misconfiguration is always rejected here,
    /// never during `feed`.
    pub fn new(config: ChunkConfig) -> Result<Self, ChunkError> {
        config.validate()?;

        Ok(Self {
            checksum: RollingChecksum::new(config.window_size())?,
            detector: BoundaryDetector::from_config(&config),
            pending: None,
            offset: 0,
            finished: false,
            config,
        })
    }

    /// Feeds bytes into the chunker and returns the chunks completed by them.
    ///
    /// Bytes that do not yet complete a chunk are held internally as the
    /// in-flight chunk and joined with input from subsequent calls. Every
    /// returned chunk satisfies `min_size <= len <= max_size`.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::StreamClosed`] if called after [`Chunker::finish`].
    pub fn feed(&mut self, data: impl Into<Bytes>) -> Result<Vec<Chunk>, ChunkError> {
        if self.finished {
            return Err(ChunkError::StreamClosed);
        }

        let data = data.into();
        let mut chunks = Vec::new();
        let mut chunk_start = 0usize;

        for (i, &byte) in data.iter().enumerate() {
            let digest = self.checksum.roll(byte);
            let chunk_len = self.pending_len() + (i + 1 - chunk_start);

            match self.detector.observe(digest, chunk_len) {
                Decision::Continue => {}
                Decision::Boundary | Decision::ForceBoundary => {
                    let chunk_data = match self.pending.take() {
                        Some(pending) => combine_bytes(&pending, &data[chunk_start..=i]),
                        None => data.slice(chunk_start..=i),
                    };

                    let chunk_offset = self.offset;
                    self.offset += chunk_data.len() as u64;
                    chunks.push(Chunk::new(chunk_data, chunk_offset));
                    chunk_start = i + 1;
                }
            }
        }

        if chunk_start < data.len() {
            let rest = data.slice(chunk_start..);
            self.pending = Some(match self.pending.take() {
                Some(pending) => combine_bytes(&pending, &rest),
                None => rest,
            });
        }

        Ok(chunks)
    }

    /// Finalizes the stream, flushing any in-flight bytes as the last chunk.
    ///
    /// This is the only circumstance under which a chunk shorter than
    /// `min_size` is emitted. Returns `None` when no bytes are pending, so an
    /// empty stream yields zero chunks rather than a degenerate empty one.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::StreamClosed`] if the stream was already
    /// finalized.
    pub fn finish(&mut self) -> Result<Option<Chunk>, ChunkError> {
        if self.finished {
            return Err(ChunkError::StreamClosed);
        }
        self.finished = true;

        match self.pending.take() {
            Some(pending) if !pending.is_empty() => {
                let chunk_offset = self.offset;
                self.offset += pending.len() as u64;
                Ok(Some(Chunk::new(pending, chunk_offset)))
            }
            _ => Ok(None),
        }
    }

    /// Resets the chunker for a new stream, reusing allocations.
    pub fn reset(&mut self) {
        self.checksum.reset();
        self.pending = None;
        self.offset = 0;
        self.finished = false;
    }

    /// Returns the stream offset of the next byte to complete a chunk, i.e.
    /// the start offset of the in-flight chunk.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the number of in-flight bytes not yet part of a completed
    /// chunk.
    pub fn pending_len(&self) -> usize {
        self.pending.as_ref().map_or(0, |b| b.len())
    }

    /// Returns true once [`Chunker::finish`] has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }
}

/// Chunks an in-memory buffer in one shot.
///
/// Convenience wrapper around [`Chunker::feed`] + [`Chunker::finish`] for
/// data that is already in memory. Chunk data is zero-copy sliced from the
/// input.
///
/// # Example
///
/// ```
/// use rollingcs::{chunk_bytes, ChunkConfig};
///
/// let data: Vec<u8> = (0..100u32).map(|i| (i * 7 + 13) as u8).collect();
/// let chunks = chunk_bytes(data, ChunkConfig::new(8, 4, 16, 3)?)?;
/// assert!(!chunks.is_empty());
/// # Ok::<(), rollingcs::ChunkError>(())
/// ```
pub fn chunk_bytes(
    data: impl Into<Bytes>,
    config: ChunkConfig,
) -> Result<Vec<Chunk>, ChunkError> {
    let mut chunker = Chunker::new(config)?;
    let mut chunks = chunker.feed(data)?;
    if let Some(last) = chunker.finish()? {
        chunks.push(last);
    }
    Ok(chunks)
}
