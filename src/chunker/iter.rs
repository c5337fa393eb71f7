//! Lazy chunk iterator over a [`std::io::Read`] source.

use std::collections::VecDeque;
use std::io::Read;

use bytes::Bytes;

use crate::buffer::Buffer;
use crate::chunk::Chunk;
use crate::chunker::Chunker;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// An iterator that yields chunks from a reader.
///
/// `ChunkIter` reads from the source through a pooled buffer and drives the
/// bytes through a [`Chunker`], yielding `Result<Chunk, ChunkError>` as
/// boundaries are found. It is lazy: no more than one read buffer plus the
/// in-flight chunk is held at a time, so arbitrarily large sources can be
/// chunked in bounded memory.
///
/// The final partial chunk is emitted at end-of-input; an iterator over an
/// empty source yields nothing.
///
/// # Example
///
/// ```
/// use rollingcs::{ChunkIter, ChunkConfig};
/// use std::io::Cursor;
///
/// let data: Vec<u8> = (0..500u32).map(|i| (i * 7 + 13) as u8).collect();
/// let iter = ChunkIter::new(Cursor::new(&data), ChunkConfig::new(8, 4, 16, 3)?)?;
///
/// let total: usize = iter.map(|c| c.map(|c| c.len())).sum::<Result<_, _>>()?;
/// assert_eq!(total, data.len());
/// # Ok::<(), rollingcs::ChunkError>(())
/// ```
pub struct ChunkIter<R> {
    reader: R,
    engine: Chunker,
    ready: VecDeque<Chunk>,
    buf: Buffer,
    done: bool,
}

impl<R: Read> ChunkIter<R> {
    /// Creates a chunk iterator over the given reader.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] for an invalid configuration.
    pub fn new(reader: R, config: ChunkConfig) -> Result<Self, ChunkError> {
        Ok(Self {
            reader,
            engine: Chunker::new(config)?,
            ready: VecDeque::new(),
            buf: Buffer::take(),
            done: false,
        })
    }

    /// Consumes the iterator and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chunk) = self.ready.pop_front() {
                return Some(Ok(chunk));
            }
            if self.done {
                return None;
            }

            match self.reader.read(self.buf.as_mut_slice()) {
                Ok(0) => {
                    self.done = true;
                    return match self.engine.finish() {
                        Ok(Some(chunk)) => Some(Ok(chunk)),
                        Ok(None) => None,
                        Err(e) => Some(Err(e)),
                    };
                }
                Ok(n) => {
                    let data = Bytes::copy_from_slice(&self.buf.as_slice()[..n]);
                    match self.engine.feed(data) {
                        Ok(chunks) => self.ready.extend(chunks),
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
