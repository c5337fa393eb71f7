//! The Chunk type - a contiguous byte range of the input stream.

use bytes::Bytes;
use std::fmt;

/// A content-defined chunk: the raw bytes of a `[start, end)` range of the
/// input stream.
///
/// Chunks are emitted in strictly increasing, contiguous order: each chunk's
/// `end()` equals the next chunk's `start()`, the first chunk starts at 0,
/// and the last ends exactly at end-of-stream. The chunker hands each chunk
/// to the caller and retains nothing; hashing and storage are the caller's
/// responsibility.
///
/// # Example
///
/// ```
/// use rollingcs::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk::new(Bytes::from_static(b"hello world"), 128);
/// assert_eq!(chunk.start(), 128);
/// assert_eq!(chunk.end(), 139);
/// assert_eq!(chunk.range(), 128..139);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk data (zero-copy slice of the input where possible).
    pub data: Bytes,

    /// Byte offset of this chunk's first byte in the stream.
    pub offset: u64,
}

impl Chunk {
    /// Creates a new chunk at the given stream offset.
    pub fn new(data: impl Into<Bytes>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset,
        }
    }

    /// Returns the length of the chunk in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the start offset.
    pub fn start(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk's byte range in the stream.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.start()..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {})", self.len(), self.offset)
    }
}
