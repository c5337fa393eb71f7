//! Async stream adapter for chunking.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunk::Chunk;
use crate::chunker::Chunker;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

pin_project! {
    /// A stream that yields chunks from an async reader.
    ///
    /// Wraps the same [`Chunker`] engine as the sync API, so chunk
    /// boundaries are identical to those produced synchronously for the
    /// same bytes and configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use rollingcs::{chunk_async, ChunkConfig};
    /// use futures_util::StreamExt;
    /// use futures_io::AsyncRead;
    ///
    /// async fn demo<R: AsyncRead>(reader: R) -> Result<(), rollingcs::ChunkError> {
    ///     let mut stream = std::pin::pin!(chunk_async(reader, ChunkConfig::default())?);
    ///
    ///     while let Some(chunk) = stream.next().await {
    ///         let chunk = chunk?;
    ///         println!("chunk {} bytes @ {}", chunk.len(), chunk.start());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        engine: Chunker,
        ready: VecDeque<Chunk>,
        buf: Vec<u8>,
        done: bool,
    }
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<Chunk, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(chunk) = this.ready.pop_front() {
                return Poll::Ready(Some(Ok(chunk)));
            }
            if *this.done {
                return Poll::Ready(None);
            }

            match this.reader.as_mut().poll_read(cx, this.buf) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(0)) => {
                    *this.done = true;
                    return match this.engine.finish() {
                        Ok(Some(chunk)) => Poll::Ready(Some(Ok(chunk))),
                        Ok(None) => Poll::Ready(None),
                        Err(e) => Poll::Ready(Some(Err(e))),
                    };
                }
                Poll::Ready(Ok(n)) => {
                    let data = Bytes::copy_from_slice(&this.buf[..n]);
                    match this.engine.feed(data) {
                        Ok(chunks) => this.ready.extend(chunks),
                        Err(e) => {
                            *this.done = true;
                            return Poll::Ready(Some(Err(e)));
                        }
                    }
                }
                Poll::Ready(Err(e)) => {
                    *this.done = true;
                    return Poll::Ready(Some(Err(e.into())));
                }
            }
        }
    }
}

/// Creates a chunk stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O. Tokio users
/// can wrap a `tokio::io::AsyncRead` with `tokio_util::compat`.
///
/// # Errors
///
/// Returns [`ChunkError::InvalidConfig`] for an invalid configuration.
pub fn chunk_async<R: AsyncRead>(
    reader: R,
    config: ChunkConfig,
) -> Result<ChunkStream<R>, ChunkError> {
    Ok(ChunkStream {
        reader,
        engine: Chunker::new(config)?,
        ready: VecDeque::new(),
        buf: vec![0u8; 8192],
        done: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    fn small_config() -> ChunkConfig {
        ChunkConfig::new(8, 4, 16, 3).unwrap()
    }

    #[tokio::test]
    async fn test_stream_empty() {
        let reader: &[u8] = &[];
        let stream = chunk_async(reader, small_config()).unwrap();
        let chunks: Vec<_> = stream.collect().await;
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn test_stream_covers_source() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 31 + 7) as u8).collect();
        let reader: &[u8] = &data;

        let stream = chunk_async(reader, small_config()).unwrap();
        let chunks: Vec<Chunk> = stream
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        let total: usize = chunks.iter().map(|c| c.len()).sum();
        assert_eq!(total, data.len());
    }

    #[tokio::test]
    async fn test_stream_matches_sync() {
        let data: Vec<u8> = (0..2000u32).map(|i| (i * 31 + 7) as u8).collect();
        let reader: &[u8] = &data;

        let stream = chunk_async(reader, small_config()).unwrap();
        let async_chunks: Vec<Chunk> = stream
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        let sync_chunks = crate::chunker::chunk_bytes(data, small_config()).unwrap();

        assert_eq!(async_chunks.len(), sync_chunks.len());
        for (a, b) in async_chunks.iter().zip(&sync_chunks) {
            assert_eq!(a.range(), b.range());
            assert_eq!(a.data, b.data);
        }
    }
}
