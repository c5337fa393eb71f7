//! Internal buffer management for the reader adapters.
//!
//! Provides a thread-local pool of read buffers so repeated iterator runs on
//! the same thread do not reallocate. Implementation detail, not part of the
//! public API.

mod pool;

pub(crate) use pool::Buffer;
