//! Chunk types.
//!
//! - [`Chunk`] - a content-defined chunk: byte range plus its raw bytes

mod data;

pub use data::Chunk;
