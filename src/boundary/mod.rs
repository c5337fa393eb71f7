//! Chunk boundary detection.
//!
//! - [`BoundaryDetector`] - per-byte boundary decisions with size bounds
//! - [`Decision`] - the three possible outcomes of an observation

mod detector;

pub use detector::{BoundaryDetector, Decision};
