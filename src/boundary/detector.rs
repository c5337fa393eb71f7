//! Boundary decision logic.

use crate::config::ChunkConfig;

/// Outcome of observing one byte position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Not a boundary; keep accumulating the current chunk.
    Continue,

    /// The checksum mask matched; cut the chunk here.
    Boundary,

    /// The maximum chunk size was reached; cut unconditionally.
    ForceBoundary,
}

/// Decides, per byte position, whether the current position ends a chunk.
///
/// The decision is a pure function of the checksum digest and the number of
/// bytes accumulated since the last boundary. Evaluation order is fixed:
/// minimum-size check, then maximum-size check, then mask check. The minimum
/// gate means mask matches inside the first `min_size` bytes of a chunk are
/// ignored; the maximum gate means a pathological stream whose checksum never
/// matches the mask (e.g. a long run of one repeated byte) still cuts at
/// `max_size` and cannot grow a chunk without bound.
///
/// Misconfiguration is rejected when the [`ChunkConfig`] is built, so
/// [`BoundaryDetector::observe`] itself cannot fail.
#[derive(Debug, Clone)]
pub struct BoundaryDetector {
    min_size: usize,
    max_size: usize,
    mask: u32,
}

impl BoundaryDetector {
    /// Creates a detector from a validated configuration.
    pub fn from_config(config: &ChunkConfig) -> Self {
        Self {
            min_size: config.min_size(),
            max_size: config.max_size(),
            mask: config.target_mask(),
        }
    }

    /// Observes the digest at a position `chunk_len` bytes past the last
    /// boundary (counting the byte at this position) and returns the
    /// decision for that position.
    #[inline]
    pub fn observe(&self, digest: u32, chunk_len: usize) -> Decision {
        if chunk_len < self.min_size {
            return Decision::Continue;
        }

        if chunk_len >= self.max_size {
            return Decision::ForceBoundary;
        }

        if digest & self.mask == 0 {
            Decision::Boundary
        } else {
            Decision::Continue
        }
    }

    /// Returns the boundary mask.
    pub fn mask(&self) -> u32 {
        self.mask
    }
}
