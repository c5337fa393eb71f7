//! Configuration for chunking behavior.
//!
//! [`ChunkConfig`] controls the sliding-window size, the chunk size bounds,
//! and the boundary mask width. It is supplied once at construction and is
//! immutable for the lifetime of a chunking run.
//!
//! # Example
//!
//! ```
//! use rollingcs::ChunkConfig;
//!
//! // Custom sizes: 64-byte window, 4 KiB..64 KiB chunks, ~16 KiB expected
//! let config = ChunkConfig::new(64, 4096, 65536, 14)?;
//!
//! // Builder pattern over the defaults
//! let config = ChunkConfig::default().with_max_size(128 * 1024);
//! # Ok::<(), rollingcs::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default sliding-window size (64 bytes).
pub const DEFAULT_WINDOW_SIZE: usize = 64;

/// Default minimum chunk size (4 KiB).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 4 * 1024;

/// Default maximum chunk size (64 KiB).
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 64 * 1024;

/// Default boundary mask width (14 bits, expected chunk size ~16 KiB).
pub const DEFAULT_MASK_BITS: u32 = 14;

/// Configuration for content-defined chunking.
///
/// A boundary is declared where the low `mask_bits` bits of the rolling
/// checksum are all zero, so the expected chunk size is roughly
/// `2^mask_bits` bytes past `min_size`. `min_size` and `max_size` are hard
/// bounds: no boundary is taken before `min_size` bytes, and a boundary is
/// forced at `max_size` bytes regardless of checksum content.
///
/// Constraints, checked by [`ChunkConfig::new`] and [`ChunkConfig::validate`]:
///
/// - `window_size` and `max_size` must be non-zero
/// - `min_size <= max_size`
/// - `mask_bits < 32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    window_size: usize,
    min_size: usize,
    max_size: usize,
    mask_bits: u32,
}

impl ChunkConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `window_size` or `max_size`
    /// is zero, `min_size > max_size`, or `mask_bits >= 32`.
    pub fn new(
        window_size: usize,
        min_size: usize,
        max_size: usize,
        mask_bits: u32,
    ) -> Result<Self, ChunkError> {
        if window_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "window_size must be non-zero",
            });
        }

        if max_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "max_size must be non-zero",
            });
        }

        if min_size > max_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_size cannot be greater than max_size",
            });
        }

        if mask_bits >= 32 {
            return Err(ChunkError::InvalidConfig {
                message: "mask_bits must be less than 32",
            });
        }

        Ok(Self {
            window_size,
            min_size,
            max_size,
            mask_bits,
        })
    }

    /// Sets the sliding-window size.
    ///
    /// Note: this does not validate the configuration. Use
    /// [`ChunkConfig::validate`] to check the result.
    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Sets the minimum chunk size.
    pub fn with_min_size(mut self, size: usize) -> Self {
        self.min_size = size;
        self
    }

    /// Sets the maximum chunk size.
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// Sets the boundary mask width in bits.
    pub fn with_mask_bits(mut self, bits: u32) -> Self {
        self.mask_bits = bits;
        self
    }

    /// Returns the sliding-window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the boundary mask width in bits.
    pub fn mask_bits(&self) -> u32 {
        self.mask_bits
    }

    /// Returns the boundary mask: the low `mask_bits` bits set.
    pub fn target_mask(&self) -> u32 {
        (1u32 << self.mask_bits) - 1
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.window_size, self.min_size, self.max_size, self.mask_bits).map(|_| ())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            max_size: DEFAULT_MAX_CHUNK_SIZE,
            mask_bits: DEFAULT_MASK_BITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkConfig::default();
        assert_eq!(config.window_size(), DEFAULT_WINDOW_SIZE);
        assert_eq!(config.min_size(), DEFAULT_MIN_CHUNK_SIZE);
        assert_eq!(config.max_size(), DEFAULT_MAX_CHUNK_SIZE);
        assert_eq!(config.mask_bits(), DEFAULT_MASK_BITS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ChunkConfig::default()
            .with_window_size(32)
            .with_min_size(8192)
            .with_max_size(131072)
            .with_mask_bits(15);

        assert_eq!(config.window_size(), 32);
        assert_eq!(config.min_size(), 8192);
        assert_eq!(config.max_size(), 131072);
        assert_eq!(config.mask_bits(), 15);
    }

    #[test]
    fn test_target_mask() {
        let config = ChunkConfig::new(8, 4, 16, 3).unwrap();
        assert_eq!(config.target_mask(), 0b111);

        let config = ChunkConfig::default();
        assert_eq!(config.target_mask(), (1 << DEFAULT_MASK_BITS) - 1);
    }

    #[test]
    fn test_invalid_zero_window() {
        assert!(ChunkConfig::new(0, 4096, 65536, 14).is_err());
    }

    #[test]
    fn test_invalid_zero_max() {
        assert!(ChunkConfig::new(64, 0, 0, 14).is_err());
    }

    #[test]
    fn test_invalid_min_gt_max() {
        assert!(ChunkConfig::new(64, 65536, 4096, 14).is_err());
    }

    #[test]
    fn test_invalid_mask_bits() {
        assert!(ChunkConfig::new(64, 4096, 65536, 32).is_err());
        assert!(ChunkConfig::new(64, 4096, 65536, 31).is_ok());
    }

    #[test]
    fn test_validate_after_builder() {
        let config = ChunkConfig::default().with_window_size(0);
        assert!(config.validate().is_err());

        let config = ChunkConfig::default().with_min_size(usize::MAX);
        assert!(config.validate().is_err());
    }
}
