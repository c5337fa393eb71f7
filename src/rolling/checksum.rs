//! Windowed rolling checksum implementation.
//!
//! This is the rsync-style two-component rolling sum (as used by rsync, bup,
//! and bita): `s1` is the sum of the window bytes, `s2` is the positionally
//! weighted sum. Both are updated in O(1) per byte from only the incoming and
//! outgoing byte values, never by rescanning the window.
//!
//! A character offset is added to every byte before summing so that runs of
//! zeros still produce non-trivial state.

use crate::error::ChunkError;

/// Offset added to each byte before it is folded into the sums.
const CHAR_OFFSET: u32 = 31;

/// Rolling checksum over the most recent `window_size` bytes of a stream.
///
/// Maintains a ring buffer of the window contents and two 32-bit accumulators
/// that are always exactly the checksum of those contents. All arithmetic is
/// wrapping `u32`, so the digest for a given byte sequence is bit-identical
/// on every platform.
///
/// With window bytes `b_0` (oldest) through `b_{k-1}` (newest):
///
/// - `s1 = sum(b_i + 31)`
/// - `s2 = sum((k - i) * (b_i + 31))`
///
/// Pushing a byte while the window is full removes the evicted byte's
/// contribution algebraically; the add/remove updates are exact inverses, so
/// the state never drifts no matter how many bytes are rolled through.
///
/// # Example
///
/// ```
/// use rollingcs::RollingChecksum;
///
/// let mut cs = RollingChecksum::new(8)?;
/// for &byte in b"rollingcs" {
///     cs.roll(byte);
/// }
/// assert_eq!(cs.current(), 0x0453_1383);
/// # Ok::<(), rollingcs::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RollingChecksum {
    s1: u32,
    s2: u32,
    window: Vec<u8>,
    head: usize,
    filled: usize,
}

impl RollingChecksum {
    /// Creates a checksum with the given window size.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self, ChunkError> {
        if window_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "window_size must be non-zero",
            });
        }

        Ok(Self {
            s1: 0,
            s2: 0,
            window: vec![0u8; window_size],
            head: 0,
            filled: 0,
        })
    }

    /// Pushes a byte into the window and returns the updated digest.
    ///
    /// While the window is still filling, the byte is only added. Once the
    /// window is full, the oldest byte is evicted and its contribution is
    /// removed in the same step.
    #[inline]
    pub fn roll(&mut self, byte: u8) -> u32 {
        let in_val = byte as u32;

        if self.filled == self.window.len() {
            let out_val = self.window[self.head] as u32;
            self.s1 = self.s1.wrapping_add(in_val).wrapping_sub(out_val);
            self.s2 = self
                .s2
                .wrapping_add(self.s1)
                .wrapping_sub((self.window.len() as u32).wrapping_mul(out_val + CHAR_OFFSET));
        } else {
            self.s1 = self.s1.wrapping_add(in_val + CHAR_OFFSET);
            self.s2 = self.s2.wrapping_add(self.s1);
            self.filled += 1;
        }

        self.window[self.head] = byte;
        self.head += 1;
        if self.head >= self.window.len() {
            self.head = 0;
        }

        self.digest()
    }

    /// Returns the digest of whatever bytes have been folded in so far.
    ///
    /// Read-only; near stream start this covers fewer than `window_size`
    /// bytes.
    #[inline]
    pub fn current(&self) -> u32 {
        self.digest()
    }

    /// Resets the checksum for a new stream, keeping the allocation.
    pub fn reset(&mut self) {
        // Stale window bytes are overwritten during the fill phase before
        // they can ever be evicted, so only the counters need clearing.
        self.s1 = 0;
        self.s2 = 0;
        self.head = 0;
        self.filled = 0;
    }

    /// Returns the configured window size.
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    /// Returns the number of bytes currently in the window.
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Returns true if no bytes have been folded in yet.
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Returns true once `window_size` bytes have been consumed.
    pub fn is_full(&self) -> bool {
        self.filled == self.window.len()
    }

    #[inline]
    fn digest(&self) -> u32 {
        (self.s1 << 16) | (self.s2 & 0xffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_window_rejected() {
        assert!(RollingChecksum::new(0).is_err());
        assert!(RollingChecksum::new(1).is_ok());
    }

    #[test]
    fn test_known_digest_sequence() {
        let mut cs = RollingChecksum::new(8).unwrap();
        let digests: Vec<u32> = b"rollingcs".iter().map(|&b| cs.roll(b)).collect();

        assert_eq!(
            digests,
            vec![
                0x0091_0091,
                0x011f_01b0,
                0x01aa_035a,
                0x0235_058f,
                0x02bd_084c,
                0x034a_0b96,
                0x03d0_0f66,
                0x0452_13b8,
                0x0453_1383,
            ]
        );
    }

    #[test]
    fn test_rolled_digest_matches_recompute() {
        // The digest after rolling through arbitrary history must equal a
        // fresh checksum over just the trailing window bytes.
        let mut state = 0x12345678u32;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xff) as u8
        };

        let data: Vec<u8> = (0..4096).map(|_| next()).collect();

        for &window_size in &[1usize, 7, 32, 64] {
            let mut rolled = RollingChecksum::new(window_size).unwrap();
            for (i, &byte) in data.iter().enumerate() {
                rolled.roll(byte);

                if (i + 1) % 97 == 0 && i + 1 >= window_size {
                    let mut fresh = RollingChecksum::new(window_size).unwrap();
                    for &b in &data[i + 1 - window_size..=i] {
                        fresh.roll(b);
                    }
                    assert_eq!(
                        rolled.current(),
                        fresh.current(),
                        "window {} drifted at byte {}",
                        window_size,
                        i + 1
                    );
                }
            }
        }
    }

    #[test]
    fn test_partial_window() {
        let mut cs = RollingChecksum::new(16).unwrap();
        assert!(cs.is_empty());

        cs.roll(b'a');
        cs.roll(b'b');
        assert_eq!(cs.len(), 2);
        assert!(!cs.is_full());

        // Same two bytes, same digest
        let mut other = RollingChecksum::new(16).unwrap();
        other.roll(b'a');
        other.roll(b'b');
        assert_eq!(cs.current(), other.current());
    }

    #[test]
    fn test_eviction_forgets_old_bytes() {
        // After a full window of new bytes, the old history is irrelevant.
        let mut cs = RollingChecksum::new(4).unwrap();
        for _ in 0..100 {
            cs.roll(0xAA);
        }
        for &b in b"wxyz" {
            cs.roll(b);
        }

        let mut fresh = RollingChecksum::new(4).unwrap();
        for &b in b"wxyz" {
            fresh.roll(b);
        }

        assert_eq!(cs.current(), fresh.current());
    }

    #[test]
    fn test_reset_reuse() {
        let mut cs = RollingChecksum::new(8).unwrap();
        for &b in b"first stream" {
            cs.roll(b);
        }

        cs.reset();
        assert!(cs.is_empty());
        assert_eq!(cs.current(), 0);

        let after_reset: Vec<u32> = b"second".iter().map(|&b| cs.roll(b)).collect();

        let mut fresh = RollingChecksum::new(8).unwrap();
        let fresh_digests: Vec<u32> = b"second".iter().map(|&b| fresh.roll(b)).collect();
        assert_eq!(after_reset, fresh_digests);
    }

    #[test]
    fn test_current_does_not_mutate() {
        let mut cs = RollingChecksum::new(8).unwrap();
        cs.roll(b'x');
        let a = cs.current();
        let b = cs.current();
        assert_eq!(a, b);
        assert_eq!(cs.len(), 1);
    }
}
