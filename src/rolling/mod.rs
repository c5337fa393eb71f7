//! Rolling checksum over a fixed-size sliding window.
//!
//! - [`RollingChecksum`] - O(1)-per-byte checksum of the trailing window

mod checksum;

pub use checksum::RollingChecksum;
