//! Internal utility functions and helpers.
//!
//! Implementation details, not part of the public API.

use bytes::Bytes;

/// Combines two byte slices into a new Bytes object.
///
/// Used when pending bytes from a previous `feed` call need to be joined with
/// new input to form a complete chunk.
pub(crate) fn combine_bytes(a: &Bytes, b: &[u8]) -> Bytes {
    let mut combined = Vec::with_capacity(a.len() + b.len());
    combined.extend_from_slice(a);
    combined.extend_from_slice(b);
    Bytes::from(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine() {
        let a = Bytes::from_static(b"abc");
        let combined = combine_bytes(&a, b"def");
        assert_eq!(combined.as_ref(), b"abcdef");
    }
}
