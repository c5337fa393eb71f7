//! Error types for rollingcs.

use std::fmt;

/// Errors that can occur during chunking operations.
#[derive(Debug)]
pub enum ChunkError {
    /// An I/O error occurred while reading input data.
    Io(std::io::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The stream was already finalized; no further input is accepted.
    StreamClosed,
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::Io(e) => write!(f, "io error: {}", e),
            ChunkError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            ChunkError::StreamClosed => {
                write!(f, "stream closed: input after finish()")
            }
        }
    }
}

impl std::error::Error for ChunkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChunkError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChunkError {
    fn from(e: std::io::Error) -> Self {
        ChunkError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ChunkError = io_err.into();
        assert!(matches!(err, ChunkError::Io(_)));
    }

    #[test]
    fn test_display() {
        let err = ChunkError::InvalidConfig {
            message: "window_size must be non-zero",
        };
        assert!(err.to_string().contains("invalid config"));

        assert!(ChunkError::StreamClosed.to_string().contains("closed"));
    }
}
