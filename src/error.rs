//! Error type shared by the compressor and decompressor.

use std::io;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, LzpError>;

/// Errors the codec can raise. Both are final: the codec is deterministic, so retrying never helps.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LzpError {
    /// Input was shorter than the 4 bytes both directions require.
    #[error("input is {len} bytes long, at least 4 bytes are required")]
    InvalidInput {
        /// Length of the rejected input.
        len: usize,
    },
    /// A read ran past the end of the compressed data, or a strict check failed.
    #[error("input is not LZP1 compressed data")]
    CorruptStream,
}

impl From<LzpError> for io::Error {
    fn from(err: LzpError) -> Self {
        let kind = match err {
            LzpError::InvalidInput { .. } => io::ErrorKind::InvalidInput,
            LzpError::CorruptStream => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}
