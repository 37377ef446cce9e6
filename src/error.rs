//! Error types for the huffzip stream format.

use thiserror::Error;

/// Result type used throughout huffzip.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while encoding or decoding a stream.
///
/// None of these are recoverable mid-file. The stream has no resync
/// points, so the first failure ends the operation and the caller gets
/// one distinguishable kind instead of a partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream does not open with the huffzip magic word.
    #[error("bad magic word 0x{found:08x}: not a huffzip stream")]
    BadMagic { found: u32 },

    /// The stream ended while the tree was being rebuilt from the header.
    #[error("truncated header: stream ended inside the tree description")]
    TruncatedHeader,

    /// The stream ended before the end-of-stream symbol was decoded.
    #[error("truncated body: stream ended before the end-of-stream code")]
    TruncatedBody,

    /// The header decoded cleanly but describes an impossible tree.
    #[error("invalid header: {reason}")]
    InvalidHeader { reason: &'static str },

    /// An error reported by the underlying file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
