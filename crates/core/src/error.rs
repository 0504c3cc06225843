//! Error types for crock32 decoding.

use thiserror::Error;

/// Errors that can occur while decoding symbol text.
///
/// Encoding never fails, so every variant describes malformed input to
/// [`decode`](crate::decode) or [`Decoder::decode`](crate::Decoder::decode).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Crock32Error {
    /// A byte that no symbol (canonical or alias) maps to.
    ///
    /// `pos` is the zero-based offset of the byte in the input as given.
    #[error("invalid symbol {byte:#04x} at position {pos}")]
    InvalidSymbol { byte: u8, pos: usize },

    /// A symbol count that no byte sequence encodes to (`len % 8` is 1, 3 or 6).
    #[error("invalid encoded length {0}: no input encodes to this many symbols")]
    InvalidLength(usize),
}

/// Convenience Result type alias for Crock32Error.
pub type Result<T> = std::result::Result<T, Crock32Error>;
