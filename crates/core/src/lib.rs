//! crock32 - Crockford-style Base32 codec.
//!
//! Converts bytes to text over the alphabet `0123456789ABCDEFGHJKMNPQRSTVWXYZ`
//! and back. Every 5 bytes map to exactly 8 symbols and no padding characters
//! are used. Decoding is forgiving of human transcription: lowercase is
//! accepted and `O`, `I`, `L` read as `0`, `1`, `1`.
//!
//! # Quick Start
//!
//! ```
//! use crock32_core::{decode, encode};
//!
//! assert_eq!(encode(b"foobar"), b"CSQPYRK1E8");
//! assert_eq!(decode(b"csqpyrkle8")?, b"foobar");
//! # Ok::<(), crock32_core::Crock32Error>(())
//! ```
//!
//! All functions are pure and the symbol tables are immutable statics, so
//! everything here can be called from any thread.

pub mod alphabet;
pub mod codec;
pub mod error;

// Re-export codec modules for convenience
pub use codec::base32;
pub use codec::{
    Decoder, decode, decode_str, decoded_len, encode, encode_to_string, encoded_len,
    is_valid_encoded_len,
};

pub use error::{Crock32Error, Result};
