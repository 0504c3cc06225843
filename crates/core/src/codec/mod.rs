//! Codec modules for Crockford-style Base32.
//!
//! This module contains:
//! - `base32`: encode/decode entry points and length arithmetic
//! - `block`: 5-byte to 8-symbol block packing
//! - `decoder`: the configurable `Decoder`

pub mod base32;
mod block;
pub mod decoder;

// Re-export main functions for convenience
pub use base32::{
    decode, decode_str, decoded_len, encode, encode_to_string, encoded_len, is_valid_encoded_len,
};
pub use decoder::Decoder;
