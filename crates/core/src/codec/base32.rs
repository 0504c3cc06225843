//! Base32 encoding and decoding over the Crockford-style alphabet.
//!
//! Every 5 input bytes become 8 symbols. The final partial block is padded
//! with zero bits internally and the output is cut to the exact length, so
//! no `=` padding is ever produced or accepted.

use crate::alphabet::ENCODE_SYMBOLS;
use crate::error::Result;

use super::block::{RAW_BLOCK, TEXT_BLOCK, pack_block, padded};
use super::decoder::Decoder;

/// Encode bytes as symbol text.
///
/// Output is uppercase ASCII from [`ENCODE_SYMBOLS`] and exactly
/// [`encoded_len`] bytes long.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let input = padded(data, RAW_BLOCK);
    let mut output = Vec::with_capacity(input.len() / RAW_BLOCK * TEXT_BLOCK);

    for block in input.chunks_exact(RAW_BLOCK) {
        output.extend(
            pack_block(block)
                .iter()
                .map(|&value| ENCODE_SYMBOLS[value as usize]),
        );
    }

    // Drop symbols made only of padding bits
    output.truncate(encoded_len(data.len()));
    output
}

/// Encode bytes as a `String`.
pub fn encode_to_string(data: &[u8]) -> String {
    encode(data).into_iter().map(char::from).collect()
}

/// Decode symbol text with the default (lenient) [`Decoder`].
///
/// Lowercase letters and the look-alikes `O`, `I`, `L` are accepted. Fails
/// with [`InvalidSymbol`](crate::Crock32Error::InvalidSymbol) on any other
/// byte outside the alphabet and with
/// [`InvalidLength`](crate::Crock32Error::InvalidLength) when the symbol count
/// cannot come from [`encode`].
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    Decoder::new().decode(data)
}

/// Decode symbol text held in a `str`.
pub fn decode_str(text: &str) -> Result<Vec<u8>> {
    decode(text.as_bytes())
}

/// Number of symbols `encode` produces for `n` bytes: `ceil(n * 8 / 5)`.
pub fn encoded_len(n: usize) -> usize {
    n / RAW_BLOCK * TEXT_BLOCK + (n % RAW_BLOCK * TEXT_BLOCK).div_ceil(RAW_BLOCK)
}

/// Number of bytes `decode` produces for `n` symbols: `n * 5 / 8`.
pub fn decoded_len(n: usize) -> usize {
    n / TEXT_BLOCK * RAW_BLOCK + n % TEXT_BLOCK * RAW_BLOCK / TEXT_BLOCK
}

/// True if some byte sequence encodes to exactly `n` symbols.
pub fn is_valid_encoded_len(n: usize) -> bool {
    !matches!(n % TEXT_BLOCK, 1 | 3 | 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_single_byte() {
        assert_eq!(encode(b"f"), b"CR");
    }

    #[test]
    fn encode_empty() {
        assert!(encode(b"").is_empty());
        assert_eq!(encode_to_string(b""), "");
    }

    #[test]
    fn encode_partial_blocks() {
        assert_eq!(encode(b"fo"), b"CSQG");
        assert_eq!(encode(b"foo"), b"CSQPY");
        assert_eq!(encode(b"foob"), b"CSQPYRG");
        assert_eq!(encode(b"fooba"), b"CSQPYRK1");
    }

    #[test]
    fn decode_partial_blocks() {
        assert_eq!(decode(b"CSQG").unwrap(), b"fo");
        assert_eq!(decode(b"CSQPY").unwrap(), b"foo");
        assert_eq!(decode(b"CSQPYRG").unwrap(), b"foob");
        assert_eq!(decode(b"CSQPYRK1").unwrap(), b"fooba");
    }

    #[test]
    fn encoded_len_matches_formula() {
        for n in 0..64 {
            assert_eq!(encoded_len(n), (n * 8).div_ceil(5), "n = {n}");
        }
    }

    #[test]
    fn decoded_len_matches_formula() {
        for n in 0..64 {
            assert_eq!(decoded_len(n), n * 5 / 8, "n = {n}");
        }
    }

    #[test]
    fn every_encoded_len_is_valid() {
        for n in 0..64 {
            assert!(is_valid_encoded_len(encoded_len(n)));
            assert_eq!(decoded_len(encoded_len(n)), n);
        }
    }

    #[test]
    fn impossible_lengths() {
        let invalid: Vec<usize> = (0..17).filter(|&n| !is_valid_encoded_len(n)).collect();
        assert_eq!(invalid, vec![1, 3, 6, 9, 11, 14]);
    }

    #[test]
    fn decode_str_accepts_text() {
        assert_eq!(decode_str("CSQPYRK1E8").unwrap(), b"foobar");
    }
}
