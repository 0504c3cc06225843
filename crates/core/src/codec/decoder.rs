//! Configurable decoder.
//!
//! # Example
//! ```
//! use crock32_core::Decoder;
//!
//! let decoder = Decoder::new().ignore_hyphens(true);
//! assert_eq!(decoder.decode(b"CSQPY-RK1E8")?, b"foobar");
//!
//! let strict = Decoder::new().strict(true);
//! assert!(strict.decode(b"csqpyrk1e8").is_err());
//! # Ok::<(), crock32_core::Crock32Error>(())
//! ```

use crate::alphabet::{DECODE_SYMBOLS, INVALID, STRICT_DECODE_SYMBOLS};
use crate::error::{Crock32Error, Result};

use super::base32::{decoded_len, is_valid_encoded_len};
use super::block::{RAW_BLOCK, TEXT_BLOCK, unpack_block};

/// Decode options.
///
/// The default accepts lowercase letters and the `O`/`I`/`L` look-alikes and
/// rejects everything else, including separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    strict: bool,
    ignore_hyphens: bool,
}

impl Decoder {
    /// Creates a decoder with default (lenient) options.
    pub const fn new() -> Self {
        Self {
            strict: false,
            ignore_hyphens: false,
        }
    }

    /// Accept only the 32 canonical symbols.
    ///
    /// Lowercase letters and `O`, `I`, `L` then fail with `InvalidSymbol`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Skip `-` separators, as used in grouped codes like `CSQPY-RK1E8`.
    ///
    /// Skipped bytes do not count toward the length check.
    pub fn ignore_hyphens(mut self, ignore: bool) -> Self {
        self.ignore_hyphens = ignore;
        self
    }

    /// Whether only canonical symbols are accepted.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether `-` separators are skipped.
    pub fn ignores_hyphens(&self) -> bool {
        self.ignore_hyphens
    }

    /// Decode symbol text to bytes.
    ///
    /// Every byte is validated before any output is produced, so an error
    /// never comes with partial data. Error positions index into `data` as
    /// given, separators included.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let table = if self.strict {
            &STRICT_DECODE_SYMBOLS
        } else {
            &DECODE_SYMBOLS
        };

        let mut values = Vec::with_capacity(data.len().div_ceil(TEXT_BLOCK) * TEXT_BLOCK);
        for (pos, &byte) in data.iter().enumerate() {
            if self.ignore_hyphens && byte == b'-' {
                continue;
            }
            match table[byte as usize] {
                INVALID => return Err(Crock32Error::InvalidSymbol { byte, pos }),
                value => values.push(value),
            }
        }

        let count = values.len();
        if !is_valid_encoded_len(count) {
            return Err(Crock32Error::InvalidLength(count));
        }

        // Pad with value 0; the bits it contributes are cut by the truncate below
        values.resize(count.div_ceil(TEXT_BLOCK) * TEXT_BLOCK, 0);

        let mut output = Vec::with_capacity(values.len() / TEXT_BLOCK * RAW_BLOCK);
        for block in values.chunks_exact(TEXT_BLOCK) {
            output.extend_from_slice(&unpack_block(block));
        }

        output.truncate(decoded_len(count));
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        let decoder = Decoder::default();
        assert!(!decoder.is_strict());
        assert!(!decoder.ignores_hyphens());
        assert_eq!(decoder, Decoder::new());
        assert_eq!(decoder.decode(b"csqpyrkle8").unwrap(), b"foobar");
    }

    #[test]
    fn strict_rejects_aliases() {
        let decoder = Decoder::new().strict(true);
        assert_eq!(decoder.decode(b"CSQPYRK1E8").unwrap(), b"foobar");
        assert_eq!(
            decoder.decode(b"CSQPYRKLE8"),
            Err(Crock32Error::InvalidSymbol { byte: b'L', pos: 7 })
        );
        assert_eq!(
            decoder.decode(b"cr"),
            Err(Crock32Error::InvalidSymbol { byte: b'c', pos: 0 })
        );
    }

    #[test]
    fn hyphens_rejected_by_default() {
        assert_eq!(
            Decoder::new().decode(b"CSQPY-RK1E8"),
            Err(Crock32Error::InvalidSymbol { byte: b'-', pos: 5 })
        );
    }

    #[test]
    fn hyphens_skipped_when_enabled() {
        let decoder = Decoder::new().ignore_hyphens(true);
        assert_eq!(decoder.decode(b"CSQPY-RK1E8").unwrap(), b"foobar");
        assert_eq!(decoder.decode(b"-C-R-").unwrap(), b"f");
        assert_eq!(decoder.decode(b"---").unwrap(), b"");
    }

    #[test]
    fn error_position_counts_separators() {
        let decoder = Decoder::new().ignore_hyphens(true);
        assert_eq!(
            decoder.decode(b"CS-U"),
            Err(Crock32Error::InvalidSymbol { byte: b'U', pos: 3 })
        );
    }

    #[test]
    fn length_checked_after_separators_removed() {
        let decoder = Decoder::new().ignore_hyphens(true);
        // 9 characters but 8 symbols
        assert_eq!(decoder.decode(b"CSQP-YRK1").unwrap().len(), 5);
        assert_eq!(decoder.decode(b"C-"), Err(Crock32Error::InvalidLength(1)));
    }

    #[test]
    fn options_compose() {
        let decoder = Decoder::new().strict(true).ignore_hyphens(true);
        assert_eq!(decoder.decode(b"CSQPY-RK1E8").unwrap(), b"foobar");
        assert!(decoder.decode(b"csqpy-rk1e8").is_err());
    }
}
