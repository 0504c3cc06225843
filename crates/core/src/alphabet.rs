//! Symbol tables for the Crockford-style Base32 alphabet.
//!
//! The encode alphabet is the 32 digits and uppercase letters left after
//! removing `I`, `L`, `O` and `U`. Decoding goes through a 256-entry table
//! that also accepts lowercase letters and folds the look-alikes `O` onto `0`
//! and `I`/`L` onto `1`. `U` stays invalid in both cases.

use crate::error::{Crock32Error, Result};

/// Marker for bytes that do not decode to any 5-bit value.
pub const INVALID: u8 = 0xFF;

/// 5-bit value to canonical symbol.
pub const ENCODE_SYMBOLS: [u8; 32] = *b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Byte to 5-bit value, accepting lowercase and the `O`/`I`/`L` aliases.
pub static DECODE_SYMBOLS: [u8; 256] = build_decode_table(true);

/// Byte to 5-bit value, accepting canonical symbols only.
pub(crate) static STRICT_DECODE_SYMBOLS: [u8; 256] = build_decode_table(false);

const fn build_decode_table(aliases: bool) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut value = 0;
    while value < ENCODE_SYMBOLS.len() {
        let symbol = ENCODE_SYMBOLS[value];
        table[symbol as usize] = value as u8;
        if aliases {
            table[symbol.to_ascii_lowercase() as usize] = value as u8;
        }
        value += 1;
    }

    if aliases {
        table[b'O' as usize] = 0;
        table[b'o' as usize] = 0;
        table[b'I' as usize] = 1;
        table[b'i' as usize] = 1;
        table[b'L' as usize] = 1;
        table[b'l' as usize] = 1;
    }

    table
}

/// Look up the 5-bit value of a symbol, aliases included.
#[inline]
pub fn symbol_value(byte: u8) -> Option<u8> {
    match DECODE_SYMBOLS[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// True if `byte` is one of the 32 symbols `encode` can emit.
#[inline]
pub fn is_canonical(byte: u8) -> bool {
    STRICT_DECODE_SYMBOLS[byte as usize] != INVALID
}

/// Rewrite symbol text into canonical form.
///
/// Lowercase letters are uppercased and `O`, `I`, `L` become `0`, `1`, `1`.
/// Length is not checked, so this also works on fragments of a longer code.
pub fn canonicalize(data: &[u8]) -> Result<Vec<u8>> {
    data.iter()
        .enumerate()
        .map(|(pos, &byte)| {
            symbol_value(byte)
                .map(|value| ENCODE_SYMBOLS[value as usize])
                .ok_or(Crock32Error::InvalidSymbol { byte, pos })
        })
        .collect()
}
