//! Block packing shared by the encoder and decoder.
//!
//! A block is 40 bits: 5 raw bytes on one side, 8 five-bit symbol values on
//! the other, packed big-endian.

/// Raw bytes per block.
pub(crate) const RAW_BLOCK: usize = 5;

/// Symbols per block.
pub(crate) const TEXT_BLOCK: usize = 8;

/// Copy `data` and zero-extend it to a multiple of `unit`.
pub(crate) fn padded(data: &[u8], unit: usize) -> Vec<u8> {
    let len = data.len().div_ceil(unit) * unit;
    let mut buf = Vec::with_capacity(len);
    buf.extend_from_slice(data);
    buf.resize(len, 0);
    buf
}

/// Split 5 bytes into 8 five-bit values.
///
/// `b` must hold exactly [`RAW_BLOCK`] bytes.
#[inline]
pub(crate) fn pack_block(b: &[u8]) -> [u8; TEXT_BLOCK] {
    debug_assert_eq!(b.len(), RAW_BLOCK);
    [
        b[0] >> 3,
        (b[0] & 0x07) << 2 | b[1] >> 6,
        b[1] >> 1 & 0x1F,
        (b[1] & 0x01) << 4 | b[2] >> 4,
        (b[2] & 0x0F) << 1 | b[3] >> 7,
        b[3] >> 2 & 0x1F,
        (b[3] & 0x03) << 3 | b[4] >> 5,
        b[4] & 0x1F,
    ]
}

/// Join 8 five-bit values back into 5 bytes.
///
/// `d` must hold exactly [`TEXT_BLOCK`] values, each below 32.
#[inline]
pub(crate) fn unpack_block(d: &[u8]) -> [u8; RAW_BLOCK] {
    debug_assert_eq!(d.len(), TEXT_BLOCK);
    [
        d[0] << 3 | d[1] >> 2,
        (d[1] & 0x03) << 6 | d[2] << 1 | d[3] >> 4,
        (d[3] & 0x0F) << 4 | d[4] >> 1,
        (d[4] & 0x01) << 7 | d[5] << 2 | d[6] >> 3,
        (d[6] & 0x07) << 5 | d[7],
    ]
}
