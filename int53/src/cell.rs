//! Buffer-based decoders and encoders for 64-bit integer cells.
//!
//! A cell is 8 bytes at a caller-supplied offset in a byte buffer: the
//! low-order 32-bit word at `offset`, the high-order word at `offset + 4`,
//! both little-endian. Decoders turn a cell into an `f64` that is exact for
//! magnitudes up to 2^53; encoders split an `f64` back into the two words,
//! with a separate policy per function for values outside the 64-bit range
//! (best-effort, clamping, or signaling).
//!
//! The codec does not validate the offset. Whether a cell holds a signed or
//! an unsigned integer is the caller's interpretation; cells are untagged.

use byteorder::{ByteOrder, LittleEndian};

use crate::def::{
    CELL_BYTES, HIGH_WORD_BASE, I64_LOWER_BOUND, I64_UPPER_BOUND, U64_UPPER_BOUND, WORD_BYTES,
};
use crate::error::RangeError;

/// Truncates `num` toward zero to its two's-complement low 32 bits.
///
/// Non-negative values go through `u64` so that magnitudes up to 2^64 keep
/// their true low word instead of saturating at `i64::MAX`.
#[inline]
fn truncate_to_u32(num: f64) -> u32 {
    if num >= 0.0 {
        num as u64 as u32
    } else {
        num as i64 as u32
    }
}

/// Splits `num` into little-endian (low, high) words.
///
/// The low word is the truncation of `num` modulo 2^32; the high word is the
/// exact quotient `(num - low) / 2^32`, which is an integer whenever `num`
/// is an integer within the 64-bit range.
#[inline]
fn split_words(num: f64) -> (u32, u32) {
    let lo = truncate_to_u32(num);
    let hi = truncate_to_u32((num - lo as f64) / HIGH_WORD_BASE);
    (lo, hi)
}

#[inline]
fn write_words(buf: &mut [u8], offset: usize, lo: u32, hi: u32) {
    LittleEndian::write_u32(&mut buf[offset..offset + WORD_BYTES], lo);
    LittleEndian::write_u32(&mut buf[offset + WORD_BYTES..offset + CELL_BYTES], hi);
}

/// Decodes a signed 64-bit cell into an `f64`.
///
/// # Arguments
/// * `buf` - Buffer holding the cell
/// * `offset` - Byte offset of the cell's low word
///
/// # Returns
/// The exact value for magnitudes up to 2^53; beyond that, the nearest
/// `f64` approximation (no error is raised)
///
/// # Panics
/// If `buf` is shorter than `offset + 8` bytes
pub fn decode_i64_to_i53(buf: &[u8], offset: usize) -> f64 {
    let lo = LittleEndian::read_u32(&buf[offset..offset + WORD_BYTES]);
    let hi = LittleEndian::read_i32(&buf[offset + WORD_BYTES..offset + CELL_BYTES]);
    lo as f64 + hi as f64 * HIGH_WORD_BASE
}

/// Decodes an unsigned 64-bit cell into an `f64`.
///
/// # Arguments
/// * `buf` - Buffer holding the cell
/// * `offset` - Byte offset of the cell's low word
///
/// # Returns
/// The exact value for magnitudes up to 2^53; beyond that, the nearest
/// `f64` approximation (no error is raised)
///
/// # Panics
/// If `buf` is shorter than `offset + 8` bytes
pub fn decode_u64_to_i53(buf: &[u8], offset: usize) -> f64 {
    let lo = LittleEndian::read_u32(&buf[offset..offset + WORD_BYTES]);
    let hi = LittleEndian::read_u32(&buf[offset + WORD_BYTES..offset + CELL_BYTES]);
    lo as f64 + hi as f64 * HIGH_WORD_BASE
}

/// Encodes `num` into a 64-bit cell, best-effort.
///
/// Always writes. If `num` is outside [-2^53, 2^53] the written cell may
/// decode to a different value (garbage in, garbage out); callers use this
/// variant when range validity is already guaranteed and zero overhead is
/// wanted. There is no separate unsigned variant: the written bits are
/// identical either way, and interpreting the cell as signed or unsigned is
/// up to the reader.
///
/// In debug builds the encoder re-decodes the cell it just wrote and, if the
/// round trip does not reproduce `num`, reports the mismatch through
/// [`crate::diag`]. The report is advisory; the written bytes stand.
///
/// # Panics
/// If `buf` is shorter than `offset + 8` bytes
pub fn encode_i53_to_i64(buf: &mut [u8], offset: usize, num: f64) {
    let (lo, hi) = split_words(num);
    write_words(buf, offset, lo, hi);
    #[cfg(debug_assertions)]
    verify_round_trip(buf, offset, num);
}

#[cfg(debug_assertions)]
fn verify_round_trip(buf: &[u8], offset: usize, num: f64) {
    let decoded = if num >= 0.0 {
        decode_u64_to_i53(buf, offset)
    } else {
        decode_i64_to_i53(buf, offset)
    };
    if decoded != num {
        let lo = LittleEndian::read_u32(&buf[offset..offset + WORD_BYTES]);
        let hi = LittleEndian::read_u32(&buf[offset + WORD_BYTES..offset + CELL_BYTES]);
        crate::diag::report(&format!(
            "encode_i53_to_i64 out of range: wrote {} as lo={:#010x} hi={:#010x}, which decodes back to {}",
            num, lo, hi, decoded
        ));
    }
}

/// Encodes `num` into a signed 64-bit cell, clamping to the representable
/// range.
///
/// Values at or above 2^63 write the `i64::MAX` bit pattern; values below
/// -2^63 write the `i64::MIN` bit pattern. Never fails.
///
/// # Panics
/// If `buf` is shorter than `offset + 8` bytes
pub fn encode_i53_to_i64_clamped(buf: &mut [u8], offset: usize, num: f64) {
    if num >= I64_UPPER_BOUND {
        write_words(buf, offset, 0xFFFF_FFFF, 0x7FFF_FFFF);
    } else if num < I64_LOWER_BOUND {
        write_words(buf, offset, 0, 0x8000_0000);
    } else {
        let (lo, hi) = split_words(num);
        write_words(buf, offset, lo, hi);
    }
}

/// Encodes `num` into a signed 64-bit cell, failing on out-of-range input.
///
/// # Returns
/// * `Ok(())` - The cell was written
/// * `Err(RangeError::Int64)` - `num` is outside [-2^63, 2^63-1]; the
///   buffer is left untouched
///
/// # Panics
/// If `buf` is shorter than `offset + 8` bytes
pub fn encode_i53_to_i64_signaling(
    buf: &mut [u8],
    offset: usize,
    num: f64,
) -> Result<(), RangeError> {
    if num >= I64_UPPER_BOUND || num < I64_LOWER_BOUND {
        return Err(RangeError::Int64(num));
    }
    let (lo, hi) = split_words(num);
    write_words(buf, offset, lo, hi);
    Ok(())
}

/// Encodes `num` into an unsigned 64-bit cell, clamping to the representable
/// range.
///
/// Values at or above 2^64 write the `u64::MAX` bit pattern; negative values
/// write the all-zero pattern. Never fails.
///
/// # Panics
/// If `buf` is shorter than `offset + 8` bytes
pub fn encode_i53_to_u64_clamped(buf: &mut [u8], offset: usize, num: f64) {
    if num >= U64_UPPER_BOUND {
        write_words(buf, offset, 0xFFFF_FFFF, 0xFFFF_FFFF);
    } else if num < 0.0 {
        write_words(buf, offset, 0, 0);
    } else {
        let (lo, hi) = split_words(num);
        write_words(buf, offset, lo, hi);
    }
}

/// Encodes `num` into an unsigned 64-bit cell, failing on out-of-range
/// input.
///
/// # Returns
/// * `Ok(())` - The cell was written
/// * `Err(RangeError::Uint64)` - `num` is outside [0, 2^64-1]; the buffer
///   is left untouched
///
/// # Panics
/// If `buf` is shorter than `offset + 8` bytes
pub fn encode_i53_to_u64_signaling(
    buf: &mut [u8],
    offset: usize,
    num: f64,
) -> Result<(), RangeError> {
    if num < 0.0 || num >= U64_UPPER_BOUND {
        return Err(RangeError::Uint64(num));
    }
    let (lo, hi) = split_words(num);
    write_words(buf, offset, lo, hi);
    Ok(())
}
