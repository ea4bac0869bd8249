//! Integer and float fields read out of (or written into) raw card buffers.

use crate::{hex::hex_encode, Error, Result};

/// Decoded values whose unsigned magnitude is above this get [`SIGN_CORRECTION`] subtracted.
pub const SIGN_CORRECTION_THRESHOLD: u32 = 100_000;

/// Subtracted (with 32-bit wraparound) from decoded values above [`SIGN_CORRECTION_THRESHOLD`].
///
/// This mirrors the balance field encoding of the cards the decoder was written for. It is not a
/// general unsigned-to-signed conversion.
pub const SIGN_CORRECTION: u32 = 0x8000_0000;

fn accumulate_be(data: &[u8]) -> i32 {
    let acc = data
        .iter()
        .fold(0u32, |acc, &byte| acc << 8 | u32::from(byte));

    let acc = if acc > SIGN_CORRECTION_THRESHOLD {
        acc.wrapping_sub(SIGN_CORRECTION)
    } else {
        acc
    };

    acc as i32
}

/// Decode the first `n` bytes of `data` as a big-endian integer, applying the sign correction.
///
/// With `n > 4` the leading bytes are shifted out of the accumulator.
///
/// # Panics
///
/// Panics if `n` is greater than `data.len()`.
pub fn decode_big_endian_int(data: &[u8], n: usize) -> i32 {
    accumulate_be(&data[..n])
}

/// Like [`decode_big_endian_int`], but a short buffer is an error instead of a panic.
pub fn try_decode_big_endian_int(data: &[u8], n: usize) -> Result<i32> {
    data.get(..n)
        .map(accumulate_be)
        .ok_or(Error::OutOfBounds {
            needed: n,
            len: data.len(),
        })
}

/// Lowercase hex of `n` with no leading zeros. Negative values show their two's complement.
pub fn int_to_hex(n: i32) -> String {
    format!("{n:x}")
}

/// Parse a radix-16 integer, with an optional leading sign.
pub fn hex_to_int<S: AsRef<str>>(s: S) -> Result<i32> {
    Ok(i32::from_str_radix(s.as_ref(), 16)?)
}

/// IEEE-754 bits of `f`, least significant byte first.
pub fn f32_to_bytes(f: f32) -> [u8; 4] {
    f.to_le_bytes()
}

/// Inverse of [`f32_to_bytes`]. Only the first four bytes of `data` are read.
pub fn bytes_to_f32(data: &[u8]) -> Result<f32> {
    let bytes: [u8; 4] = data
        .get(..4)
        .and_then(|head| head.try_into().ok())
        .ok_or(Error::OutOfBounds {
            needed: 4,
            len: data.len(),
        })?;
    Ok(f32::from_le_bytes(bytes))
}

pub fn f32_to_hex(f: f32) -> String {
    hex_encode(f32_to_bytes(f), false)
}
