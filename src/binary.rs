//! Conversions between strings of binary digits and hex strings.

use crate::{Error, Result};

const BITS_PER_NIBBLE: usize = 4;
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn bit(digit: char, index: usize) -> Result<u8> {
    match digit {
        '0' => Ok(0),
        '1' => Ok(1),
        _ => Err(Error::InvalidBinaryDigit { digit, index }),
    }
}

/// Convert a string of `0`/`1` digits to lowercase hex, four bits per hex digit.
///
/// The input must be a non-empty whole number of bytes (a multiple of 8 digits).
pub fn binary_to_hex<S: AsRef<str>>(s: S) -> Result<String> {
    let s = s.as_ref();
    if s.is_empty() || s.len() % 8 != 0 {
        return Err(Error::InvalidLength {
            what: "binary string",
            len: s.len(),
        });
    }

    let bits = s
        .char_indices()
        .map(|(index, digit)| bit(digit, index))
        .collect::<Result<Vec<_>>>()?;

    Ok(bits
        .chunks_exact(BITS_PER_NIBBLE)
        .map(|group| group.iter().fold(0usize, |acc, &b| acc << 1 | usize::from(b)))
        .map(|nibble| HEX_DIGITS[nibble] as char)
        .collect())
}

/// Convert a hex string to binary digits, four zero-padded bits per hex digit.
pub fn hex_to_binary<S: AsRef<str>>(s: S) -> Result<String> {
    let s = s.as_ref();
    if s.len() % 2 != 0 {
        return Err(Error::OddLength(s.len()));
    }

    let mut out = String::with_capacity(s.len() * BITS_PER_NIBBLE);
    for (index, digit) in s.char_indices() {
        let nibble = digit
            .to_digit(16)
            .ok_or(Error::InvalidHexDigit { digit, index })?;
        out.push_str(&format!("{nibble:04b}"));
    }
    Ok(out)
}
