//! Hex rendering of raw tag data, and the nibble mapping used to read it back.

use crate::{Error, Result};

pub const HEX_PREFIX: &str = "0x";

const LOW_4_BITS: u8 = 0b0000_1111;

fn hex_digit(nibble: u8, upper: bool) -> char {
    let nibble = nibble & LOW_4_BITS;
    let c = if nibble < 10 {
        b'0' + nibble
    } else if upper {
        b'A' + nibble - 10
    } else {
        b'a' + nibble - 10
    };
    c as char
}

/// Uppercase hex digit for the low 4 bits of `nibble`. The high bits are ignored.
pub fn hex_digit_upper(nibble: u8) -> char {
    hex_digit(nibble, true)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Map an ASCII hex character to its 4-bit value.
///
/// Anything that is not `0-9`, `A-F` or `a-f` maps to 0 without complaint. Callers that need to
/// tell a real `'0'` apart from garbage should use [`hex_decode`] instead.
pub fn hex_char_to_nibble(c: u8) -> u8 {
    nibble(c).unwrap_or(0)
}

/// Hex encode `data` with no prefix and no separators.
pub fn hex_encode<B: AsRef<[u8]>>(data: B, upper: bool) -> String {
    data.as_ref()
        .iter()
        .flat_map(|byte| [byte >> 4, byte & LOW_4_BITS])
        .map(|nibble| hex_digit(nibble, upper))
        .collect()
}

/// Render bytes as uppercase hex, optionally prefixed with `0x`.
///
/// Returns `None` for absent or empty input. The prefix is not returned on its own in that case.
pub fn bytes_to_hex(data: Option<&[u8]>, with_prefix: bool) -> Option<String> {
    let data = data.filter(|data| !data.is_empty())?;
    let prefix = if with_prefix { HEX_PREFIX } else { "" };
    Some(format!("{prefix}{}", hex_encode(data, true)))
}

/// Render bytes as uppercase hex pairs, each followed by a space.
///
/// The last pair keeps its trailing space too, so `[0xDE, 0xAD]` renders as `"DE AD "`.
pub fn bytes_to_hex_spaced<B: AsRef<[u8]>>(data: B) -> String {
    let data = data.as_ref();
    let mut out = String::with_capacity(data.len() * 3);
    for byte in data {
        out.push(hex_digit_upper(byte >> 4));
        out.push(hex_digit_upper(*byte));
        out.push(' ');
    }
    out
}

/// Decode a hex string into bytes. Surrounding whitespace is ignored and either case is accepted.
pub fn hex_decode<S: AsRef<str>>(s: S) -> Result<Vec<u8>> {
    let s = s.as_ref().trim();

    let nibbles = s
        .char_indices()
        .map(|(index, digit)| {
            u8::try_from(digit)
                .ok()
                .and_then(nibble)
                .ok_or(Error::InvalidHexDigit { digit, index })
        })
        .collect::<Result<Vec<_>>>()?;

    if nibbles.len() % 2 != 0 {
        return Err(Error::OddLength(nibbles.len()));
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| pair[0] << 4 | pair[1])
        .collect())
}
