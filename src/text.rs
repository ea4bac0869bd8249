//! GBK text fields, as carried by cards issued in mainland China.

use crate::{hex::hex_encode, Error, Result};
use encoding_rs::GBK;
use std::borrow::Cow;

/// GBK-encode `s` and render it as lowercase hex.
///
/// Characters GBK cannot represent are written as HTML numeric character references (`&#NNNN;`)
/// before encoding, so nothing is silently dropped.
pub fn gbk_to_hex<S: AsRef<str>>(s: S) -> String {
    let (bytes, _, _) = GBK.encode(s.as_ref());
    hex_encode(bytes, false)
}

/// Decode GBK bytes into a string. Malformed sequences are an error.
pub fn bytes_to_gbk_string(data: &[u8]) -> Result<String> {
    GBK.decode_without_bom_handling_and_without_replacement(data)
        .map(Cow::into_owned)
        .ok_or(Error::InvalidGbk)
}

/// Decode GBK bytes, replacing malformed sequences with U+FFFD.
pub fn bytes_to_gbk_string_lossy(data: &[u8]) -> String {
    let (text, _) = GBK.decode_without_bom_handling(data);
    text.into_owned()
}
