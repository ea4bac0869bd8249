use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Odd number of hex digits: {0}")]
    OddLength(usize),

    #[error("Invalid hex digit {digit:?} at index {index}")]
    InvalidHexDigit { digit: char, index: usize },

    #[error("Invalid binary digit {digit:?} at index {index}")]
    InvalidBinaryDigit { digit: char, index: usize },

    #[error("Invalid {what} length: {len}")]
    InvalidLength { what: &'static str, len: usize },

    #[error("Need {needed} bytes, buffer has {len}")]
    OutOfBounds { needed: usize, len: usize },

    #[error("Invalid GBK byte sequence")]
    InvalidGbk,

    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Cipher error: {0}")]
    Cipher(#[from] openssl::error::ErrorStack),
}

pub type Result<T> = std::result::Result<T, Error>;
