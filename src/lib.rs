//! Byte and hex conversion helpers for rendering NFC tag data
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod binary;
pub mod bytes_ext;
pub mod crypto;
mod error;
pub mod hex;
pub mod int;
pub mod text;

pub use bytes_ext::BytesExt;
pub use error::{Error, Result};
pub use hex::{bytes_to_hex, bytes_to_hex_spaced, hex_char_to_nibble, hex_decode, hex_encode};
pub use int::decode_big_endian_int;

/// End-to-end walks through the kind of data a tag reader hands over.
///
/// The code in these tests should be minimal: just set up inputs and expected values, call the
/// library, and assert. The actual implementation belongs in the library modules.
#[cfg(test)]
mod scenarios {
    use crate::{
        bytes_to_hex, bytes_to_hex_spaced, crypto, decode_big_endian_int, hex::hex_digit_upper,
        hex_char_to_nibble, hex_decode, BytesExt,
    };
    use rand::Rng;

    #[test]
    fn render_dead() {
        let input: [u8; 2] = [0xDE, 0xAD];

        assert_eq!(bytes_to_hex(Some(&input[..]), true).unwrap(), "0xDEAD");
        assert_eq!(bytes_to_hex(Some(&input[..]), false).unwrap(), "DEAD");
        assert_eq!(bytes_to_hex_spaced(input), "DE AD ");
    }

    #[test]
    fn render_tag_id() {
        let tag_id: [u8; 7] = [0x04, 0x3A, 0x6F, 0x12, 0x8B, 0x5C, 0x80];

        assert_eq!(bytes_to_hex_spaced(tag_id), "04 3A 6F 12 8B 5C 80 ");
        assert_eq!(tag_id.to_hex(true).unwrap(), "0x043A6F128B5C80");
    }

    #[test]
    fn nothing_to_render() {
        assert_eq!(bytes_to_hex(None, true), None);
        assert_eq!(bytes_to_hex(Some(&[][..]), true), None);
    }

    #[test]
    fn random_buffers_keep_their_shape() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let len = rng.gen_range(1..64);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

            let plain = bytes_to_hex(Some(&bytes[..]), false).unwrap();
            assert_eq!(plain.len(), 2 * len);
            assert!(plain.bytes().all(|c| c.is_ascii_digit() || (b'A'..=b'F').contains(&c)));
            assert_eq!(
                bytes_to_hex(Some(&bytes[..]), true).unwrap(),
                format!("0x{plain}")
            );

            let spaced = bytes_to_hex_spaced(&bytes);
            assert_eq!(spaced.len(), 3 * len);
            assert!(spaced.ends_with(' '));

            assert_eq!(hex_decode(&plain).unwrap(), bytes);
        }
    }

    #[test]
    fn nibbles() {
        assert_eq!(hex_char_to_nibble(b'A'), 10);
        assert_eq!(hex_char_to_nibble(b'f'), 15);
        assert_eq!(hex_char_to_nibble(b'0'), 0);
        assert_eq!(hex_char_to_nibble(b'!'), 0);

        for b in 0..=255u8 {
            let high = hex_char_to_nibble(hex_digit_upper(b >> 4) as u8);
            let low = hex_char_to_nibble(hex_digit_upper(b & 0xF) as u8);
            assert_eq!(high * 16 + low, b);
        }
    }

    #[test]
    fn balance_fields() {
        assert_eq!(decode_big_endian_int(&[0x00, 0x01], 2), 1);

        // a balance response: four value bytes followed by the status word
        let response = [0x00, 0x00, 0x27, 0x10, 0x90, 0x00];
        assert_eq!(decode_big_endian_int(&response, 4), 10_000);

        let all_ones: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
        let expected = 0xFFFF_FFFFu32.wrapping_sub(0x8000_0000) as i32;
        assert_eq!(decode_big_endian_int(&all_ones, 4), expected);
    }

    #[test]
    fn decrypt_challenge_and_rotate() {
        let key = [0; crypto::KEY_SIZE];
        let rnd_b = hex_decode("0123456789ABCDEF").unwrap();

        let challenge = crypto::encrypt_3des_cbc(&rnd_b, &key, &crypto::ZERO_IV).unwrap();
        let decrypted = crypto::decrypt_3des_cbc(&challenge, &key, &crypto::ZERO_IV).unwrap();
        assert_eq!(decrypted, rnd_b);

        let rotated = decrypted.rotate_left_one();
        assert_eq!(rotated.to_hex(false).unwrap(), "23456789ABCDEF01");
    }
}
