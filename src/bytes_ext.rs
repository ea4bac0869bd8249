use crate::{hex, int};

pub trait BytesExt {
    /// Xor self with another slice of bytes of equal length
    fn xor<B: AsRef<[u8]>>(&self, other: B) -> Vec<u8>;

    /// Copy of self with the first byte moved to the end
    fn rotate_left_one(&self) -> Vec<u8>;

    /// See [`hex::bytes_to_hex`]. Returns `None` when self is empty.
    fn to_hex(&self, with_prefix: bool) -> Option<String>;

    /// See [`hex::bytes_to_hex_spaced`].
    fn to_hex_spaced(&self) -> String;

    /// See [`int::decode_big_endian_int`].
    fn decode_big_endian_int(&self, n: usize) -> i32;
}

fn assert_same_length(a: &[u8], b: &[u8]) {
    assert_eq!(
        a.len(),
        b.len(),
        "Length mismatch: {} != {}",
        a.len(),
        b.len()
    );
}

impl BytesExt for [u8] {
    fn xor<B: AsRef<[u8]>>(&self, other: B) -> Vec<u8> {
        assert_same_length(self, other.as_ref());

        self.iter()
            .zip(other.as_ref().iter())
            .map(|(a, b)| a ^ b)
            .collect()
    }

    fn rotate_left_one(&self) -> Vec<u8> {
        let mut rotated = self.to_vec();
        if !rotated.is_empty() {
            rotated.rotate_left(1);
        }
        rotated
    }

    fn to_hex(&self, with_prefix: bool) -> Option<String> {
        hex::bytes_to_hex(Some(self), with_prefix)
    }

    fn to_hex_spaced(&self) -> String {
        hex::bytes_to_hex_spaced(self)
    }

    fn decode_big_endian_int(&self, n: usize) -> i32 {
        int::decode_big_endian_int(self, n)
    }
}
