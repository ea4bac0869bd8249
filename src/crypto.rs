//! Two-key Triple-DES in CBC mode, as used by MIFARE-family card authentication.
//!
//! Keys are 16 bytes (`K1 || K2`) and are run as three-key EDE with `K1 || K2 || K1`. No padding is
//! ever added or removed: data must already be a whole number of blocks.

use crate::{bytes_ext::BytesExt, Error, Result};
use openssl::symm::{self, Crypter, Mode};

pub const BLOCK_SIZE: usize = 8;
pub const KEY_SIZE: usize = 16;

/// The IV card authentication starts from.
pub const ZERO_IV: [u8; BLOCK_SIZE] = [0; BLOCK_SIZE];

fn check_lengths(data: &[u8], key: &[u8], iv: &[u8]) -> Result<()> {
    if key.len() != KEY_SIZE {
        return Err(Error::InvalidLength {
            what: "key",
            len: key.len(),
        });
    }
    if iv.len() != BLOCK_SIZE {
        return Err(Error::InvalidLength {
            what: "iv",
            len: iv.len(),
        });
    }
    if data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidLength {
            what: "data",
            len: data.len(),
        });
    }
    Ok(())
}

/// `K1 || K2` -> `K1 || K2 || K1`
fn expand_key(key: &[u8]) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(KEY_SIZE + BLOCK_SIZE);
    expanded.extend_from_slice(key);
    expanded.extend_from_slice(&key[..BLOCK_SIZE]);
    expanded
}

/// Run one block through the raw EDE primitive. CBC chaining is left to the callers.
fn crypt_block(block: &[u8], key: &[u8], mode: Mode) -> Result<Vec<u8>> {
    let cipher = symm::Cipher::des_ede3();

    let mut crypter = Crypter::new(cipher, mode, key, None)?;
    crypter.pad(false);

    let mut buf = vec![0; block.len() + cipher.block_size()];
    let mut count = crypter.update(block, &mut buf)?;
    count += crypter.finalize(&mut buf[count..])?;
    buf.truncate(count);

    Ok(buf)
}

pub fn decrypt_3des_cbc(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    check_lengths(ciphertext, key, iv)?;
    tracing::trace!(len = ciphertext.len(), "3DES-CBC decrypt");

    let key = expand_key(key);
    let mut chain = iv;
    let mut plaintext = Vec::with_capacity(ciphertext.len());

    for block in ciphertext.chunks_exact(BLOCK_SIZE) {
        let decrypted = crypt_block(block, &key, Mode::Decrypt)?;
        plaintext.extend_from_slice(&decrypted.xor(chain));
        chain = block;
    }

    Ok(plaintext)
}

pub fn encrypt_3des_cbc(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    check_lengths(plaintext, key, iv)?;
    tracing::trace!(len = plaintext.len(), "3DES-CBC encrypt");

    let key = expand_key(key);
    let mut chain = iv.to_vec();
    let mut ciphertext = Vec::with_capacity(plaintext.len());

    for block in plaintext.chunks_exact(BLOCK_SIZE) {
        let encrypted = crypt_block(&block.xor(&chain), &key, Mode::Encrypt)?;
        ciphertext.extend_from_slice(&encrypted);
        chain = encrypted;
    }

    Ok(ciphertext)
}
