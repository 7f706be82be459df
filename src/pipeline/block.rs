use crate::error::{BtpackError, Result};
use crate::pipeline::kdf::KEY_LEN;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes192;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// AES-192 uses the first 24 bytes of the derived key
const AES192_KEY_LEN: usize = 24;

/// Encrypt data with AES-192 in ECB mode.
///
/// The input is padded with `16 - len % 16` bytes, each equal to the pad
/// length, so padding is always present (1..=16 bytes) even on block-aligned
/// input. ECB means identical plaintext blocks produce identical ciphertext
/// blocks; this stage sits between the substitution layer and the AEAD layer
/// and is kept non-chaining for format compatibility.
pub fn block_encrypt(data: &[u8], key: &[u8; KEY_LEN]) -> Vec<u8> {
    let cipher = Aes192::new(GenericArray::from_slice(&key[..AES192_KEY_LEN]));

    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut buf = Vec::with_capacity(data.len() + pad_len);
    buf.extend_from_slice(data);
    buf.resize(data.len() + pad_len, pad_len as u8);

    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
    }
    buf
}

/// Decrypt AES-192-ECB data and strip the trailing padding
pub fn block_decrypt(data: &[u8], key: &[u8; KEY_LEN]) -> Result<Vec<u8>> {
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(BtpackError::InvalidFormat(format!(
            "block cipher input of {} bytes is not a multiple of {}",
            data.len(),
            BLOCK_SIZE
        )));
    }

    let cipher = Aes192::new(GenericArray::from_slice(&key[..AES192_KEY_LEN]));

    let mut buf = data.to_vec();
    for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
        cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
    }

    let pad_len = buf[buf.len() - 1] as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE {
        return Err(BtpackError::InvalidPadding(pad_len as u8));
    }
    buf.truncate(buf.len() - pad_len);
    Ok(buf)
}
