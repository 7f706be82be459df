use crate::error::{BtpackError, Result};
use crate::pipeline::kdf::KEY_LEN;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};

/// AEAD nonce length in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// Poly1305 authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Encrypt with ChaCha20-Poly1305. The returned buffer is ciphertext with
/// the 16-byte authentication tag appended; no associated data is used.
pub fn aead_encrypt(data: &[u8], key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN]) -> Result<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    cipher
        .encrypt(Nonce::from_slice(nonce), data)
        .map_err(|_| BtpackError::EncryptionError("ChaCha20-Poly1305 seal failed".into()))
}

/// Decrypt and verify a ChaCha20-Poly1305 blob.
///
/// This is the sole integrity boundary of the pipeline: any tag mismatch
/// (wrong password, wrong nonce or salt, a single flipped ciphertext bit)
/// fails closed with no partial output.
pub fn aead_decrypt(blob: &[u8], key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN]) -> Result<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), blob)
        .map_err(|_| BtpackError::AuthenticationFailed)
}
