use crate::error::{BtpackError, Result};
use crate::pipeline::aead::{aead_decrypt, aead_encrypt, NONCE_LEN, TAG_LEN};
use crate::pipeline::block::{block_decrypt, block_encrypt};
use crate::pipeline::kdf::{derive_key, SALT_LEN};
use crate::pipeline::permute::MAX_SEED;
use crate::pipeline::substitute::{substitute_forward, substitute_inverse};
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// Cleartext blob prefix: seed_a (4) + seed_b (4) + salt (16) + nonce (12)
const BLOB_PREFIX_LEN: usize = 8 + SALT_LEN + NONCE_LEN;

/// The parsed form of an M25 encrypted payload.
///
/// Layout on the wire: seed_a u32 BE, seed_b u32 BE, 16-byte salt, 12-byte
/// nonce, then ChaCha20-Poly1305 ciphertext with its tag. The seeds travel
/// in cleartext - the substitution they parameterize has no cryptographic
/// strength, but without them the substitution cannot be inverted.
#[derive(Debug, Clone)]
pub struct EncryptedBlob {
    pub seed_a: u32,
    pub seed_b: u32,
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    /// Serialize to bytes: seed_a || seed_b || salt || nonce || ciphertext
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(BLOB_PREFIX_LEN + self.ciphertext.len());
        result.extend_from_slice(&self.seed_a.to_be_bytes());
        result.extend_from_slice(&self.seed_b.to_be_bytes());
        result.extend_from_slice(&self.salt);
        result.extend_from_slice(&self.nonce);
        result.extend_from_slice(&self.ciphertext);
        result
    }

    /// Deserialize from bytes, rejecting anything too short to hold the
    /// cleartext prefix and an authentication tag
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < BLOB_PREFIX_LEN + TAG_LEN {
            return Err(BtpackError::InvalidFormat(format!(
                "encrypted payload truncated: {} bytes, need at least {}",
                bytes.len(),
                BLOB_PREFIX_LEN + TAG_LEN
            )));
        }

        let seed_a = u32::from_be_bytes(bytes[0..4].try_into().unwrap());
        let seed_b = u32::from_be_bytes(bytes[4..8].try_into().unwrap());

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[8..8 + SALT_LEN]);

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[8 + SALT_LEN..BLOB_PREFIX_LEN]);

        Ok(Self {
            seed_a,
            seed_b,
            salt,
            nonce,
            ciphertext: bytes[BLOB_PREFIX_LEN..].to_vec(),
        })
    }
}

/// Encrypt data with the M25 scheme:
/// substitute(seed_a, seed_b) -> AES-192-ECB -> ChaCha20-Poly1305.
///
/// Salt, nonce and both substitution seeds are drawn fresh from the OS RNG
/// on every call, so packing the same input twice yields different bytes.
/// A caller-supplied salt overrides the random one (the seeds and nonce
/// stay random).
pub fn encrypt(data: &[u8], password: &str, salt_override: Option<[u8; SALT_LEN]>) -> Result<Vec<u8>> {
    let mut rng = OsRng;

    let salt = match salt_override {
        Some(salt) => salt,
        None => {
            let mut salt = [0u8; SALT_LEN];
            rng.fill_bytes(&mut salt);
            salt
        }
    };
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);
    let seed_a = rng.gen_range(1..=MAX_SEED);
    let seed_b = rng.gen_range(1..=MAX_SEED);

    let substituted = substitute_forward(data, seed_a, seed_b);
    let key = derive_key(password, &salt);
    let block_encrypted = block_encrypt(&substituted, &key);
    let ciphertext = aead_encrypt(&block_encrypted, &key, &nonce)?;

    let blob = EncryptedBlob {
        seed_a,
        seed_b,
        salt,
        nonce,
        ciphertext,
    };
    Ok(blob.to_bytes())
}

/// Decrypt an M25 payload, reversing the stages in opposite order.
///
/// Fails closed: a wrong password or any tampering surfaces as
/// `AuthenticationFailed` from the AEAD stage before the inner stages run.
pub fn decrypt(blob: &[u8], password: &str) -> Result<Vec<u8>> {
    let blob = EncryptedBlob::from_bytes(blob)?;

    let key = derive_key(password, &blob.salt);
    let block_encrypted = aead_decrypt(&blob.ciphertext, &key, &blob.nonce)?;
    let substituted = block_decrypt(&block_encrypted, &key)?;
    Ok(substitute_inverse(&substituted, blob.seed_a, blob.seed_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = b"m25 pipeline payload with some repetition repetition";
        let blob = encrypt(data, "password", None).unwrap();
        let decrypted = decrypt(&blob, "password").unwrap();
        assert_eq!(data.as_slice(), &decrypted[..]);
    }

    #[test]
    fn test_roundtrip_empty() {
        let blob = encrypt(b"", "password", None).unwrap();
        assert!(decrypt(&blob, "password").unwrap().is_empty());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let blob = encrypt(b"secret bytes", "correct", None).unwrap();
        assert!(matches!(
            decrypt(&blob, "wrong"),
            Err(BtpackError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_two_encryptions_differ() {
        let data = b"same input, same password";
        let first = encrypt(data, "pw", None).unwrap();
        let second = encrypt(data, "pw", None).unwrap();
        assert_ne!(first, second);
        assert_eq!(decrypt(&first, "pw").unwrap(), decrypt(&second, "pw").unwrap());
    }

    #[test]
    fn test_salt_override_is_used() {
        let salt = [0xABu8; SALT_LEN];
        let blob_bytes = encrypt(b"data", "pw", Some(salt)).unwrap();
        let blob = EncryptedBlob::from_bytes(&blob_bytes).unwrap();
        assert_eq!(blob.salt, salt);
        assert_eq!(decrypt(&blob_bytes, "pw").unwrap(), b"data");
    }

    #[test]
    fn test_truncated_blob_is_format_error() {
        assert!(matches!(
            decrypt(&[0u8; 20], "pw"),
            Err(BtpackError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_blob_framing_roundtrip() {
        let blob = EncryptedBlob {
            seed_a: 0x01020304,
            seed_b: 0x7FFFFFFF,
            salt: [9u8; SALT_LEN],
            nonce: [3u8; NONCE_LEN],
            ciphertext: vec![0xAA; 24],
        };
        let bytes = blob.to_bytes();
        let restored = EncryptedBlob::from_bytes(&bytes).unwrap();
        assert_eq!(blob.seed_a, restored.seed_a);
        assert_eq!(blob.seed_b, restored.seed_b);
        assert_eq!(blob.salt, restored.salt);
        assert_eq!(blob.nonce, restored.nonce);
        assert_eq!(blob.ciphertext, restored.ciphertext);
    }

    #[test]
    fn test_flipped_ciphertext_byte_rejected() {
        let blob = encrypt(b"tamper detection test payload", "pw", None).unwrap();
        let mut tampered = blob.clone();
        let last = tampered.len() - 1;
        tampered[last] ^= 0x80;
        assert!(matches!(
            decrypt(&tampered, "pw"),
            Err(BtpackError::AuthenticationFailed)
        ));
    }
}
