use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

/// Fixed PBKDF2 iteration count (part of the wire contract)
pub const KDF_ITERATIONS: u32 = 100_000;

/// Derived key length in bytes
pub const KEY_LEN: usize = 32;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Stretch a password and salt into a 32-byte key with PBKDF2-HMAC-SHA256.
///
/// Deterministic: the same (password, salt) pair always yields the same key,
/// which is recomputed on both pack and unpack and never persisted. An empty
/// password is accepted.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, KDF_ITERATIONS, &mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        let salt = [7u8; SALT_LEN];
        let a = derive_key("password", &salt);
        let b = derive_key("password", &salt);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_passwords_differ() {
        let salt = [7u8; SALT_LEN];
        assert_ne!(derive_key("password", &salt), derive_key("Password", &salt));
    }

    #[test]
    fn test_different_salts_differ() {
        assert_ne!(
            derive_key("password", &[1u8; SALT_LEN]),
            derive_key("password", &[2u8; SALT_LEN])
        );
    }

    #[test]
    fn test_empty_password_accepted() {
        let key = derive_key("", &[0u8; SALT_LEN]);
        assert_eq!(key.len(), KEY_LEN);
    }
}
