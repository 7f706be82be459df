use crate::error::{BtpackError, Result};
use crate::pipeline::kdf::SALT_LEN;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration filename used by the surrounding UI
pub const CONFIG_FILE: &str = ".bt1config.json";

/// Caller-side configuration.
///
/// Owned by the UI layer; the core never reads it. The CLI (or a GUI shell)
/// loads it explicitly and passes the resolved password and salt into
/// pack/unpack as plain arguments. `dark_mode` is a UI preference carried in
/// the same file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub password: String,
    /// Optional hex-encoded 16-byte salt override; empty means random salt
    pub salt: String,
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password: "test1".to_string(),
            salt: String::new(),
            dark_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_vec(self)?)?;
        Ok(())
    }

    /// Parse the salt override, if any. Validation happens here so a bad
    /// value never reaches the core.
    pub fn salt_bytes(&self) -> Result<Option<[u8; SALT_LEN]>> {
        if self.salt.is_empty() {
            return Ok(None);
        }
        parse_salt_hex(&self.salt).map(Some)
    }
}

/// Decode a hex salt override into exactly 16 bytes
pub fn parse_salt_hex(s: &str) -> Result<[u8; SALT_LEN]> {
    let bytes = hex::decode(s).map_err(|_| BtpackError::InvalidSalt(s.to_string()))?;
    let salt: [u8; SALT_LEN] = bytes
        .try_into()
        .map_err(|_| BtpackError::InvalidSalt(s.to_string()))?;
    Ok(salt)
}
