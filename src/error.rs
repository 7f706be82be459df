use thiserror::Error;

#[derive(Error, Debug)]
pub enum BtpackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid container format: {0}")]
    InvalidFormat(String),

    #[error("Authentication failed: wrong password or corrupted data")]
    AuthenticationFailed,

    #[error("Encryption error: {0}")]
    EncryptionError(String),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Decompression error: {0}")]
    DecompressionError(String),

    #[error("Invalid padding byte: {0}. Must be between 1 and 16")]
    InvalidPadding(u8),

    #[error("Invalid salt override: {0}. Must be 32 hex characters (16 bytes)")]
    InvalidSalt(String),

    #[error("Unsupported encryptor: {0}")]
    UnsupportedEncryptor(String),
}

pub type Result<T> = std::result::Result<T, BtpackError>;
