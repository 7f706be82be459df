use crate::error::{BtpackError, Result};
use serde::{Deserialize, Serialize};

/// Identifier of the M25 scheme version; readers reject anything else
pub const ENCRYPTOR_ID: &str = "M25-v1";

/// The container's metadata record.
///
/// Serialized as JSON (the field names are part of the wire format), then
/// zlib-compressed into the metadata block of the container. The block is
/// compressed but neither encrypted nor integrity-protected: a corrupted
/// record fails to decompress or parse and surfaces as a format error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Name of the packed file, used to recover the output filename on unpack
    pub filename: String,
    /// Size of the compressed payload in bytes
    pub compressed_size: u64,
    /// Size of the original file in bytes
    pub original_size: u64,
    /// Local pack timestamp, `%Y-%m-%dT%H:%M:%S`
    pub created: String,
    /// Scheme identifier, always `M25-v1`
    pub encryptor: String,
}

impl Metadata {
    /// Build a record for a file being packed now
    pub fn new(filename: &str, compressed_size: u64, original_size: u64) -> Self {
        Self {
            filename: filename.to_string(),
            compressed_size,
            original_size,
            created: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            encryptor: ENCRYPTOR_ID.to_string(),
        }
    }

    /// Serialize to JSON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize from JSON bytes and validate the encryptor id
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let metadata: Metadata = serde_json::from_slice(data)
            .map_err(|e| BtpackError::InvalidFormat(format!("metadata record: {}", e)))?;
        if metadata.encryptor != ENCRYPTOR_ID {
            return Err(BtpackError::UnsupportedEncryptor(metadata.encryptor));
        }
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_encryptor_and_timestamp() {
        let meta = Metadata::new("report.pdf", 100, 250);
        assert_eq!(meta.encryptor, ENCRYPTOR_ID);
        assert_eq!(meta.filename, "report.pdf");
        assert_eq!(meta.compressed_size, 100);
        assert_eq!(meta.original_size, 250);
        // 2026-08-07T23:11:05 shape
        assert_eq!(meta.created.len(), 19);
        assert_eq!(&meta.created[4..5], "-");
        assert_eq!(&meta.created[10..11], "T");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let meta = Metadata::new("notes.txt", 42, 99);
        let bytes = meta.to_bytes().unwrap();
        let restored = Metadata::from_bytes(&bytes).unwrap();
        assert_eq!(meta.filename, restored.filename);
        assert_eq!(meta.compressed_size, restored.compressed_size);
        assert_eq!(meta.original_size, restored.original_size);
        assert_eq!(meta.created, restored.created);
    }

    #[test]
    fn test_wire_field_names() {
        let meta = Metadata::new("a.bin", 1, 2);
        let json: serde_json::Value = serde_json::from_slice(&meta.to_bytes().unwrap()).unwrap();
        for key in ["filename", "compressed_size", "original_size", "created", "encryptor"] {
            assert!(json.get(key).is_some(), "missing wire key {}", key);
        }
    }

    #[test]
    fn test_garbled_record_is_format_error() {
        assert!(matches!(
            Metadata::from_bytes(b"{not json"),
            Err(BtpackError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_unknown_encryptor_rejected() {
        let json = br#"{"filename":"f","compressed_size":1,"original_size":1,"created":"2026-01-01T00:00:00","encryptor":"M26-v2"}"#;
        assert!(matches!(
            Metadata::from_bytes(json),
            Err(BtpackError::UnsupportedEncryptor(_))
        ));
    }
}
