use crate::error::{BtpackError, Result};
use flate2::write::{ZlibDecoder, ZlibEncoder};
use flate2::Compression;
use std::io::Write;

/// Compress data with zlib (the BT1 wire format for both metadata and payload)
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| BtpackError::CompressionError(format!("zlib: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| BtpackError::CompressionError(format!("zlib: {}", e)))
}

/// Decompress a zlib stream
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(Vec::new());
    decoder
        .write_all(data)
        .map_err(|e| BtpackError::DecompressionError(format!("zlib: {}", e)))?;
    decoder
        .finish()
        .map_err(|e| BtpackError::DecompressionError(format!("zlib: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = b"Hello, World! This is a test of compression.";
        let compressed = compress(data).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(data.as_slice(), &decompressed[..]);
    }

    #[test]
    fn test_empty_data() {
        let compressed = compress(b"").unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_large_data() {
        let data: Vec<u8> = (0..100_000).map(|i| (i % 256) as u8).collect();
        let compressed = compress(&data).unwrap();
        assert!(compressed.len() < data.len());
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(data, decompressed);
    }

    #[test]
    fn test_decompress_garbage_fails() {
        assert!(decompress(b"not a zlib stream").is_err());
    }
}
