use crate::error::{BtpackError, Result};
use crate::m25;
use crate::metadata::Metadata;
use crate::pipeline::compress::{compress, decompress};
use crate::pipeline::kdf::SALT_LEN;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Magic bytes for the BT1 container format
pub const BT1_MAGIC: &[u8; 4] = b"BT1\x00";

/// Container header: magic (4) + metadata length u32 BE (4)
const HEADER_LEN: usize = 8;

/// Pack raw bytes into a BT1 container.
///
/// Layout: magic || metadata length (u32 BE) || zlib(metadata JSON) ||
/// M25 payload. The payload is zlib(data) run through the M25 stages.
pub fn pack_bytes(
    data: &[u8],
    filename: &str,
    password: &str,
    salt_override: Option<[u8; SALT_LEN]>,
) -> Result<Vec<u8>> {
    let compressed = compress(data)?;
    let metadata = Metadata::new(filename, compressed.len() as u64, data.len() as u64);
    let metadata_block = compress(&metadata.to_bytes()?)?;
    let payload = m25::encrypt(&compressed, password, salt_override)?;

    let mut container = Vec::with_capacity(HEADER_LEN + metadata_block.len() + payload.len());
    container.extend_from_slice(BT1_MAGIC);
    container.extend_from_slice(&(metadata_block.len() as u32).to_be_bytes());
    container.extend_from_slice(&metadata_block);
    container.extend_from_slice(&payload);
    Ok(container)
}

/// Unpack a BT1 container, returning the original bytes and the metadata
/// record (the caller decides where to write, using the recovered filename).
pub fn unpack_bytes(container: &[u8], password: &str) -> Result<(Vec<u8>, Metadata)> {
    let (metadata, payload) = split_container(container)?;

    let compressed = m25::decrypt(payload, password)?;
    let original = decompress(&compressed)?;
    Ok((original, metadata))
}

/// Read only the metadata record from a container file. The metadata block
/// is not encrypted, so no password is needed.
pub fn peek_metadata(path: &Path) -> Result<Metadata> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;
    if &header[..4] != BT1_MAGIC {
        return Err(BtpackError::InvalidFormat("invalid BT1 magic bytes".into()));
    }

    let metadata_len = u32::from_be_bytes(header[4..8].try_into().unwrap()) as usize;
    let mut metadata_block = vec![0u8; metadata_len];
    reader.read_exact(&mut metadata_block).map_err(|_| {
        BtpackError::InvalidFormat(format!(
            "metadata block truncated: declared {} bytes",
            metadata_len
        ))
    })?;

    parse_metadata_block(&metadata_block)
}

/// Split a container into its parsed metadata and the encrypted payload
fn split_container(container: &[u8]) -> Result<(Metadata, &[u8])> {
    if container.len() < HEADER_LEN {
        return Err(BtpackError::InvalidFormat(format!(
            "container truncated: {} bytes, need at least {}",
            container.len(),
            HEADER_LEN
        )));
    }
    if &container[..4] != BT1_MAGIC {
        return Err(BtpackError::InvalidFormat("invalid BT1 magic bytes".into()));
    }

    let metadata_len = u32::from_be_bytes(container[4..8].try_into().unwrap()) as usize;
    let payload_start = HEADER_LEN + metadata_len;
    if container.len() < payload_start {
        return Err(BtpackError::InvalidFormat(format!(
            "metadata block truncated: declared {} bytes, {} available",
            metadata_len,
            container.len() - HEADER_LEN
        )));
    }

    let metadata = parse_metadata_block(&container[HEADER_LEN..payload_start])?;
    Ok((metadata, &container[payload_start..]))
}

fn parse_metadata_block(block: &[u8]) -> Result<Metadata> {
    let json = decompress(block)
        .map_err(|_| BtpackError::InvalidFormat("metadata block is not valid zlib data".into()))?;
    Metadata::from_bytes(&json)
}
