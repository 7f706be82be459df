use crate::container::peek_metadata;
use crate::error::Result;
use std::path::Path;

/// Display the metadata record of a BT1 container.
/// The metadata block is not encrypted, so no password is required.
pub fn show_info(path: &Path) -> Result<String> {
    let metadata = peek_metadata(path)?;
    let container_size = std::fs::metadata(path)?.len();

    let mut output = String::new();

    output.push_str("BT1 Container Information\n");
    output.push_str("=========================\n\n");

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Container size: {}\n", format_size(container_size)));
    output.push_str("\n");

    output.push_str("Packed file:\n");
    output.push_str(&format!("  Filename: {}\n", metadata.filename));
    output.push_str(&format!("  Original size: {}\n", format_size(metadata.original_size)));
    output.push_str(&format!("  Compressed size: {}\n", format_size(metadata.compressed_size)));
    if metadata.original_size > 0 {
        let ratio = metadata.compressed_size as f64 / metadata.original_size as f64;
        output.push_str(&format!("  Compression ratio: {:.1}%\n", ratio * 100.0));
    }
    output.push_str("\n");

    output.push_str(&format!("Created: {}\n", metadata.created));
    output.push_str(&format!("Encryptor: {}\n", metadata.encryptor));

    Ok(output)
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
