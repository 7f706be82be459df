use crate::container::unpack_bytes;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Options for the unpack command
#[derive(Debug, Clone)]
pub struct UnpackOptions {
    pub password: String,
}

/// Unpack a BT1 container into a directory.
///
/// The output filename comes from the container metadata; only its final
/// path component is used, so a hostile record cannot escape the directory.
/// Returns the path of the written file.
pub fn unpack_file(
    input_path: &Path,
    output_dir: &Path,
    options: &UnpackOptions,
) -> Result<PathBuf> {
    let container = std::fs::read(input_path)?;
    let (data, metadata) = unpack_bytes(&container, &options.password)?;

    let filename = Path::new(&metadata.filename)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("unpacked.bin"));

    let destination = output_dir.join(filename);
    std::fs::write(&destination, &data)?;
    Ok(destination)
}
