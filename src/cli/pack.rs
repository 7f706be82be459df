use crate::container::pack_bytes;
use crate::error::Result;
use crate::pipeline::kdf::SALT_LEN;
use std::path::Path;

/// Options for the pack command
#[derive(Debug, Clone)]
pub struct PackOptions {
    pub password: String,
    /// Replaces the random key-derivation salt when set
    pub salt: Option<[u8; SALT_LEN]>,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            password: String::new(),
            salt: None,
        }
    }
}

/// Pack a file into a BT1 container.
/// Returns the number of container bytes written.
pub fn pack_file(input_path: &Path, output_path: &Path, options: &PackOptions) -> Result<u64> {
    let data = std::fs::read(input_path)?;

    let filename = input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("input path {} has no filename", input_path.display()),
            )
        })?;

    let container = pack_bytes(&data, &filename, &options.password, options.salt)?;
    std::fs::write(output_path, &container)?;
    Ok(container.len() as u64)
}
