//! Btpack - BT1 Encrypted Container Format
//!
//! Packages a single file into a compressed, encrypted BT1 container and
//! reverses the process. The payload goes through the multi-stage "M25"
//! encryption scheme.
//!
//! ## Transform Pipeline
//!
//! ```text
//! Input → Compress (zlib) → Substitute (seed_a, seed_b) → AES-192-ECB → ChaCha20-Poly1305 → Container
//! ```
//!
//! - **Compress**: zlib over the raw file bytes
//! - **Substitute**: two chained seed-derived byte permutations (obfuscation
//!   only, seeds stored in cleartext)
//! - **AES-192-ECB**: fixed-block cipher with always-applied length padding
//! - **ChaCha20-Poly1305**: the sole integrity/confidentiality boundary;
//!   key from PBKDF2-HMAC-SHA256 (password, random 16-byte salt, 100k rounds)
//!
//! The container frames a zlib-compressed JSON metadata record (filename,
//! sizes, timestamp, scheme id) ahead of the encrypted payload. Metadata is
//! compressed but not encrypted or integrity-protected.
//!
//! ## Example
//!
//! ```no_run
//! use btpack::cli::{pack_file, unpack_file, PackOptions, UnpackOptions};
//! use std::path::Path;
//!
//! // Pack a file
//! let pack_opts = PackOptions {
//!     password: "my_password".into(),
//!     ..Default::default()
//! };
//! pack_file(
//!     Path::new("input.txt"),
//!     Path::new("input.txt.bt1"),
//!     &pack_opts,
//! ).unwrap();
//!
//! // Unpack it again
//! let unpack_opts = UnpackOptions {
//!     password: "my_password".into(),
//! };
//! let written = unpack_file(
//!     Path::new("input.txt.bt1"),
//!     Path::new("."),
//!     &unpack_opts,
//! ).unwrap();
//! println!("restored {}", written.display());
//! ```

pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod m25;
pub mod metadata;
pub mod pipeline;

pub use config::Config;
pub use container::{pack_bytes, peek_metadata, unpack_bytes, BT1_MAGIC};
pub use error::{BtpackError, Result};
pub use metadata::{Metadata, ENCRYPTOR_ID};
