pub mod aead;
pub mod block;
pub mod compress;
pub mod kdf;
pub mod permute;
pub mod substitute;

pub use aead::*;
pub use block::*;
pub use compress::*;
pub use kdf::*;
pub use permute::*;
pub use substitute::*;
