pub mod info;
pub mod pack;
pub mod unpack;

pub use info::*;
pub use pack::*;
pub use unpack::*;
