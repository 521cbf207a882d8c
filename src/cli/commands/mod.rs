pub mod check;
mod context;
pub mod fix;
pub mod init;

pub use context::*;
