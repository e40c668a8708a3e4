mod anchor;
mod core;

pub use self::core::*;
pub use anchor::*;
