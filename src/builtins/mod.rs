//! Built-in objects installed into every realm

pub mod symbol;

pub use symbol::*;
