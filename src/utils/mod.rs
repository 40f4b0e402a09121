//! Utility modules

pub mod memory_directory;
pub mod normalize;

pub use memory_directory::*;
pub use normalize::*;
