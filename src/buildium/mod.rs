//! Buildium payload handling: candidate extraction and label resolution

pub mod candidates;
pub mod labels;
pub mod payload;

pub use candidates::*;
pub use labels::*;
pub use payload::*;
