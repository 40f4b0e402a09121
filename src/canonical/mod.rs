//! Canonical paid-by / paid-to resolution

pub mod paid_by;
pub mod paid_to;
pub mod patch;
pub mod selection;

pub use paid_by::*;
pub use paid_to::*;
pub use patch::*;
pub use selection::*;
