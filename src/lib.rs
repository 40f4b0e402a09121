//! # Transaction Canonical
//!
//! Deterministic resolution of the canonical "paid by" and "paid to" parties
//! of imported property-management transactions.
//!
//! ## Features
//!
//! - **Candidate selection**: highest amount wins, ties go to the smallest stable identity
//! - **Paid-by / paid-to derivation**: one canonical record per list, plus a display label
//! - **Canonical patch**: a partial-column update that always names every column
//! - **Buildium payloads**: candidate extraction from bank-transaction detail documents
//! - **Label resolution**: property and unit lookup through a pluggable directory
//!
//! ## Quick Start
//!
//! ```rust
//! use transaction_canonical::{
//!     build_canonical_transaction_patch, CanonicalPatchParams, LabelContext, PaidByCandidate,
//! };
//!
//! let params = CanonicalPatchParams {
//!     paid_by_candidates: vec![
//!         PaidByCandidate::entity("Rental", 5, Some(200.0)),
//!         PaidByCandidate::entity("Owner", 9, Some(200.0)),
//!     ],
//!     label_context: Some(LabelContext::new("Oak St", Some("2B".to_string()))),
//!     ..CanonicalPatchParams::default()
//! };
//!
//! let patch = build_canonical_transaction_patch(&params);
//! assert_eq!(patch.paid_by_accounting_entity_type.as_deref(), Some("Owner"));
//! assert_eq!(patch.paid_by_label.as_deref(), Some("Oak St | 2B"));
//! assert_eq!(patch.paid_to_name, None);
//! ```

pub mod buildium;
pub mod canonical;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use buildium::*;
pub use canonical::*;
pub use traits::*;
pub use types::*;
