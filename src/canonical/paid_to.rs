//! Paid-to derivation

use crate::canonical::selection::pick_top_candidate;
use crate::types::*;

/// Select the canonical recipient, if any
pub fn derive_paid_to(candidates: &[PaidToCandidate]) -> Option<PaidToCanonical> {
    pick_top_candidate(candidates).map(PaidToCanonical::from)
}
