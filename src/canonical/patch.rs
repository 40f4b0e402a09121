//! Canonical patch building

use crate::canonical::paid_by::derive_paid_by;
use crate::canonical::paid_to::derive_paid_to;
use crate::types::*;

/// Resolve both parties of a transaction.
///
/// The paid-by label only exists alongside a paid-by winner.
pub fn compute_canonical_parties(params: &CanonicalPatchParams) -> CanonicalParties {
    let paid_by = derive_paid_by(&params.paid_by_candidates, params.label_context.as_ref());
    let paid_by = paid_by.canonical.map(|canonical| PaidByResolution {
        canonical,
        paid_by_label: paid_by.label,
    });

    CanonicalParties {
        paid_by,
        paid_to: derive_paid_to(&params.paid_to_candidates),
    }
}

impl From<CanonicalParties> for CanonicalTransactionPatch {
    fn from(parties: CanonicalParties) -> Self {
        let (paid_by, paid_by_label) = match parties.paid_by {
            Some(resolution) => (resolution.canonical, resolution.paid_by_label),
            None => (PaidByCanonical::default(), None),
        };
        let paid_to = parties.paid_to.unwrap_or_default();

        Self {
            paid_by_accounting_entity_id: paid_by.paid_by_accounting_entity_id,
            paid_by_accounting_entity_type: paid_by.paid_by_accounting_entity_type,
            paid_by_accounting_entity_href: paid_by.paid_by_accounting_entity_href,
            paid_by_accounting_unit_id: paid_by.paid_by_accounting_unit_id,
            paid_by_accounting_unit_href: paid_by.paid_by_accounting_unit_href,
            paid_by_label,
            paid_to_buildium_id: paid_to.paid_to_buildium_id,
            paid_to_type: paid_to.paid_to_type,
            paid_to_name: paid_to.paid_to_name,
            paid_to_href: paid_to.paid_to_href,
            paid_to_vendor_id: paid_to.paid_to_vendor_id,
            paid_to_tenant_id: paid_to.paid_to_tenant_id,
        }
    }
}

/// Build the flat update payload for one transaction row
pub fn build_canonical_transaction_patch(params: &CanonicalPatchParams) -> CanonicalTransactionPatch {
    let patch = CanonicalTransactionPatch::from(compute_canonical_parties(params));
    tracing::debug!(
        paid_by_candidates = params.paid_by_candidates.len(),
        paid_to_candidates = params.paid_to_candidates.len(),
        paid_by_resolved = patch.paid_by_accounting_entity_id.is_some()
            || patch.paid_by_accounting_entity_type.is_some(),
        paid_to_resolved = patch.paid_to_buildium_id.is_some() || patch.paid_to_name.is_some(),
        "built canonical transaction patch"
    );
    patch
}
