//! Paid-by label resolution against a [`LabelDirectory`]

use crate::buildium::candidates::extract_candidates;
use crate::buildium::payload::BankTransactionDetail;
use crate::canonical::build_canonical_transaction_patch;
use crate::traits::LabelDirectory;
use crate::types::*;

/// Ids worth looking up for the paid-by label: first property id, first unit id.
///
/// Zero is not a real Buildium id (company-level entities use it), so it is
/// treated like an absent id.
pub fn label_lookup_ids(candidates: &[PaidByCandidate]) -> (Option<i64>, Option<i64>) {
    let property_id = candidates.iter().find_map(|c| c.accounting_entity_id);
    let unit_id = candidates.iter().find_map(|c| c.accounting_unit_id);
    (
        property_id.filter(|id| *id != 0),
        unit_id.filter(|id| *id != 0),
    )
}

/// Look up the property name and unit label for a set of paid-by candidates
pub async fn resolve_label_context<D>(
    directory: &D,
    candidates: &[PaidByCandidate],
) -> CanonicalResult<LabelContext>
where
    D: LabelDirectory + ?Sized,
{
    let (property_id, unit_id) = label_lookup_ids(candidates);

    let property_name = match property_id {
        Some(id) => directory.property_name(id).await?,
        None => None,
    };
    let unit_label = match unit_id {
        Some(id) => directory.unit_label(id).await?,
        None => None,
    };

    tracing::debug!(
        ?property_id,
        ?unit_id,
        property_found = property_name.is_some(),
        unit_found = unit_label.is_some(),
        "resolved paid-by label context"
    );

    Ok(LabelContext {
        property_name,
        unit_label,
    })
}

/// Extract candidates, resolve labels and build the canonical patch for a payload
pub async fn derive_patch_from_detail<D>(
    directory: &D,
    detail: &BankTransactionDetail,
) -> CanonicalResult<CanonicalTransactionPatch>
where
    D: LabelDirectory + ?Sized,
{
    let extracted = extract_candidates(detail);
    let label_context = resolve_label_context(directory, &extracted.paid_by).await?;
    let params = extracted.into_params(Some(label_context));
    Ok(build_canonical_transaction_patch(&params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ids_take_first_present_values() {
        let candidates = vec![
            PaidByCandidate {
                amount: Some(5.0),
                ..PaidByCandidate::default()
            },
            PaidByCandidate::entity("Rental", 5, None),
            PaidByCandidate::entity("Rental", 6, None).with_unit(12),
            PaidByCandidate::entity("Rental", 7, None).with_unit(13),
        ];
        assert_eq!(label_lookup_ids(&candidates), (Some(5), Some(12)));
    }

    #[test]
    fn test_lookup_ids_skip_company_zero() {
        let candidates = vec![PaidByCandidate::entity("Company", 0, Some(10.0))];
        assert_eq!(label_lookup_ids(&candidates), (None, None));
        assert_eq!(label_lookup_ids(&[]), (None, None));
    }
}
