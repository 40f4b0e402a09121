//! Paid-by derivation and label composition

use crate::canonical::selection::pick_top_candidate;
use crate::types::*;
use crate::utils::normalize::trimmed;

/// Separator between property name and unit label
pub const LABEL_SEPARATOR: &str = " | ";

/// Compose the paid-by display label from its context.
///
/// The label depends only on the context, never on the winning candidate.
pub fn compose_label(context: Option<&LabelContext>) -> Option<String> {
    let context = context?;
    let property = trimmed(context.property_name.as_deref())?;
    match trimmed(context.unit_label.as_deref()) {
        Some(unit) => Some(format!("{}{}{}", property, LABEL_SEPARATOR, unit)),
        None => Some(property.to_string()),
    }
}

/// Select the canonical payer and derive its label
pub fn derive_paid_by(
    candidates: &[PaidByCandidate],
    label_context: Option<&LabelContext>,
) -> PaidByDerivation {
    match pick_top_candidate(candidates) {
        Some(winner) => PaidByDerivation {
            canonical: Some(PaidByCanonical::from(winner)),
            label: compose_label(label_context),
        },
        None => PaidByDerivation::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(property: &str, unit: Option<&str>) -> LabelContext {
        LabelContext::new(property, unit.map(str::to_string))
    }

    #[test]
    fn test_empty_candidates() {
        let result = derive_paid_by(&[], Some(&context("Oak St", Some("2B"))));
        assert_eq!(result.canonical, None);
        assert_eq!(result.label, None);
    }

    #[test]
    fn test_label_with_unit() {
        let candidates = vec![PaidByCandidate::entity("Rental", 5, Some(100.0))];
        let result = derive_paid_by(&candidates, Some(&context("Oak St", Some("2B"))));
        assert_eq!(result.label.as_deref(), Some("Oak St | 2B"));
    }

    #[test]
    fn test_label_without_unit() {
        let candidates = vec![PaidByCandidate::entity("Rental", 5, Some(100.0))];
        let result = derive_paid_by(&candidates, Some(&context("Oak St", None)));
        assert_eq!(result.label.as_deref(), Some("Oak St"));

        let result = derive_paid_by(&candidates, Some(&context("  Oak St ", Some("   "))));
        assert_eq!(result.label.as_deref(), Some("Oak St"));
    }

    #[test]
    fn test_label_requires_property_name() {
        let candidates = vec![PaidByCandidate::entity("Rental", 5, Some(100.0))];

        let result = derive_paid_by(&candidates, Some(&context("   ", Some("2B"))));
        assert_eq!(result.label, None);
        assert!(result.canonical.is_some());

        let result = derive_paid_by(&candidates, None);
        assert_eq!(result.label, None);
    }

    #[test]
    fn test_canonical_maps_every_field() {
        let candidate = PaidByCandidate {
            accounting_entity_id: Some(5),
            accounting_entity_type: Some("Rental".to_string()),
            accounting_entity_href: Some("https://api/rentals/5".to_string()),
            accounting_unit_id: Some(12),
            accounting_unit_href: Some("https://api/rentals/units/12".to_string()),
            amount: Some(850.0),
        };
        let result = derive_paid_by(std::slice::from_ref(&candidate), None);
        assert_eq!(
            result.canonical,
            Some(PaidByCanonical {
                paid_by_accounting_entity_id: Some(5),
                paid_by_accounting_entity_type: Some("Rental".to_string()),
                paid_by_accounting_entity_href: Some("https://api/rentals/5".to_string()),
                paid_by_accounting_unit_id: Some(12),
                paid_by_accounting_unit_href: Some("https://api/rentals/units/12".to_string()),
            })
        );
    }

    #[test]
    fn test_owner_wins_equal_amount_scenario() {
        let candidates = vec![
            PaidByCandidate::entity("Rental", 5, Some(200.0)),
            PaidByCandidate::entity("Owner", 9, Some(200.0)),
        ];
        let canonical = derive_paid_by(&candidates, None).canonical.unwrap();
        assert_eq!(canonical.paid_by_accounting_entity_type.as_deref(), Some("Owner"));
        assert_eq!(canonical.paid_by_accounting_entity_id, Some(9));
        assert_eq!(canonical.paid_by_accounting_unit_id, None);
    }
}
