//! Property-based tests for canonical selection
//!
//! Selection must not depend on the order candidates arrive in.

use proptest::prelude::*;
use transaction_canonical::*;

// ============================================================================
// Strategies
// ============================================================================

fn amount() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
        (0i64..5_000i64).prop_map(|cents| Some(cents as f64 / 100.0)),
        // Few distinct values so ties actually happen
        prop::sample::select(vec![0.0, 50.0, 100.0, 200.0]).prop_map(Some),
    ]
}

fn paid_by_candidate() -> impl Strategy<Value = PaidByCandidate> {
    (
        prop::option::of(prop::sample::select(vec!["Rental", "Owner", "Company", "Association"])),
        prop::option::of(0i64..20),
        prop::option::of(0i64..20),
        amount(),
    )
        .prop_map(|(entity_type, entity_id, unit_id, amount)| PaidByCandidate {
            accounting_entity_id: entity_id,
            accounting_entity_type: entity_type.map(str::to_string),
            accounting_entity_href: None,
            accounting_unit_id: unit_id,
            accounting_unit_href: None,
            amount,
        })
}

fn paid_to_candidate() -> impl Strategy<Value = PaidToCandidate> {
    (
        prop::option::of(prop::sample::select(vec!["Vendor", "Tenant", "Owner"])),
        prop::option::of(1i64..50),
        "[a-z]{0,6}",
        amount(),
    )
        .prop_map(|(kind, buildium_id, name, amount)| PaidToCandidate {
            buildium_id,
            r#type: kind.map(str::to_string),
            name: Some(name),
            amount,
            ..PaidToCandidate::default()
        })
}

/// Keep the first candidate per stable id so every winner is unique
fn dedupe_by_stable_id<T: Candidate + Clone>(candidates: Vec<T>) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(stable_id_of(c)))
        .collect()
}

// ============================================================================
// Determinism
// ============================================================================

proptest! {
    /// Property: the winner's rank is the same for every permutation
    #[test]
    fn paid_by_winner_rank_is_order_independent(
        (candidates, shuffled) in prop::collection::vec(paid_by_candidate(), 1..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = pick_top_candidate(&candidates).map(rank_of);
        let b = pick_top_candidate(&shuffled).map(rank_of);
        prop_assert_eq!(a, b);
    }

    /// Property: with unique identities the whole canonical record is invariant
    #[test]
    fn paid_by_canonical_is_order_independent(
        (candidates, shuffled) in prop::collection::vec(paid_by_candidate(), 1..12)
            .prop_map(dedupe_by_stable_id)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let context = LabelContext::new("Oak St", Some("2B".to_string()));
        let a = derive_paid_by(&candidates, Some(&context));
        let b = derive_paid_by(&shuffled, Some(&context));
        prop_assert_eq!(a, b);
    }

    /// Property: paid-to selection is order independent too
    #[test]
    fn paid_to_canonical_is_order_independent(
        (candidates, shuffled) in prop::collection::vec(paid_to_candidate(), 1..12)
            .prop_map(dedupe_by_stable_id)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(derive_paid_to(&candidates), derive_paid_to(&shuffled));
    }

    /// Property: repeated calls on the same input agree
    #[test]
    fn repeated_patch_builds_agree(
        paid_by in prop::collection::vec(paid_by_candidate(), 0..8),
        paid_to in prop::collection::vec(paid_to_candidate(), 0..8),
    ) {
        let params = CanonicalPatchParams {
            paid_by_candidates: paid_by,
            paid_to_candidates: paid_to,
            label_context: None,
        };
        prop_assert_eq!(
            build_canonical_transaction_patch(&params),
            build_canonical_transaction_patch(&params)
        );
    }
}

// ============================================================================
// Selection invariants
// ============================================================================

proptest! {
    /// Property: no candidate outranks the winner
    #[test]
    fn winner_dominates_every_candidate(
        candidates in prop::collection::vec(paid_by_candidate(), 1..12)
    ) {
        let winner = rank_of(pick_top_candidate(&candidates).unwrap());
        for candidate in &candidates {
            let rank = rank_of(candidate);
            prop_assert!(winner.amount >= rank.amount);
            if winner.amount == rank.amount {
                prop_assert!(winner.stable_id <= rank.stable_id);
            }
        }
    }

    /// Property: normalized amounts are always finite
    #[test]
    fn ranked_amounts_are_finite(candidate in paid_by_candidate()) {
        prop_assert!(rank_of(&candidate).amount.is_finite());
    }

    /// Property: every column is present in the serialized patch
    #[test]
    fn patch_always_carries_every_column(
        paid_by in prop::collection::vec(paid_by_candidate(), 0..4),
        paid_to in prop::collection::vec(paid_to_candidate(), 0..4),
        property in prop::option::of("[A-Za-z ]{0,10}"),
    ) {
        let params = CanonicalPatchParams {
            paid_by_candidates: paid_by,
            paid_to_candidates: paid_to,
            label_context: property.map(|name| LabelContext::new(name, None)),
        };
        let json = build_canonical_transaction_patch(&params).to_json().unwrap();
        let object = json.as_object().unwrap();
        prop_assert_eq!(object.len(), CanonicalTransactionPatch::COLUMNS.len());
        for column in CanonicalTransactionPatch::COLUMNS {
            prop_assert!(object.contains_key(column));
        }
    }
}
