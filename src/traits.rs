//! Traits for candidate selection and label lookup

use async_trait::async_trait;

use crate::types::*;

/// Number of fields that make up a candidate's stable identity
pub const IDENTITY_ARITY: usize = 5;

/// A candidate that can take part in canonical selection
///
/// Selection only needs two things from a candidate: the ordered tuple of
/// fields that identify it, and the amount it carries.
pub trait Candidate {
    /// Discriminating fields, in the order they form the stable identity
    fn identity_parts(&self) -> [Option<String>; IDENTITY_ARITY];

    /// Raw amount as supplied upstream
    fn amount(&self) -> Option<f64>;
}

impl Candidate for PaidByCandidate {
    fn identity_parts(&self) -> [Option<String>; IDENTITY_ARITY] {
        [
            self.accounting_entity_type.clone(),
            self.accounting_entity_id.map(|id| id.to_string()),
            self.accounting_unit_id.map(|id| id.to_string()),
            self.accounting_entity_href.clone(),
            self.accounting_unit_href.clone(),
        ]
    }

    fn amount(&self) -> Option<f64> {
        self.amount
    }
}

impl Candidate for PaidToCandidate {
    fn identity_parts(&self) -> [Option<String>; IDENTITY_ARITY] {
        [
            self.r#type.clone(),
            self.buildium_id.map(|id| id.to_string()),
            self.vendor_id.map(|id| id.to_string()),
            self.tenant_id.map(|id| id.to_string()),
            self.href.clone(),
        ]
    }

    fn amount(&self) -> Option<f64> {
        self.amount
    }
}

/// Lookup of display names for Buildium-side identifiers
///
/// Implement this over whatever store maps Buildium property and unit ids to
/// local records (PostgreSQL, an HTTP cache, in-memory, etc.).
#[async_trait]
pub trait LabelDirectory: Send + Sync {
    /// Display name of the property with the given Buildium id
    async fn property_name(&self, buildium_property_id: i64) -> CanonicalResult<Option<String>>;

    /// Unit number/label of the unit with the given Buildium id
    async fn unit_label(&self, buildium_unit_id: i64) -> CanonicalResult<Option<String>>;
}
