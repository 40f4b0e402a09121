//! Core types and data structures for canonical party resolution

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::normalize::lenient_amount;

/// A proposed "who paid" association for a transaction line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaidByCandidate {
    /// Accounting entity (property, owner, company, ...) the money belongs to
    pub accounting_entity_id: Option<i64>,
    /// Entity discriminator, e.g. "Rental" or "Owner"
    pub accounting_entity_type: Option<String>,
    /// Opaque reference to the entity upstream
    pub accounting_entity_href: Option<String>,
    /// Unit-level scoping within the entity
    pub accounting_unit_id: Option<i64>,
    /// Opaque reference to the unit upstream
    pub accounting_unit_href: Option<String>,
    /// Magnitude of this association's contribution
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,
}

impl PaidByCandidate {
    /// Create a candidate scoped to an accounting entity
    pub fn entity(entity_type: impl Into<String>, entity_id: i64, amount: Option<f64>) -> Self {
        Self {
            accounting_entity_id: Some(entity_id),
            accounting_entity_type: Some(entity_type.into()),
            amount,
            ..Self::default()
        }
    }

    /// Narrow the candidate to a unit
    pub fn with_unit(mut self, unit_id: i64) -> Self {
        self.accounting_unit_id = Some(unit_id);
        self
    }
}

/// A proposed "who received" association for a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaidToCandidate {
    /// Recipient id in Buildium
    pub buildium_id: Option<i64>,
    /// Recipient discriminator, e.g. "Vendor" or "Tenant"
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    /// Display name of the recipient
    pub name: Option<String>,
    /// Opaque reference to the recipient upstream
    pub href: Option<String>,
    /// Local vendor record
    pub vendor_id: Option<Uuid>,
    /// Local tenant record
    pub tenant_id: Option<Uuid>,
    /// Magnitude of this association's contribution
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,
}

impl PaidToCandidate {
    /// Whether the candidate names anybody at all.
    ///
    /// A payee with no external id, no local id and a blank name carries no
    /// information and is dropped before selection.
    pub fn is_identifiable(&self) -> bool {
        self.buildium_id.is_some()
            || self.vendor_id.is_some()
            || self.tenant_id.is_some()
            || self
                .name
                .as_deref()
                .is_some_and(|name| !name.trim().is_empty())
    }
}

/// Selected paid-by record, flattened into a stable output shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidByCanonical {
    pub paid_by_accounting_entity_id: Option<i64>,
    pub paid_by_accounting_entity_type: Option<String>,
    pub paid_by_accounting_entity_href: Option<String>,
    pub paid_by_accounting_unit_id: Option<i64>,
    pub paid_by_accounting_unit_href: Option<String>,
}

impl From<&PaidByCandidate> for PaidByCanonical {
    fn from(candidate: &PaidByCandidate) -> Self {
        Self {
            paid_by_accounting_entity_id: candidate.accounting_entity_id,
            paid_by_accounting_entity_type: candidate.accounting_entity_type.clone(),
            paid_by_accounting_entity_href: candidate.accounting_entity_href.clone(),
            paid_by_accounting_unit_id: candidate.accounting_unit_id,
            paid_by_accounting_unit_href: candidate.accounting_unit_href.clone(),
        }
    }
}

/// Selected paid-to record, flattened into a stable output shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidToCanonical {
    pub paid_to_buildium_id: Option<i64>,
    pub paid_to_type: Option<String>,
    pub paid_to_name: Option<String>,
    pub paid_to_href: Option<String>,
    pub paid_to_vendor_id: Option<Uuid>,
    pub paid_to_tenant_id: Option<Uuid>,
}

impl From<&PaidToCandidate> for PaidToCanonical {
    fn from(candidate: &PaidToCandidate) -> Self {
        Self {
            paid_to_buildium_id: candidate.buildium_id,
            paid_to_type: candidate.r#type.clone(),
            paid_to_name: candidate.name.clone(),
            paid_to_href: candidate.href.clone(),
            paid_to_vendor_id: candidate.vendor_id,
            paid_to_tenant_id: candidate.tenant_id,
        }
    }
}

/// Display context used to label the paid-by party
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelContext {
    pub property_name: Option<String>,
    pub unit_label: Option<String>,
}

impl LabelContext {
    /// Create a label context from a property name and optional unit label
    pub fn new(property_name: impl Into<String>, unit_label: Option<String>) -> Self {
        Self {
            property_name: Some(property_name.into()),
            unit_label,
        }
    }
}

/// Result of paid-by derivation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidByDerivation {
    pub canonical: Option<PaidByCanonical>,
    pub label: Option<String>,
}

/// Paid-by winner together with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidByResolution {
    #[serde(flatten)]
    pub canonical: PaidByCanonical,
    pub paid_by_label: Option<String>,
}

/// Both resolved parties of one transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalParties {
    pub paid_by: Option<PaidByResolution>,
    pub paid_to: Option<PaidToCanonical>,
}

/// Inputs for building the canonical patch of one transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanonicalPatchParams {
    pub paid_by_candidates: Vec<PaidByCandidate>,
    pub paid_to_candidates: Vec<PaidToCandidate>,
    pub label_context: Option<LabelContext>,
}

/// Partial-column update for a persisted transaction row.
///
/// Every column is always serialized, `null` included, so applying the patch
/// clears values left behind by an earlier import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalTransactionPatch {
    pub paid_by_accounting_entity_id: Option<i64>,
    pub paid_by_accounting_entity_type: Option<String>,
    pub paid_by_accounting_entity_href: Option<String>,
    pub paid_by_accounting_unit_id: Option<i64>,
    pub paid_by_accounting_unit_href: Option<String>,
    pub paid_by_label: Option<String>,
    pub paid_to_buildium_id: Option<i64>,
    pub paid_to_type: Option<String>,
    pub paid_to_name: Option<String>,
    pub paid_to_href: Option<String>,
    pub paid_to_vendor_id: Option<Uuid>,
    pub paid_to_tenant_id: Option<Uuid>,
}

impl CanonicalTransactionPatch {
    /// Column names in the order they are serialized
    pub const COLUMNS: [&'static str; 12] = [
        "paid_by_accounting_entity_id",
        "paid_by_accounting_entity_type",
        "paid_by_accounting_entity_href",
        "paid_by_accounting_unit_id",
        "paid_by_accounting_unit_href",
        "paid_by_label",
        "paid_to_buildium_id",
        "paid_to_type",
        "paid_to_name",
        "paid_to_href",
        "paid_to_vendor_id",
        "paid_to_tenant_id",
    ];

    /// Serialize the patch into a JSON object carrying every column
    pub fn to_json(&self) -> CanonicalResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Errors raised around, never inside, canonical selection
#[derive(Debug, thiserror::Error)]
pub enum CanonicalError {
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("Label directory error: {0}")]
    Directory(String),
}

/// Result type for fallible canonical operations
pub type CanonicalResult<T> = Result<T, CanonicalError>;
