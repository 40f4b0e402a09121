//! Candidate extraction from Buildium payloads

use serde::{Deserialize, Serialize};

use crate::buildium::payload::*;
use crate::types::*;

/// Paid-by and paid-to candidates pulled from one payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCandidates {
    pub paid_by: Vec<PaidByCandidate>,
    pub paid_to: Vec<PaidToCandidate>,
}

impl ExtractedCandidates {
    /// Turn the candidates into patch parameters
    pub fn into_params(self, label_context: Option<LabelContext>) -> CanonicalPatchParams {
        CanonicalPatchParams {
            paid_by_candidates: self.paid_by,
            paid_to_candidates: self.paid_to,
            label_context,
        }
    }
}

/// A locally stored transaction line, used when a payload carries no payment splits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionLine {
    pub buildium_property_id: Option<i64>,
    pub buildium_unit_id: Option<i64>,
    pub account_entity_type: Option<String>,
    pub amount: Option<f64>,
}

fn paid_by_from_entity(entity: Option<&AccountingEntity>, amount: Option<f64>) -> PaidByCandidate {
    match entity {
        Some(entity) => PaidByCandidate {
            accounting_entity_id: entity.id,
            accounting_entity_type: entity.accounting_entity_type.clone(),
            accounting_entity_href: entity.href.clone(),
            accounting_unit_id: entity.resolved_unit_id(),
            accounting_unit_href: entity.unit.as_ref().and_then(|unit| unit.href.clone()),
            amount,
        },
        None => PaidByCandidate {
            amount,
            ..PaidByCandidate::default()
        },
    }
}

/// Paid-by candidates of a detail payload.
///
/// Deposit payment splits take precedence; the top-level `PaidBy` array is
/// only consulted when there are none.
pub fn paid_by_candidates(detail: &BankTransactionDetail) -> Vec<PaidByCandidate> {
    let from_payments: Vec<PaidByCandidate> = detail
        .deposit_details
        .as_ref()
        .and_then(|deposit| deposit.payment_transactions.as_ref())
        .map(|payments| {
            payments
                .iter()
                .map(|pt| paid_by_from_entity(pt.accounting_entity.as_ref(), pt.amount))
                .collect()
        })
        .unwrap_or_default();

    if !from_payments.is_empty() {
        return from_payments;
    }

    detail
        .paid_by
        .as_ref()
        .map(|entries| {
            entries
                .iter()
                .map(|pb| paid_by_from_entity(pb.accounting_entity.as_ref(), pb.amount))
                .collect()
        })
        .unwrap_or_default()
}

/// Paid-to candidates of a detail payload: the payee, when it names anyone
pub fn paid_to_candidates(detail: &BankTransactionDetail) -> Vec<PaidToCandidate> {
    let payee = detail
        .payment_detail
        .as_ref()
        .and_then(|payment| payment.payee.as_ref());

    payee
        .map(|payee| PaidToCandidate {
            buildium_id: payee.id,
            r#type: payee.r#type.clone(),
            name: payee.name.clone(),
            href: payee.href.clone(),
            vendor_id: None,
            tenant_id: None,
            amount: detail.total_amount,
        })
        .into_iter()
        .filter(PaidToCandidate::is_identifiable)
        .collect()
}

/// Extract both candidate lists from a detail payload
pub fn extract_candidates(detail: &BankTransactionDetail) -> ExtractedCandidates {
    let extracted = ExtractedCandidates {
        paid_by: paid_by_candidates(detail),
        paid_to: paid_to_candidates(detail),
    };
    tracing::debug!(
        transaction_id = ?detail.id,
        paid_by = extracted.paid_by.len(),
        paid_to = extracted.paid_to.len(),
        "extracted canonical candidates"
    );
    extracted
}

/// Paid-by candidates built from stored transaction lines
pub fn paid_by_from_lines(lines: &[TransactionLine], default_entity_type: &str) -> Vec<PaidByCandidate> {
    lines
        .iter()
        .map(|line| PaidByCandidate {
            accounting_entity_id: line.buildium_property_id,
            accounting_entity_type: Some(
                line.account_entity_type
                    .clone()
                    .unwrap_or_else(|| default_entity_type.to_string()),
            ),
            accounting_entity_href: None,
            accounting_unit_id: line.buildium_unit_id,
            accounting_unit_href: None,
            amount: line.amount,
        })
        .collect()
}
