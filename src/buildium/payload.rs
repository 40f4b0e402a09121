//! Buildium bank-transaction detail payload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::CanonicalResult;
use crate::utils::normalize::{lenient_amount, lenient_date};

/// `GET /bankaccounts/{bankAccountId}/transactions/{transactionId}` response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BankTransactionDetail {
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    pub transaction_type: Option<String>,
    pub transaction_type_enum: Option<String>,
    #[serde(deserialize_with = "lenient_amount")]
    pub total_amount: Option<f64>,
    pub memo: Option<String>,
    pub check_number: Option<String>,
    pub payment_detail: Option<PaymentDetail>,
    pub deposit_details: Option<DepositDetails>,
    pub paid_by: Option<Vec<PaidByEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaymentDetail {
    pub payee: Option<Payee>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Payee {
    pub id: Option<i64>,
    #[serde(rename = "Type")]
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DepositDetails {
    #[serde(rename = "BankGLAccountId")]
    pub bank_gl_account_id: Option<i64>,
    pub payment_transactions: Option<Vec<PaymentTransaction>>,
}

/// One payment folded into a deposit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaymentTransaction {
    pub id: Option<i64>,
    pub accounting_entity: Option<AccountingEntity>,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,
}

/// Entry of the top-level `PaidBy` array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaidByEntry {
    pub accounting_entity: Option<AccountingEntity>,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountingEntity {
    pub id: Option<i64>,
    pub accounting_entity_type: Option<String>,
    pub href: Option<String>,
    pub unit: Option<UnitRef>,
    /// Flat unit id some payloads carry instead of `Unit`
    pub unit_id: Option<i64>,
}

impl AccountingEntity {
    /// Unit id from `Unit.Id`/`Unit.ID`, falling back to the flat `UnitId`
    pub fn resolved_unit_id(&self) -> Option<i64> {
        self.unit
            .as_ref()
            .and_then(|unit| unit.id.or(unit.id_upper))
            .or(self.unit_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UnitRef {
    pub id: Option<i64>,
    /// Upper-case `ID` spelling, consulted when `Id` is null or missing
    #[serde(rename = "ID")]
    pub id_upper: Option<i64>,
    pub href: Option<String>,
}

/// Parse a bank-transaction detail document
pub fn parse_bank_transaction_detail(json: &str) -> CanonicalResult<BankTransactionDetail> {
    let detail: BankTransactionDetail = serde_json::from_str(json)?;
    tracing::trace!(transaction_id = ?detail.id, "parsed bank transaction detail");
    Ok(detail)
}
