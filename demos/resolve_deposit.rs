//! Resolve the canonical parties of a Buildium deposit payload
//!
//! Run with `RUST_LOG=transaction_canonical=debug` to see selection decisions.

use tracing_subscriber::EnvFilter;
use transaction_canonical::{
    derive_patch_from_detail, parse_bank_transaction_detail, utils::MemoryLabelDirectory,
    CanonicalResult,
};

const DETAIL: &str = r#"{
    "Id": 4410,
    "Date": "2024-05-03",
    "TransactionType": "Deposit",
    "TotalAmount": 2400.0,
    "DepositDetails": {
        "BankGLAccountId": 10,
        "PaymentTransactions": [
            {
                "AccountingEntity": {
                    "Id": 5,
                    "AccountingEntityType": "Rental",
                    "Unit": { "Id": 12 }
                },
                "Amount": 1600.0
            },
            {
                "AccountingEntity": {
                    "Id": 5,
                    "AccountingEntityType": "Rental",
                    "Unit": { "Id": 14 }
                },
                "Amount": 800.0
            }
        ]
    }
}"#;

#[tokio::main]
async fn main() -> CanonicalResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🏠 Canonical Party Resolution Demo");
    println!("==================================\n");

    let directory = MemoryLabelDirectory::new();
    directory.insert_property(5, "Oak St")?;
    directory.insert_unit(12, "2B")?;
    directory.insert_unit(14, "3A")?;

    let detail = parse_bank_transaction_detail(DETAIL)?;
    let patch = derive_patch_from_detail(&directory, &detail).await?;

    println!("Paid by label: {:?}", patch.paid_by_label);
    println!("Paid by unit:  {:?}", patch.paid_by_accounting_unit_id);
    println!("\nPatch:");
    println!("{}", serde_json::to_string_pretty(&patch.to_json()?)?);

    Ok(())
}
