//! Snapshot validation at the data-entry boundary.
//!
//! Enforces the preconditions the account book assumes: positive amounts and
//! values, non-blank names, unique record ids. Runs once per snapshot before
//! any derivation; the computation functions themselves never re-validate.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{AssetLiability, Transaction};

/// Validates a snapshot of transactions and asset/liability records.
///
/// # Errors
///
/// Returns the first violation found: non-positive amount or value, blank
/// account/record name, or a duplicate id within either collection.
pub fn validate_snapshot(
    transactions: &[Transaction],
    assets_liabilities: &[AssetLiability],
) -> Result<(), LedgerError> {
    let mut seen_transaction_ids = HashSet::new();
    for txn in transactions {
        if txn.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount {
                id: txn.id.clone(),
                amount: txn.amount,
            });
        }
        if txn.account.trim().is_empty() {
            return Err(LedgerError::BlankAccountName(txn.id.clone()));
        }
        if !seen_transaction_ids.insert(txn.id.as_str()) {
            return Err(LedgerError::DuplicateTransactionId(txn.id.clone()));
        }
    }

    let mut seen_record_ids = HashSet::new();
    for record in assets_liabilities {
        if record.value <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveValue {
                id: record.id.clone(),
                value: record.value,
            });
        }
        if record.name.trim().is_empty() {
            return Err(LedgerError::BlankRecordName(record.id.clone()));
        }
        if !seen_record_ids.insert(record.id.as_str()) {
            return Err(LedgerError::DuplicateRecordId(record.id.clone()));
        }
    }

    Ok(())
}
