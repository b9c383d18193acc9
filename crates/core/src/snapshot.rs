//! The JSON input boundary.
//!
//! A snapshot is the full finance dataset handed over by the data-access
//! layer: every transaction and every asset/liability record, in one
//! document. Parsing and validation happen here, before any ledger
//! computation runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::error::LedgerError;
use crate::ledger::types::{AssetLiability, Transaction};
use crate::ledger::validation::validate_snapshot;

/// A full finance dataset, as serialized by the upstream system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// All transactions, in entry order.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// All asset and liability records, in entry order.
    #[serde(default)]
    pub assets_liabilities: Vec<AssetLiability>,
}

/// Errors raised while loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The document is not valid snapshot JSON.
    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but violates a data-entry invariant.
    #[error(transparent)]
    Invalid(#[from] LedgerError),
}

impl Snapshot {
    /// Parses and validates a snapshot document.
    ///
    /// Rejects malformed JSON and any snapshot that fails the data-entry
    /// checks (positive amounts, non-blank names, unique ids per collection).
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Re-runs the data-entry checks on an already-parsed snapshot.
    pub fn validate(&self) -> Result<(), LedgerError> {
        validate_snapshot(&self.transactions, &self.assets_liabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_document_is_valid() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.assets_liabilities.is_empty());
    }

    #[test]
    fn test_full_document_round_trip() {
        let json = r#"{
            "transactions": [{
                "id": "t1",
                "date": "2024-01-05",
                "type": "expense",
                "category": "Rent",
                "description": "January rent",
                "amount": "1500.00",
                "account": "Rent",
                "reference": "INV-991",
                "status": "completed"
            }],
            "assetsLiabilities": [{
                "id": "a1",
                "type": "asset",
                "subtype": "non-current",
                "name": "Truck",
                "value": "5000",
                "date": "2024-01-01",
                "status": "active"
            }]
        }"#;
        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.transactions[0].amount, dec!(1500.00));
        assert_eq!(snapshot.assets_liabilities.len(), 1);
        assert_eq!(snapshot.assets_liabilities[0].value, dec!(5000));

        let serialized = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(Snapshot::from_json(&serialized).unwrap(), snapshot);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Snapshot::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }

    #[test]
    fn test_invalid_data_is_rejected() {
        let json = r#"{
            "transactions": [{
                "id": "t1",
                "date": "2024-01-05",
                "type": "expense",
                "category": "Rent",
                "description": "January rent",
                "amount": "-5",
                "account": "Rent",
                "status": "completed"
            }]
        }"#;
        let err = Snapshot::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Invalid(LedgerError::NonPositiveAmount { .. })
        ));
    }
}
