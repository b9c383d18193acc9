//! Ledger error types for the data-entry boundary.
//!
//! The account book itself is infallible: it assumes the numeric invariants
//! (`amount > 0`, `value > 0`) already hold. These errors are raised by
//! [`validate_snapshot`](super::validation::validate_snapshot) before the
//! inputs ever reach the computation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while validating a finance snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Transaction amount must be positive.
    #[error("Transaction {id} has non-positive amount {amount}")]
    NonPositiveAmount {
        /// The offending transaction id.
        id: String,
        /// The amount that was supplied.
        amount: Decimal,
    },

    /// Asset/liability value must be positive.
    #[error("Record {id} has non-positive value {value}")]
    NonPositiveValue {
        /// The offending record id.
        id: String,
        /// The value that was supplied.
        value: Decimal,
    },

    /// Transaction account name must not be blank.
    #[error("Transaction {0} has a blank account name")]
    BlankAccountName(String),

    /// Asset/liability name must not be blank.
    #[error("Record {0} has a blank name")]
    BlankRecordName(String),

    /// Transaction ids must be unique within a snapshot.
    #[error("Duplicate transaction id: {0}")]
    DuplicateTransactionId(String),

    /// Asset/liability ids must be unique within a snapshot.
    #[error("Duplicate asset/liability id: {0}")]
    DuplicateRecordId(String),
}
