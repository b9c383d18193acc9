//! Double-entry account book and trial balance derivation.
//!
//! This module implements the ledger half of the finance core:
//! - Input domain types (transactions, asset/liability records)
//! - Snapshot validation at the data-entry boundary
//! - General ledger derivation (`AccountBook`)
//! - Trial balance derivation with the balanced verdict

pub mod account_book;
pub mod error;
pub mod trial_balance;
pub mod types;
pub mod validation;

#[cfg(test)]
mod book_props;

pub use account_book::AccountBook;
pub use error::LedgerError;
pub use trial_balance::{TrialBalance, TrialBalanceEntry, TrialBalanceTotals};
pub use types::{
    AccountType, AssetLiability, AssetLiabilityKind, LedgerAccount, LedgerEntry, NormalBalance,
    RecordStatus, Subtype, Transaction, TransactionKind, TransactionStatus,
};
pub use validation::validate_snapshot;
