//! Trial balance derivation.
//!
//! Converts ledger account totals into normal-balance-adjusted debit/credit
//! columns, one row per account carrying a balance. Totals across the columns
//! are NOT balanced by construction: per-account balances are floored at zero
//! and the synthetic Cash account lumps its postings, so the balanced verdict
//! must always be computed from the derived rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{AccountType, LedgerAccount};

/// Absolute difference below which the book counts as balanced.
fn balance_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// One row of the trial balance.
///
/// Exactly one of `debit_balance`/`credit_balance` is non-zero: both are
/// positive parts of the same `debit_total - credit_total` difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceEntry {
    /// Account display name.
    pub account_name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Net debit balance (zero when the account nets to the credit side).
    pub debit_balance: Decimal,
    /// Net credit balance (zero when the account nets to the debit side).
    pub credit_balance: Decimal,
}

/// Column totals and the balanced verdict for a set of trial balance rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Sum of the debit column.
    pub total_debit: Decimal,
    /// Sum of the credit column.
    pub total_credit: Decimal,
    /// Whether the columns agree within the 0.01 tolerance.
    pub is_balanced: bool,
}

impl TrialBalanceTotals {
    /// Sums the columns of derived rows and computes the balanced verdict.
    #[must_use]
    pub fn from_entries(entries: &[TrialBalanceEntry]) -> Self {
        let total_debit: Decimal = entries.iter().map(|e| e.debit_balance).sum();
        let total_credit: Decimal = entries.iter().map(|e| e.credit_balance).sum();
        Self {
            total_debit,
            total_credit,
            is_balanced: (total_debit - total_credit).abs() < balance_tolerance(),
        }
    }

    /// Signed difference between the columns.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debit - self.total_credit
    }
}

/// Derives the trial balance.
pub struct TrialBalance;

impl TrialBalance {
    /// Derives one row per account with a non-zero balance, preserving the
    /// input order (the account book already sorted by name).
    ///
    /// Debit-normal and credit-normal types split the same difference into
    /// its positive and negative parts, so the column assignment is uniform:
    /// `debit_balance = max(0, debit_total - credit_total)` and
    /// `credit_balance = max(0, credit_total - debit_total)`.
    #[must_use]
    pub fn derive(accounts: &[LedgerAccount]) -> Vec<TrialBalanceEntry> {
        accounts
            .iter()
            .filter_map(|account| {
                let difference = account.debit_total - account.credit_total;
                let debit_balance = difference.max(Decimal::ZERO);
                let credit_balance = (-difference).max(Decimal::ZERO);
                if debit_balance.is_zero() && credit_balance.is_zero() {
                    return None;
                }
                Some(TrialBalanceEntry {
                    account_name: account.account_name.clone(),
                    account_type: account.account_type,
                    debit_balance,
                    credit_balance,
                })
            })
            .collect()
    }
}
