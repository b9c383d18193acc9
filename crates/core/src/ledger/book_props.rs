//! Property-based tests for the account book and trial balance.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::account_book::AccountBook;
use super::trial_balance::TrialBalance;
use super::types::{
    AssetLiability, AssetLiabilityKind, RecordStatus, Subtype, Transaction, TransactionKind,
    TransactionStatus,
};

const ACCOUNT_NAMES: [&str; 6] = ["Sales", "Rent", "Payroll", "Utilities", "Export", "Cash"];
const RECORD_NAMES: [&str; 4] = ["Truck", "Dryer", "Loan", "Overdraft"];

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    // Positive amounts with two decimal places, per the input invariant.
    (1i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u32..365).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i64::from(offset))
    })
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (
        any::<bool>(),
        amount_strategy(),
        0..ACCOUNT_NAMES.len(),
        date_strategy(),
        any::<u32>(),
    )
        .prop_map(|(is_income, amount, name_idx, date, seed)| Transaction {
            id: format!("t{seed}"),
            date,
            kind: if is_income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            },
            category: "General".to_string(),
            description: format!("Generated {seed}"),
            amount,
            account: ACCOUNT_NAMES[name_idx].to_string(),
            reference: None,
            status: TransactionStatus::Completed,
        })
}

fn record_strategy() -> impl Strategy<Value = AssetLiability> {
    (
        any::<bool>(),
        any::<bool>(),
        amount_strategy(),
        0..RECORD_NAMES.len(),
        date_strategy(),
        any::<u32>(),
    )
        .prop_map(|(is_asset, is_current, value, name_idx, date, seed)| AssetLiability {
            id: format!("r{seed}"),
            kind: if is_asset {
                AssetLiabilityKind::Asset
            } else {
                AssetLiabilityKind::Liability
            },
            subtype: if is_current {
                Subtype::Current
            } else {
                Subtype::NonCurrent
            },
            name: RECORD_NAMES[name_idx].to_string(),
            value,
            date,
            status: RecordStatus::Active,
        })
}

fn snapshot_strategy() -> impl Strategy<Value = (Vec<Transaction>, Vec<AssetLiability>)> {
    (
        prop::collection::vec(transaction_strategy(), 0..20),
        prop::collection::vec(record_strategy(), 0..10),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rebuilding from the same snapshot returns structurally equal output.
    #[test]
    fn prop_build_is_idempotent(
        (transactions, records) in snapshot_strategy(),
    ) {
        let first = AccountBook::build(&transactions, &records);
        let second = AccountBook::build(&transactions, &records);
        prop_assert_eq!(first, second);
    }

    /// Every entry posts to exactly one side, the synthetic Cash summary
    /// entries included.
    #[test]
    fn prop_entries_are_single_sided(
        (transactions, records) in snapshot_strategy(),
    ) {
        for account in AccountBook::build(&transactions, &records) {
            for entry in &account.entries {
                let debit_side = entry.debit > Decimal::ZERO;
                let credit_side = entry.credit > Decimal::ZERO;
                prop_assert!(
                    debit_side != credit_side,
                    "entry {} on {} has debit {} credit {}",
                    entry.id, account.account_name, entry.debit, entry.credit
                );
            }
        }
    }

    /// Account totals are exact sums over their entries - no tolerance.
    #[test]
    fn prop_account_totals_match_entries(
        (transactions, records) in snapshot_strategy(),
    ) {
        for account in AccountBook::build(&transactions, &records) {
            let debit_sum: Decimal = account.entries.iter().map(|e| e.debit).sum();
            let credit_sum: Decimal = account.entries.iter().map(|e| e.credit).sum();
            prop_assert_eq!(account.debit_total, debit_sum);
            prop_assert_eq!(account.credit_total, credit_sum);
        }
    }

    /// Accounts come back sorted by name, account type prefix as tie-break.
    #[test]
    fn prop_accounts_sorted_by_name(
        (transactions, records) in snapshot_strategy(),
    ) {
        let accounts = AccountBook::build(&transactions, &records);
        for pair in accounts.windows(2) {
            let ordering = pair[0].account_name.cmp(&pair[1].account_name).then_with(|| {
                pair[0]
                    .account_type
                    .code_prefix()
                    .cmp(&pair[1].account_type.code_prefix())
            });
            prop_assert!(ordering.is_lt());
        }
    }

    /// At most one side of every trial balance row is non-zero.
    #[test]
    fn prop_trial_balance_sign_exclusive(
        (transactions, records) in snapshot_strategy(),
    ) {
        let accounts = AccountBook::build(&transactions, &records);
        for entry in TrialBalance::derive(&accounts) {
            prop_assert!(
                entry.debit_balance.is_zero() || entry.credit_balance.is_zero(),
                "{} has both debit {} and credit {}",
                entry.account_name, entry.debit_balance, entry.credit_balance
            );
            prop_assert!(entry.debit_balance >= Decimal::ZERO);
            prop_assert!(entry.credit_balance >= Decimal::ZERO);
        }
    }

    /// No zero-balance row survives derivation.
    #[test]
    fn prop_trial_balance_omits_zero_rows(
        (transactions, records) in snapshot_strategy(),
    ) {
        let accounts = AccountBook::build(&transactions, &records);
        for entry in TrialBalance::derive(&accounts) {
            prop_assert!(
                entry.debit_balance > Decimal::ZERO || entry.credit_balance > Decimal::ZERO
            );
        }
    }

    /// The Cash debit entry carries income plus assets; the credit entry
    /// carries expenses plus liabilities.
    #[test]
    fn prop_cash_summary_mirrors_totals(
        (transactions, records) in snapshot_strategy(),
    ) {
        let total_income: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let total_expenses: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();
        let total_assets: Decimal = records
            .iter()
            .filter(|r| r.kind == AssetLiabilityKind::Asset)
            .map(|r| r.value)
            .sum();
        let total_liabilities: Decimal = records
            .iter()
            .filter(|r| r.kind == AssetLiabilityKind::Liability)
            .map(|r| r.value)
            .sum();

        let accounts = AccountBook::build(&transactions, &records);
        let cash = accounts
            .iter()
            .find(|a| a.account_name == "Cash" && a.account_type == super::types::AccountType::Asset && a.entries.iter().any(|e| e.transaction_id == "system"));

        if transactions.is_empty() && records.is_empty() {
            prop_assert!(cash.is_none());
        } else {
            let cash = cash.expect("non-empty snapshot must have a Cash account");
            let system_debits: Decimal = cash
                .entries
                .iter()
                .filter(|e| e.transaction_id == "system")
                .map(|e| e.debit)
                .sum();
            let system_credits: Decimal = cash
                .entries
                .iter()
                .filter(|e| e.transaction_id == "system")
                .map(|e| e.credit)
                .sum();
            prop_assert_eq!(system_debits, total_income + total_assets);
            prop_assert_eq!(system_credits, total_expenses + total_liabilities);
        }
    }
}
