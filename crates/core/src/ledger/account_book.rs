//! General ledger derivation from a finance snapshot.
//!
//! [`AccountBook::build`] folds the current snapshot of transactions and
//! asset/liability records into per-account ledger entries and totals. The
//! ledger is regenerated in full on every call - a pure function of its
//! inputs with no incremental state.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{
    AccountType, AssetLiability, AssetLiabilityKind, LedgerAccount, LedgerEntry, Subtype,
    Transaction, TransactionKind,
};

/// Source record id recorded on synthetic Cash postings.
const SYSTEM_SOURCE: &str = "system";

/// Builds the general ledger.
pub struct AccountBook;

impl AccountBook {
    /// Derives ledger accounts from a snapshot.
    ///
    /// Accounts are keyed by the compound `(account_name, account_type)` pair,
    /// so a name shared between an income and an expense transaction yields
    /// two distinct accounts rather than silently keeping whichever type
    /// appeared first. Asset/liability records post under
    /// `"Assets - {name}"` / `"Liabilities - {name}"` and carry their subtype
    /// onto the account.
    ///
    /// A synthetic `"Cash"` asset account mirrors the net effect of all
    /// postings as two aggregate entries: one debit for income plus assets,
    /// one credit for expenses plus liabilities. Lumping every transaction
    /// into these two postings is coarser than true double-entry granularity,
    /// so the derived book can legitimately fail to balance; each synthetic
    /// entry is still single-sided.
    ///
    /// The result is sorted ascending by account name (case-sensitive, account
    /// type prefix as tie-break), with ids and chart-of-accounts codes
    /// assigned after the sort. Empty inputs produce an empty ledger - no Cash
    /// account exists when there are no cash deltas.
    #[must_use]
    pub fn build(
        transactions: &[Transaction],
        assets_liabilities: &[AssetLiability],
    ) -> Vec<LedgerAccount> {
        let mut accounts: Vec<LedgerAccount> = Vec::new();
        let mut entry_seq = 0u32;

        for txn in transactions {
            let (account_type, debit, credit) = match txn.kind {
                TransactionKind::Income => (AccountType::Income, Decimal::ZERO, txn.amount),
                TransactionKind::Expense => (AccountType::Expense, txn.amount, Decimal::ZERO),
            };
            let reference = txn
                .reference
                .clone()
                .unwrap_or_else(|| format!("TXN-{}", id_tail(&txn.id)));

            let idx = resolve_account(&mut accounts, &txn.account, account_type, None);
            entry_seq += 1;
            accounts[idx].entries.push(LedgerEntry {
                id: entry_id(entry_seq),
                account_name: txn.account.clone(),
                date: txn.date,
                description: txn.description.clone(),
                reference,
                debit,
                credit,
                transaction_id: txn.id.clone(),
            });
        }

        for record in assets_liabilities {
            let (account_type, name, debit, credit) = match record.kind {
                AssetLiabilityKind::Asset => (
                    AccountType::Asset,
                    format!("Assets - {}", record.name),
                    record.value,
                    Decimal::ZERO,
                ),
                AssetLiabilityKind::Liability => (
                    AccountType::Liability,
                    format!("Liabilities - {}", record.name),
                    Decimal::ZERO,
                    record.value,
                ),
            };

            let idx = resolve_account(&mut accounts, &name, account_type, Some(record.subtype));
            entry_seq += 1;
            accounts[idx].entries.push(LedgerEntry {
                id: entry_id(entry_seq),
                account_name: name,
                date: record.date,
                description: record.name.clone(),
                reference: format!("AST-{}", id_tail(&record.id)),
                debit,
                credit,
                transaction_id: record.id.clone(),
            });
        }

        Self::post_cash_summary(
            &mut accounts,
            &mut entry_seq,
            transactions,
            assets_liabilities,
        );

        for account in &mut accounts {
            account.debit_total = account.entries.iter().map(|e| e.debit).sum();
            account.credit_total = account.entries.iter().map(|e| e.credit).sum();
        }

        accounts.sort_by(|a, b| {
            a.account_name
                .cmp(&b.account_name)
                .then_with(|| a.account_type.code_prefix().cmp(&b.account_type.code_prefix()))
        });
        assign_codes(&mut accounts);

        accounts
    }

    /// Appends the synthetic Cash postings mirroring the snapshot's net cash
    /// effect.
    fn post_cash_summary(
        accounts: &mut Vec<LedgerAccount>,
        entry_seq: &mut u32,
        transactions: &[Transaction],
        assets_liabilities: &[AssetLiability],
    ) {
        let sum_transactions = |kind: TransactionKind| -> Decimal {
            transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };
        let sum_records = |kind: AssetLiabilityKind| -> Decimal {
            assets_liabilities
                .iter()
                .filter(|r| r.kind == kind)
                .map(|r| r.value)
                .sum()
        };

        let cash_in = sum_transactions(TransactionKind::Income)
            + sum_records(AssetLiabilityKind::Asset);
        let cash_out = sum_transactions(TransactionKind::Expense)
            + sum_records(AssetLiabilityKind::Liability);
        if cash_in <= Decimal::ZERO && cash_out <= Decimal::ZERO {
            return;
        }

        // Latest date anywhere in the snapshot; present because at least one
        // record exists when either sum is positive.
        let cash_date = transactions
            .iter()
            .map(|t| t.date)
            .chain(assets_liabilities.iter().map(|r| r.date))
            .max()
            .unwrap_or_default();

        let idx = resolve_account(accounts, "Cash", AccountType::Asset, Some(Subtype::Current));
        if cash_in > Decimal::ZERO {
            *entry_seq += 1;
            accounts[idx].entries.push(cash_entry(
                entry_id(*entry_seq),
                cash_date,
                "Cash from Income and Assets",
                "CASH-INC",
                cash_in,
                Decimal::ZERO,
            ));
        }
        if cash_out > Decimal::ZERO {
            *entry_seq += 1;
            accounts[idx].entries.push(cash_entry(
                entry_id(*entry_seq),
                cash_date,
                "Cash for Expenses and Liabilities",
                "CASH-EXP",
                Decimal::ZERO,
                cash_out,
            ));
        }
    }
}

/// Finds or creates the account for a `(name, type)` pair, returning its index.
///
/// A subtype supplied for an existing account only fills an unset field; the
/// first classification seen for an account wins.
fn resolve_account(
    accounts: &mut Vec<LedgerAccount>,
    name: &str,
    account_type: AccountType,
    subtype: Option<Subtype>,
) -> usize {
    if let Some(idx) = accounts
        .iter()
        .position(|a| a.account_name == name && a.account_type == account_type)
    {
        if accounts[idx].subtype.is_none() {
            accounts[idx].subtype = subtype;
        }
        return idx;
    }

    accounts.push(LedgerAccount {
        id: String::new(),
        account_code: String::new(),
        account_name: name.to_string(),
        account_type,
        subtype,
        debit_total: Decimal::ZERO,
        credit_total: Decimal::ZERO,
        entries: Vec::new(),
    });
    accounts.len() - 1
}

fn cash_entry(
    id: String,
    date: NaiveDate,
    description: &str,
    reference: &str,
    debit: Decimal,
    credit: Decimal,
) -> LedgerEntry {
    LedgerEntry {
        id,
        account_name: "Cash".to_string(),
        date,
        description: description.to_string(),
        reference: reference.to_string(),
        debit,
        credit,
        transaction_id: SYSTEM_SOURCE.to_string(),
    }
}

fn entry_id(seq: u32) -> String {
    format!("JE-{seq:04}")
}

/// Last six characters of an upstream id, used for defaulted references.
fn id_tail(id: &str) -> &str {
    let start = id.char_indices().rev().nth(5).map_or(0, |(i, _)| i);
    &id[start..]
}

/// Assigns account ids and chart-of-accounts codes in sorted order: one
/// numeric prefix per account type plus a three-digit sequence within it.
fn assign_codes(accounts: &mut [LedgerAccount]) {
    let mut counters = [0u32; 5];
    for (i, account) in accounts.iter_mut().enumerate() {
        let prefix = account.account_type.code_prefix();
        let counter = &mut counters[(prefix - 1) as usize];
        *counter += 1;
        account.account_code = format!("{prefix}{counter:03}");
        account.id = format!("ACC-{:03}", i + 1);
    }
}
