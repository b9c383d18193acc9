//! Ledger domain types.
//!
//! Input records mirror the shapes handed over by the finance data-access
//! layer (camelCase on the wire); derived entities use this crate's own
//! conventions. Input records are owned by the upstream system and only read
//! here - the account book never mutates them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction classification: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Income transaction (posted as a credit to its account).
    Income,
    /// Expense transaction (posted as a debit to its account).
    Expense,
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Transaction has settled.
    Completed,
    /// Transaction is awaiting settlement.
    Pending,
    /// Transaction failed to settle.
    Failed,
}

/// A financial transaction entered through the dashboard.
///
/// Immutable once created; edits and deletes happen upstream, after which a
/// fresh snapshot is handed to the account book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Upstream record id (opaque).
    pub id: String,
    /// Transaction date.
    pub date: NaiveDate,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Reporting category (e.g. "Sales", "Payroll").
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Transaction amount; always positive, the kind carries the direction.
    pub amount: Decimal,
    /// Free-text account name the transaction posts to.
    pub account: String,
    /// Optional document reference (invoice number, PO number).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Settlement status.
    pub status: TransactionStatus,
}

/// Asset or liability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetLiabilityKind {
    /// Asset record (posted as a debit).
    Asset,
    /// Liability record (posted as a credit).
    Liability,
}

/// Current vs non-current classification, carried from data entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subtype {
    /// Expected to convert or fall due within one year.
    Current,
    /// Longer-lived than one year.
    NonCurrent,
}

/// Whether a record is still on the books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Record is active.
    Active,
    /// Record has been retired.
    Inactive,
}

/// An asset or liability record entered through the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLiability {
    /// Upstream record id (opaque).
    pub id: String,
    /// Asset or liability.
    #[serde(rename = "type")]
    pub kind: AssetLiabilityKind,
    /// Current vs non-current.
    pub subtype: Subtype,
    /// Display name (e.g. "Truck", "Bank Loan").
    pub name: String,
    /// Recorded value; always positive.
    pub value: Decimal,
    /// Recording date.
    pub date: NaiveDate,
    /// Whether the record is still on the books.
    pub status: RecordStatus,
}

/// Ledger account types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (debit-normal).
    Asset,
    /// Liability account (credit-normal).
    Liability,
    /// Equity account (credit-normal).
    Equity,
    /// Income account (credit-normal).
    Income,
    /// Expense account (debit-normal).
    Expense,
}

/// The side that increases a given account type's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalBalance {
    /// Debit-normal (assets, expenses).
    Debit,
    /// Credit-normal (liabilities, equity, income).
    Credit,
}

impl AccountType {
    /// Returns which side is the normal balance for this account type.
    #[must_use]
    pub fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Income => NormalBalance::Credit,
        }
    }

    /// Numeric chart-of-accounts prefix, also the tie-break sort order for
    /// accounts sharing a name.
    #[must_use]
    pub fn code_prefix(self) -> u32 {
        match self {
            Self::Asset => 1,
            Self::Liability => 2,
            Self::Equity => 3,
            Self::Income => 4,
            Self::Expense => 5,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asset => write!(f, "asset"),
            Self::Liability => write!(f, "liability"),
            Self::Equity => write!(f, "equity"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single posting in the general ledger.
///
/// Derived, never persisted; regenerated in full on every account book build.
/// Exactly one of `debit`/`credit` is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Deterministic entry id, assigned in posting order.
    pub id: String,
    /// Name of the account this entry posts to.
    pub account_name: String,
    /// Posting date.
    pub date: NaiveDate,
    /// Description carried from the source record.
    pub description: String,
    /// Document reference.
    pub reference: String,
    /// Debit amount (zero for credit entries).
    pub debit: Decimal,
    /// Credit amount (zero for debit entries).
    pub credit: Decimal,
    /// Id of the source record, or `"system"` for synthetic Cash postings.
    pub transaction_id: String,
}

/// A named bucket accumulating debit and credit postings.
///
/// One account exists per distinct `(account_name, account_type)` pair seen in
/// the inputs, plus the synthetic `"Cash"` asset account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerAccount {
    /// Deterministic account id, assigned after the final sort.
    pub id: String,
    /// Chart-of-accounts code (type prefix plus sequence, e.g. "1001").
    pub account_code: String,
    /// Display name.
    pub account_name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Current vs non-current, carried from the source record where one
    /// exists. The synthetic Cash account is always `Current`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<Subtype>,
    /// Sum of all entry debits.
    pub debit_total: Decimal,
    /// Sum of all entry credits.
    pub credit_total: Decimal,
    /// Postings in the order they were made.
    pub entries: Vec<LedgerEntry>,
}

impl LedgerAccount {
    /// Net balance signed by the account's normal side: positive when the
    /// account carries its normal balance.
    ///
    /// Debit-normal accounts return `debit_total - credit_total`,
    /// credit-normal accounts return `credit_total - debit_total`. The
    /// statement builder sums this figure, which keeps section totals in
    /// agreement with the trial balance columns for the same accounts.
    #[must_use]
    pub fn signed_balance(&self) -> Decimal {
        match self.account_type.normal_balance() {
            NormalBalance::Debit => self.debit_total - self.credit_total,
            NormalBalance::Credit => self.credit_total - self.debit_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(AccountType::Asset, NormalBalance::Debit)]
    #[case(AccountType::Expense, NormalBalance::Debit)]
    #[case(AccountType::Liability, NormalBalance::Credit)]
    #[case(AccountType::Equity, NormalBalance::Credit)]
    #[case(AccountType::Income, NormalBalance::Credit)]
    fn test_normal_balance(#[case] account_type: AccountType, #[case] expected: NormalBalance) {
        assert_eq!(account_type.normal_balance(), expected);
    }

    #[test]
    fn test_code_prefixes_are_distinct() {
        let prefixes = [
            AccountType::Asset.code_prefix(),
            AccountType::Liability.code_prefix(),
            AccountType::Equity.code_prefix(),
            AccountType::Income.code_prefix(),
            AccountType::Expense.code_prefix(),
        ];
        let mut sorted = prefixes;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
    }

    fn make_account(account_type: AccountType, debit: Decimal, credit: Decimal) -> LedgerAccount {
        LedgerAccount {
            id: "ACC-001".to_string(),
            account_code: "1001".to_string(),
            account_name: "Test".to_string(),
            account_type,
            subtype: None,
            debit_total: debit,
            credit_total: credit,
            entries: vec![],
        }
    }

    #[test]
    fn test_signed_balance_debit_normal() {
        let account = make_account(AccountType::Asset, dec!(500), dec!(200));
        assert_eq!(account.signed_balance(), dec!(300));
    }

    #[test]
    fn test_signed_balance_credit_normal() {
        let account = make_account(AccountType::Income, dec!(200), dec!(500));
        assert_eq!(account.signed_balance(), dec!(300));
    }

    #[test]
    fn test_signed_balance_negative_when_abnormal() {
        let account = make_account(AccountType::Liability, dec!(500), dec!(200));
        assert_eq!(account.signed_balance(), dec!(-300));
    }

    #[test]
    fn test_transaction_wire_format() {
        let json = r#"{
            "id": "t1",
            "date": "2024-01-01",
            "type": "income",
            "category": "Sales",
            "description": "Sale 1",
            "amount": "1000",
            "account": "Sales",
            "status": "completed"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(txn.amount, dec!(1000));
        assert_eq!(txn.reference, None);
    }

    #[test]
    fn test_asset_liability_wire_format() {
        let json = r#"{
            "id": "a1",
            "type": "asset",
            "subtype": "non-current",
            "name": "Truck",
            "value": "5000",
            "date": "2024-01-01",
            "status": "active"
        }"#;
        let record: AssetLiability = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, AssetLiabilityKind::Asset);
        assert_eq!(record.subtype, Subtype::NonCurrent);
        assert_eq!(record.value, dec!(5000));
    }
}
