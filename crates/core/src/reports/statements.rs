//! Financial statement generation.

use rust_decimal::Decimal;

use crate::ledger::types::{AccountType, LedgerAccount, Subtype};

use super::types::{BalanceSheet, BalanceSheetSection, CashFlow, FinancialReport, ProfitLoss};

/// Builds summary financial statements from ledger accounts.
pub struct StatementBuilder;

impl StatementBuilder {
    /// Aggregates ledger accounts into the balance sheet, profit and loss,
    /// and cash flow summaries.
    ///
    /// Balance sheet sections sum each account's signed normal balance
    /// ([`LedgerAccount::signed_balance`]), which keeps section totals in
    /// agreement with the trial balance columns for the same accounts.
    /// Current vs non-current comes from the explicit account subtype; an
    /// asset or liability account without one counts as current (only the
    /// synthetic Cash account can lack a source record, and it is tagged
    /// current at creation).
    ///
    /// An empty ledger produces an all-zero report.
    #[must_use]
    pub fn build(accounts: &[LedgerAccount]) -> FinancialReport {
        let mut assets = BalanceSheetSection::default();
        let mut liabilities = BalanceSheetSection::default();
        let mut revenue = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;

        for account in accounts {
            match account.account_type {
                AccountType::Asset => add_to_section(&mut assets, account),
                AccountType::Liability => add_to_section(&mut liabilities, account),
                AccountType::Income => revenue += account.credit_total,
                AccountType::Expense => expenses += account.debit_total,
                AccountType::Equity => {}
            }
        }

        let net_income = revenue - expenses;

        FinancialReport {
            balance_sheet: BalanceSheet {
                assets,
                liabilities,
                equity: net_income,
            },
            profit_loss: ProfitLoss {
                revenue,
                expenses,
                net_income,
            },
            cash_flow: CashFlow {
                operating: net_income,
                investing: Decimal::ZERO,
                financing: Decimal::ZERO,
                net_change: net_income,
            },
        }
    }
}

fn add_to_section(section: &mut BalanceSheetSection, account: &LedgerAccount) {
    let balance = account.signed_balance();
    match account.subtype.unwrap_or(Subtype::Current) {
        Subtype::Current => section.current += balance,
        Subtype::NonCurrent => section.non_current += balance,
    }
    section.total += balance;
}
