//! Financial statement data types.
//!
//! All derived, recomputed on demand, never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One side of the balance sheet, split current vs non-current.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    /// Current portion.
    pub current: Decimal,
    /// Non-current portion.
    pub non_current: Decimal,
    /// Section total.
    pub total: Decimal,
}

/// Balance sheet summary.
///
/// Equity is the retained-earnings proxy (net income); no separate equity
/// accounts are modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Assets section.
    pub assets: BalanceSheetSection,
    /// Liabilities section.
    pub liabilities: BalanceSheetSection,
    /// Equity (= net income).
    pub equity: Decimal,
}

/// Profit and loss summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitLoss {
    /// Total revenue (sum of income account credits).
    pub revenue: Decimal,
    /// Total expenses (sum of expense account debits).
    pub expenses: Decimal,
    /// Revenue minus expenses.
    pub net_income: Decimal,
}

/// Simplified cash flow summary.
///
/// The data model carries no investing/financing categorization, so those
/// sections are always zero and operating carries the whole net change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Operating activities (= net income).
    pub operating: Decimal,
    /// Investing activities (always zero).
    pub investing: Decimal,
    /// Financing activities (always zero).
    pub financing: Decimal,
    /// Net change in cash.
    pub net_change: Decimal,
}

/// Full financial report derived from ledger account totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    /// Balance sheet summary.
    pub balance_sheet: BalanceSheet,
    /// Profit and loss summary.
    pub profit_loss: ProfitLoss,
    /// Cash flow summary.
    pub cash_flow: CashFlow,
}
