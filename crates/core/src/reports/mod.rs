//! Financial report generation and rendering.
//!
//! This module provides pure business logic for the summary statements:
//! - Balance Sheet
//! - Profit & Loss
//! - Cash Flow
//! - HTML/CSV rendering of the above plus the trial balance

pub mod export;
pub mod statements;
pub mod types;


pub use export::{ExportFormat, ReportFormatter, ReportSource};
pub use statements::StatementBuilder;
pub use types::{BalanceSheet, BalanceSheetSection, CashFlow, FinancialReport, ProfitLoss};
