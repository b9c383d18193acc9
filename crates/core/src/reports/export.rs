//! Printable and exportable report rendering.
//!
//! Renders financial reports and trial balances into HTML (for print-to-PDF)
//! or CSV. Rendering is pure text production: the generation timestamp is
//! supplied by the caller and writing files or triggering downloads is the
//! caller's responsibility.

use chrono::{DateTime, Utc};
use copra_shared::{format_grouped, Currency};
use rust_decimal::Decimal;

use crate::ledger::trial_balance::{TrialBalanceEntry, TrialBalanceTotals};

use super::types::FinancialReport;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Self-contained HTML document.
    Html,
    /// Comma-separated values.
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// The report being rendered, borrowing its underlying data.
#[derive(Debug, Clone, Copy)]
pub enum ReportSource<'a> {
    /// Balance sheet section of a financial report.
    BalanceSheet(&'a FinancialReport),
    /// Profit and loss section of a financial report.
    ProfitLoss(&'a FinancialReport),
    /// Cash flow section of a financial report.
    CashFlow(&'a FinancialReport),
    /// Trial balance rows.
    TrialBalance(&'a [TrialBalanceEntry]),
}

impl ReportSource<'_> {
    /// Document title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::BalanceSheet(_) => "Balance Sheet",
            Self::ProfitLoss(_) => "Profit & Loss",
            Self::CashFlow(_) => "Cash Flow",
            Self::TrialBalance(_) => "Trial Balance",
        }
    }
}

/// Renders reports into deterministic textual documents.
pub struct ReportFormatter {
    currency: Currency,
}

impl ReportFormatter {
    /// Creates a formatter labelling HTML amounts with the given currency.
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Renders a report document.
    ///
    /// Every numeric value in the output matches the source report field for
    /// field. CSV amounts are grouped and quoted with no currency label; HTML
    /// amounts carry the currency code. The trial balance additionally gets a
    /// verdict line computed with the 0.01 balance tolerance.
    #[must_use]
    pub fn render(
        &self,
        source: ReportSource<'_>,
        generated_at: DateTime<Utc>,
        format: ExportFormat,
    ) -> String {
        match format {
            ExportFormat::Csv => self.render_csv(source, generated_at),
            ExportFormat::Html => self.render_html(source, generated_at),
        }
    }

    fn render_csv(&self, source: ReportSource<'_>, generated_at: DateTime<Utc>) -> String {
        let mut out = String::new();
        out.push_str(source.title());
        out.push('\n');
        out.push_str(&format!("Generated,{}\n\n", timestamp(generated_at)));

        match source {
            ReportSource::TrialBalance(entries) => {
                out.push_str("Account,Type,Debit,Credit\n");
                for entry in entries {
                    out.push_str(&format!(
                        "{},{},{},{}\n",
                        csv_field(&entry.account_name),
                        entry.account_type,
                        csv_amount(entry.debit_balance),
                        csv_amount(entry.credit_balance),
                    ));
                }
                let totals = TrialBalanceTotals::from_entries(entries);
                out.push_str(&format!(
                    "Totals,,{},{}\n",
                    csv_amount(totals.total_debit),
                    csv_amount(totals.total_credit),
                ));
                out.push_str(&format!("Verdict,{}\n", verdict(&totals)));
            }
            _ => {
                let (items, total) = financial_lines(source);
                out.push_str("Line Item,Amount\n");
                for (label, amount) in items {
                    out.push_str(&format!("{label},{}\n", csv_amount(amount)));
                }
                out.push_str(&format!("{},{}\n", total.0, csv_amount(total.1)));
            }
        }

        out
    }

    fn render_html(&self, source: ReportSource<'_>, generated_at: DateTime<Utc>) -> String {
        let mut body = String::new();
        body.push_str(&format!("<h1>{}</h1>\n", source.title()));
        body.push_str(&format!(
            "<p class=\"meta\">Generated {} &middot; Amounts in {}</p>\n",
            timestamp(generated_at),
            self.currency,
        ));

        match source {
            ReportSource::TrialBalance(entries) => {
                body.push_str("<table>\n<tr><th>Account</th><th>Type</th><th>Debit</th><th>Credit</th></tr>\n");
                for entry in entries {
                    body.push_str(&format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                        escape_html(&entry.account_name),
                        entry.account_type,
                        self.html_amount(entry.debit_balance),
                        self.html_amount(entry.credit_balance),
                    ));
                }
                let totals = TrialBalanceTotals::from_entries(entries);
                body.push_str(&format!(
                    "<tr class=\"totals\"><td>Totals</td><td></td><td>{}</td><td>{}</td></tr>\n</table>\n",
                    self.html_amount(totals.total_debit),
                    self.html_amount(totals.total_credit),
                ));
                body.push_str(&format!(
                    "<p class=\"verdict\">{}</p>\n",
                    verdict(&totals)
                ));
            }
            _ => {
                let (items, total) = financial_lines(source);
                body.push_str("<table>\n<tr><th>Line Item</th><th>Amount</th></tr>\n");
                for (label, amount) in items {
                    body.push_str(&format!(
                        "<tr><td>{label}</td><td>{}</td></tr>\n",
                        self.html_amount(amount),
                    ));
                }
                body.push_str(&format!(
                    "<tr class=\"totals\"><td>{}</td><td>{}</td></tr>\n</table>\n",
                    total.0,
                    self.html_amount(total.1),
                ));
            }
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n\
             body {{ font-family: sans-serif; margin: 2em; }}\n\
             table {{ border-collapse: collapse; width: 100%; }}\n\
             th, td {{ border: 1px solid #ccc; padding: 4px 8px; text-align: right; }}\n\
             th:first-child, td:first-child {{ text-align: left; }}\n\
             tr.totals {{ font-weight: bold; }}\n\
             p.meta {{ color: #666; }}\n\
             p.verdict {{ font-weight: bold; }}\n\
             </style>\n</head>\n<body>\n{body}</body>\n</html>\n",
            title = source.title(),
        )
    }

    fn html_amount(&self, amount: Decimal) -> String {
        format!("{} {}", self.currency, format_grouped(amount))
    }
}

/// Line items and the totals row for the three financial report documents.
fn financial_lines(source: ReportSource<'_>) -> (Vec<(&'static str, Decimal)>, (&'static str, Decimal)) {
    match source {
        ReportSource::BalanceSheet(report) => {
            let sheet = &report.balance_sheet;
            (
                vec![
                    ("Current Assets", sheet.assets.current),
                    ("Non-current Assets", sheet.assets.non_current),
                    ("Total Assets", sheet.assets.total),
                    ("Current Liabilities", sheet.liabilities.current),
                    ("Non-current Liabilities", sheet.liabilities.non_current),
                    ("Total Liabilities", sheet.liabilities.total),
                    ("Equity (Retained Earnings)", sheet.equity),
                ],
                (
                    "Liabilities and Equity",
                    sheet.liabilities.total + sheet.equity,
                ),
            )
        }
        ReportSource::ProfitLoss(report) => {
            let pl = &report.profit_loss;
            (
                vec![("Revenue", pl.revenue), ("Expenses", pl.expenses)],
                ("Net Income", pl.net_income),
            )
        }
        ReportSource::CashFlow(report) => {
            let cf = &report.cash_flow;
            (
                vec![
                    ("Operating Activities", cf.operating),
                    ("Investing Activities", cf.investing),
                    ("Financing Activities", cf.financing),
                ],
                ("Net Change in Cash", cf.net_change),
            )
        }
        ReportSource::TrialBalance(_) => unreachable!("trial balance has its own layout"),
    }
}

fn verdict(totals: &TrialBalanceTotals) -> &'static str {
    if totals.is_balanced {
        "BALANCED"
    } else {
        "OUT OF BALANCE"
    }
}

fn timestamp(generated_at: DateTime<Utc>) -> String {
    generated_at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Grouped amounts contain commas, so they are always quoted.
fn csv_amount(amount: Decimal) -> String {
    format!("\"{}\"", format_grouped(amount))
}

/// Quotes a free-text CSV field when it needs it.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
