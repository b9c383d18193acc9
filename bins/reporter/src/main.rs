//! Copra report generator.
//!
//! Loads a finance snapshot from a JSON file, derives the ledger, and prints
//! the requested report to stdout.
//!
//! Usage: copra <snapshot.json> <report> [format] [currency]
//!
//! - `report`: `balance-sheet`, `profit-loss`, `cash-flow`, or `trial-balance`
//! - `format`: `html` (default) or `csv`
//! - `currency`: ISO code for HTML amount labels, defaults to `LKR`

use std::fs;
use std::str::FromStr;

use anyhow::{bail, Context};
use chrono::Utc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copra_core::ledger::{AccountBook, TrialBalance};
use copra_core::reports::{ExportFormat, ReportFormatter, ReportSource, StatementBuilder};
use copra_core::snapshot::Snapshot;
use copra_shared::Currency;

/// Which report document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportKind {
    BalanceSheet,
    ProfitLoss,
    CashFlow,
    TrialBalance,
}

impl FromStr for ReportKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balance-sheet" => Ok(Self::BalanceSheet),
            "profit-loss" => Ok(Self::ProfitLoss),
            "cash-flow" => Ok(Self::CashFlow),
            "trial-balance" => Ok(Self::TrialBalance),
            _ => bail!(
                "Unknown report: {s} (expected balance-sheet, profit-loss, cash-flow, or trial-balance)"
            ),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "copra=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(report)) = (args.next(), args.next()) else {
        bail!("Usage: copra <snapshot.json> <report> [format] [currency]");
    };
    let kind = ReportKind::from_str(&report)?;
    let format = match args.next() {
        Some(raw) => ExportFormat::from_str(&raw).map_err(anyhow::Error::msg)?,
        None => ExportFormat::Html,
    };
    let currency = match args.next() {
        Some(raw) => Currency::from_str(&raw).map_err(anyhow::Error::msg)?,
        None => Currency::Lkr,
    };

    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot file: {path}"))?;
    let snapshot = Snapshot::from_json(&json)?;
    info!(
        transactions = snapshot.transactions.len(),
        records = snapshot.assets_liabilities.len(),
        "Snapshot loaded"
    );

    let accounts = AccountBook::build(&snapshot.transactions, &snapshot.assets_liabilities);
    debug!(accounts = accounts.len(), "Account book built");

    let formatter = ReportFormatter::new(currency);
    let generated_at = Utc::now();
    let rendered = match kind {
        ReportKind::TrialBalance => {
            let entries = TrialBalance::derive(&accounts);
            debug!(rows = entries.len(), "Trial balance derived");
            formatter.render(ReportSource::TrialBalance(&entries), generated_at, format)
        }
        _ => {
            let report = StatementBuilder::build(&accounts);
            let source = match kind {
                ReportKind::BalanceSheet => ReportSource::BalanceSheet(&report),
                ReportKind::ProfitLoss => ReportSource::ProfitLoss(&report),
                ReportKind::CashFlow => ReportSource::CashFlow(&report),
                ReportKind::TrialBalance => unreachable!(),
            };
            formatter.render(source, generated_at, format)
        }
    };

    print!("{rendered}");
    Ok(())
}
