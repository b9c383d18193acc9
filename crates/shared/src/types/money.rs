//! Currency codes and monetary display formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All monetary amounts in the system are `rust_decimal::Decimal`.

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Sri Lankan Rupee
    Lkr,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lkr => write!(f, "LKR"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LKR" => Ok(Self::Lkr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// Formats a monetary amount with thousands separators and two decimal places.
///
/// `1234567.5` becomes `"1,234,567.50"`. The sign is preserved as a leading
/// minus. Amounts are rounded to two decimal places before formatting.
#[must_use]
pub fn format_grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let abs = rounded.abs();

    // Decimal::trunc always fits in i128.
    let units = abs.trunc().to_i128().unwrap_or_default();
    let cents = ((abs - abs.trunc()) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i128()
        .unwrap_or_default();

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}{}.{cents:02}",
        units.to_formatted_string(&Locale::en)
    )
}
