use serde::{Deserialize, Serialize};

use crate::resource::never_empty;

/// Aggregates shown on the dashboard cards. Money is in minor units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub revenue: i64,
    pub orders: u64,
    pub products: u64,
    pub low_stock: u64,
}

never_empty!(DashboardStats);

/// One precomputed bucket of a chart series, e.g. `{ name: "Mar", total: 1200.0 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPeriod {
    Daily,
    #[default]
    Monthly,
}

impl ChartPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
        }
    }
}

/// Formats minor currency units, e.g. `format_money(-1250, "USD") == "-12.50 USD"`.
pub fn format_money(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02} {currency}", abs / 100, abs % 100)
}

/// Parses user input like `12.5` or `12.50` into minor units.
pub fn parse_money(input: &str) -> Option<i64> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() || fraction.len() > 2 {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: i64 = whole.parse().ok()?;
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    let value = whole.checked_mul(100)?.checked_add(cents)?;
    Some(if negative { -value } else { value })
}

/// Minor units back into the editable `12.50` form.
pub fn money_input(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minor_units() {
        assert_eq!(format_money(0, "USD"), "0.00 USD");
        assert_eq!(format_money(1250, "EUR"), "12.50 EUR");
        assert_eq!(format_money(-5, "USD"), "-0.05 USD");
    }

    #[test]
    fn parses_money_input() {
        assert_eq!(parse_money("12.5"), Some(1250));
        assert_eq!(parse_money(" 3 "), Some(300));
        assert_eq!(parse_money("0.07"), Some(7));
        assert_eq!(parse_money("-1.00"), Some(-100));
        assert_eq!(parse_money("1.234"), None);
        assert_eq!(parse_money("abc"), None);
        assert_eq!(parse_money(".5"), None);
        assert_eq!(money_input(parse_money("19.9").unwrap()), "19.90");
    }
}
