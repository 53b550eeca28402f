//! Fixed-locale presentation helpers for calculation results.
//!
//! Figures are rendered the way the calculator's results view shows them:
//! Bosnian locale (`bs-BA`), convertible marks (`KM`), two decimals, and
//! month labels counted from the month after the loan starts.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{round_currency, AmortizationEntry, LoanResponse, Money};

pub const CURRENCY_SUFFIX: &str = "KM";

const MONTH_NAMES: [&str; 12] = [
    "Januar", "Februar", "Mart", "April", "Maj", "Juni", "Juli", "August", "Septembar",
    "Oktobar", "Novembar", "Decembar",
];

/// Format money as `1.234.567,89 KM`.
pub fn format_currency(value: Money) -> String {
    let rounded = round_currency(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{},{frac} {CURRENCY_SUFFIX}", group_thousands(whole))
}

fn group_thousands(whole: &str) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Interest as a percentage of everything paid, to one decimal place.
pub fn interest_share(response: &LoanResponse) -> Decimal {
    if response.total_paid.is_zero() {
        return Decimal::ZERO;
    }
    (response.total_interest / response.total_paid * dec!(100))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Total paid in a single schedule row.
pub fn entry_payment(entry: &AmortizationEntry) -> Money {
    entry.principal + entry.interest
}

/// First day of the calendar month `month` months after `start`'s month.
pub fn payment_date(start: NaiveDate, month: u32) -> Option<NaiveDate> {
    start
        .with_day(1)?
        .checked_add_months(Months::new(month))
}

/// `Novembar 2026`
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}
