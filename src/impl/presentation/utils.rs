use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, EGP = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format an amount with the currency code, correct number of decimal places
/// and thousands separators (en locale, i.e. 1,000.00).
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = format!("{:.decimal_places$}", amount.abs());
    let (integer_part, fractional_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rounded.as_str(), None),
    };
    let integer_part = integer_part
        .parse::<u64>()
        .map(|i| i.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| integer_part.to_string());
    match fractional_part {
        Some(f) => format!("{}{}.{} {}", sign, integer_part, f, currency.code()),
        None => format!("{}{} {}", sign, integer_part, currency.code()),
    }
}
