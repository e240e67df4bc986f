use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, BRL = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format an amount the way Brazilian users read it: currency symbol first,
/// '.' as thousands separator and ',' as decimal mark (ex. "R$ 1.234,56").
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let factor = 10_f64.powi(decimal_places as i32);
    let scaled = (amount.abs() * factor).round() as u64;
    let integer_part = (scaled / factor as u64).to_formatted_string(&Locale::pt);
    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
    if decimal_places == 0 {
        format!("{}{} {}", sign, currency.symbol(), integer_part)
    } else {
        let fractional_part = scaled % factor as u64;
        format!(
            "{}{} {},{:0decimal_places$}",
            sign,
            currency.symbol(),
            integer_part,
            fractional_part,
        )
    }
}

/// Format a [0, 1] rate as a whole percentage ("33%").
pub(crate) fn format_rate(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}
