//! Rupiah and date formatting for the views.
//!
//! Numbers use Indonesian grouping: `.` between thousands and `,` before
//! the fraction, e.g. `Rp 1.250.000,5`.

use chrono::{DateTime, Utc};

const CURRENCY_FRACTION_DIGITS: u32 = 2;
const NUMBER_FRACTION_DIGITS: u32 = 3;

pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp 0".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}Rp {}", sign, group(amount.abs(), CURRENCY_FRACTION_DIGITS))
}

pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group(value.abs(), NUMBER_FRACTION_DIGITS))
}

/// Compact form for dashboard cards: `Rp 1.5M`, `Rp 2.5Jt`, `Rp 15rb`.
pub fn format_short_currency(amount: f64) -> String {
    if amount >= 1_000_000_000.0 {
        format!("Rp {}M", to_fixed(amount / 1_000_000_000.0, 1))
    } else if amount >= 1_000_000.0 {
        format!("Rp {}Jt", to_fixed(amount / 1_000_000.0, 1))
    } else if amount >= 1_000.0 {
        format!("Rp {}rb", to_fixed(amount / 1_000.0, 0))
    } else {
        format_currency(amount)
    }
}

pub fn format_long_date(date: &DateTime<Utc>) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

pub fn format_short_date(date: &DateTime<Utc>) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Rounds the exact binary value, so `1.45` (stored as 1.4499...) gives `1.4`
/// while an exact tie such as `1.25` goes up to `1.3`.
fn to_fixed(value: f64, digits: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    // Exact for |value| >= 1, which has at most 52 fractional bits
    let exact = format!("{:.52}", value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = integer.bytes().chain(fraction.bytes().take(digits)).collect();
    let mut integer_len = integer.len();

    if fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                integer_len += 1;
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let (int_digits, frac_digits) = kept.split_at(integer_len);
    let int_digits = String::from_utf8_lossy(int_digits);
    if frac_digits.is_empty() {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, String::from_utf8_lossy(frac_digits))
    }
}

fn group(value: f64, max_fraction_digits: u32) -> String {
    let scale = 10u128.pow(max_fraction_digits);
    let scaled = (value * scale as f64).round() as u128;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if fraction > 0 {
        let fraction = format!("{:0width$}", fraction, width = max_fraction_digits as usize);
        grouped.push(',');
        grouped.push_str(fraction.trim_end_matches('0'));
    }

    grouped
}
