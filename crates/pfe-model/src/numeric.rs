//! Numeric readings of free-text extract cells.
//!
//! Extract cells are loosely typed: blanks, units and stray text all appear in
//! numeric columns. These helpers pin down one reading for each use.

use std::sync::LazyLock;

use regex::Regex;

/// Number at the start of a strength cell, with optional `,` thousands groups.
static LEADING_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d*)?|\.\d+)")
        .expect("Invalid leading number regex")
});

/// Reads a cell the way a lenient numeric cast does: surrounding whitespace is
/// ignored, a blank cell reads as `0`, `0x`/`0o`/`0b` prefixes select a radix,
/// and anything that is not a finite number is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `Some(..)` when `text` carries a radix prefix; unsigned digits only.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    let prefix = text.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.filter(|value| value.is_finite()))
}

/// Like [`parse_number`], but zero (and therefore blank) reads as missing.
pub fn truthy_number(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|value| *value != 0.0)
}

/// Reads the number at the start of a cell such as `"10 mg"`, `"0.1%"` or
/// `"1,000 mg"`.
///
/// Blank cells and cells without a leading number are `None`.
pub fn leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return value.is_finite().then_some(value);
    }
    let matched = LEADING_NUMBER_REGEX.find(trimmed)?.as_str();
    matched.replace(',', "").parse::<f64>().ok()
}

/// Formats a number without a trailing `.0` for integral values.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
