//! Formatting helpers for Brazilian monetary values and franchise hours
//!
//! The operator-facing panel renders prices as `R$ 1.234,56` and franchise
//! allowances as `HH:MM` strings. These helpers convert between those display
//! forms and the numeric values the contract model works with.

/// Parse a Brazilian-formatted currency string into a float.
///
/// Accepts values with or without the `R$` prefix and with or without
/// thousands separators: `"R$ 1.234,56"`, `"1234,56"` and `"1234.56"` all
/// parse to the same number. Returns `None` when no numeric value remains
/// after stripping.
pub fn parse_currency(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    // A comma marks Brazilian notation: dots are thousands separators there.
    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };
    normalized.parse::<f64>().ok()
}

/// Format a float as Brazilian currency: `1234.5` becomes `"R$ 1.234,50"`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, frac)
}

/// Parse an `HH:MM` franchise allowance into total minutes.
///
/// Returns `None` for anything that is not two colon-separated numeric
/// fields with minutes below 60.
pub fn parse_horas(raw: &str) -> Option<u32> {
    let (hours, minutes) = raw.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Format a minute count back into the panel's `HH:MM` notation.
pub fn format_horas(total_minutes: u32) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
