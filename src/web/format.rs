//! Human-readable number formatting for rendered pages.
//!
//! Links always use [`crate::utils::number_format::format_number`]; these
//! helpers are display-only and may round.

/// Whole currency amount with thousands separators, e.g. `$14,000` or `-$250`.
pub fn money(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{sign}${}", group_thousands(&digits))
}

/// Value with at most one decimal place, trailing `.0` dropped.
pub fn one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let formatted = format!("{:.1}", value);
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(250.0), "$250");
        assert_eq!(money(6000.0), "$6,000");
        assert_eq!(money(1_234_567.4), "$1,234,567");
        assert_eq!(money(-5000.0), "-$5,000");
        assert_eq!(money(f64::NAN), "—");
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(one_decimal(1.2), "1.2");
        assert_eq!(one_decimal(3.333_333), "3.3");
        assert_eq!(one_decimal(4.0), "4");
        assert_eq!(one_decimal(f64::INFINITY), "—");
    }
}
