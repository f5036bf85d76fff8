//! Standard number-to-string conversion for query values.
//!
//! Produces the shortest decimal string that round-trips to the same `f64`,
//! with no fixed precision, locale formatting or thousands separators.
//! Integral values carry no fractional part (`10`, not `10.0`), and very large
//! or very small magnitudes switch to exponent notation (`1e+21`, `1e-7`).

/// Formats a number the way a shareable link expects to see it.
///
/// # Rules
///
/// - `NaN` → `"NaN"`
/// - `±∞` → `"Infinity"` / `"-Infinity"`
/// - `0.0` and `-0.0` → `"0"`
/// - `1e-6 <= |x| < 1e21` → plain decimal (`2.5`, `5000`, `0.000001`)
/// - otherwise → exponent form with explicit sign (`1e+21`, `1.5e-7`)
///
/// # Examples
///
/// ```
/// use pilot_site::utils::number_format::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    let (digits, exponent) = shortest_digits(value);
    layout(&digits, exponent)
}

/// Splits a positive finite value into its shortest significant digits and
/// the decimal exponent of the first digit.
///
/// `1234.5` → (`"12345"`, `3`); `0.05` → (`"5"`, `-2`).
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.2345e3".
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    (digits.to_string(), exponent.parse().unwrap_or(0))
}

/// Places the decimal point (or an exponent) around the significant digits.
fn layout(digits: &str, exponent: i32) -> String {
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let n = exponent + 1;

    if k <= n && n <= 21 {
        let zeros = "0".repeat((n - k) as usize);
        return format!("{digits}{zeros}");
    }

    if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        return format!("{int_part}.{frac_part}");
    }

    if -6 < n && n <= 0 {
        let zeros = "0".repeat((-n) as usize);
        return format!("0.{zeros}{digits}");
    }

    let sign = if n - 1 < 0 { '-' } else { '+' };
    let magnitude = (n - 1).abs();
    let (first, rest) = digits.split_at(1);

    if rest.is_empty() {
        format!("{first}e{sign}{magnitude}")
    } else {
        format!("{first}.{rest}e{sign}{magnitude}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(150.0), "150");
        assert_eq!(format_number(5000.0), "5000");
        assert_eq!(format_number(1.0), "1");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1234.5678), "1234.5678");
        assert_eq!(format_number(0.30000000000000004), "0.30000000000000004");
    }

    #[test]
    fn test_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(-2.25), "-2.25");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_large_values_switch_to_exponent_at_1e21() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
    }

    #[test]
    fn test_small_values_switch_to_exponent_below_1e_minus_6() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.0000001), "1e-7");
        assert_eq!(format_number(1.25e-9), "1.25e-9");
    }

    #[test]
    fn test_small_fraction_keeps_leading_zeros() {
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(0.00123), "0.00123");
    }
}
