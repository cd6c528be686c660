//! Number coercion and formatting rules shared by the form and the engine.
//!
//! Text typed into a field never produces an error: anything that is not a
//! finite decimal number coerces to the `0.0` sentinel.

/// Parses field text into a finite number.
///
/// Accepts optional surrounding whitespace, an optional leading `-`, a
/// decimal mantissa and an optional exponent. A leading `+`, a mantissa
/// ending in `.` and spelled-out values such as `inf` or `NaN` are rejected,
/// as a number input would read them as empty.
pub fn try_parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }
    let mantissa = trimmed.split(['e', 'E']).next().unwrap_or(trimmed);
    if mantissa.starts_with('+') || mantissa.ends_with('.') {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses field text, coercing empty or non-numeric text to `0.0`.
///
/// # Examples
///
/// ```
/// use bmi_calc::domain::parse_numeric;
///
/// assert_eq!(parse_numeric("1.8"), 1.8);
/// assert_eq!(parse_numeric(""), 0.0);
/// assert_eq!(parse_numeric("tall"), 0.0);
/// ```
pub fn parse_numeric(text: &str) -> f64 {
    try_parse_numeric(text).unwrap_or(0.0)
}

/// Formats a number with exactly two fraction digits.
///
/// Follows `Number.prototype.toFixed(2)` semantics: exact binary ties round
/// away from zero, negative zero drops its sign, non-finite values are
/// spelled out, and magnitudes of 1e21 or more use the shortest exponent
/// form (`7e+21`).
///
/// # Examples
///
/// ```
/// use bmi_calc::domain::format_fixed2;
///
/// assert_eq!(format_fixed2(21.604938271604937), "21.60");
/// assert_eq!(format_fixed2(0.125), "0.13");
/// assert_eq!(format_fixed2(f64::INFINITY), "Infinity");
/// ```
pub fn format_fixed2(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let magnitude = x.abs();

    if magnitude >= 1e21 {
        return format!("{sign}{}", format!("{magnitude:e}").replacen('e', "e+", 1));
    }

    // Only multiples of 1/8 can sit exactly halfway between two hundredths.
    let scaled = magnitude * 100.0;
    if (magnitude * 8.0).fract() == 0.0 && scaled.fract() == 0.5 {
        return format!("{sign}{:.2}", scaled.ceil() / 100.0);
    }

    format!("{sign}{magnitude:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_numeric("70"), 70.0);
        assert_eq!(parse_numeric("1.80"), 1.8);
        assert_eq!(parse_numeric("  1.6 "), 1.6);
        assert_eq!(parse_numeric(".5"), 0.5);
        assert_eq!(parse_numeric("1e2"), 100.0);
        assert_eq!(parse_numeric("1.5e+1"), 15.0);
        assert_eq!(parse_numeric("2E-1"), 0.2);
    }

    #[test]
    fn test_parse_negative_passes_through() {
        assert_eq!(parse_numeric("-1.5"), -1.5);
        assert_eq!(parse_numeric("-80"), -80.0);
    }

    #[test]
    fn test_parse_invalid_is_zero() {
        assert_eq!(parse_numeric(""), 0.0);
        assert_eq!(parse_numeric("   "), 0.0);
        assert_eq!(parse_numeric("abc"), 0.0);
        assert_eq!(parse_numeric("1.2.3"), 0.0);
        assert_eq!(parse_numeric("e"), 0.0);
        assert_eq!(parse_numeric("-"), 0.0);
        assert_eq!(parse_numeric("12kg"), 0.0);
    }

    #[test]
    fn test_parse_rejects_plus_sign_and_trailing_dot() {
        assert_eq!(parse_numeric("+1.8"), 0.0);
        assert_eq!(parse_numeric("1."), 0.0);
        assert_eq!(parse_numeric("1.e2"), 0.0);
        assert_eq!(try_parse_numeric("+70"), None);
    }

    #[test]
    fn test_parse_rejects_non_finite_spellings() {
        assert_eq!(parse_numeric("inf"), 0.0);
        assert_eq!(parse_numeric("NaN"), 0.0);
        assert_eq!(parse_numeric("infinity"), 0.0);
        assert_eq!(parse_numeric("1e999"), 0.0);
    }

    #[test]
    fn test_try_parse_distinguishes_invalid() {
        assert_eq!(try_parse_numeric("0"), Some(0.0));
        assert_eq!(try_parse_numeric("zero"), None);
        assert_eq!(try_parse_numeric(""), None);
    }

    #[test]
    fn test_format_regular_values() {
        assert_eq!(format_fixed2(70.0 / (1.8 * 1.8)), "21.60");
        assert_eq!(format_fixed2(45.0 / (1.6 * 1.6)), "17.58");
        assert_eq!(format_fixed2(120.0 / (1.7 * 1.7)), "41.52");
        assert_eq!(format_fixed2(25.0), "25.00");
        assert_eq!(format_fixed2(1.005), "1.00");
    }

    #[test]
    fn test_format_ties_round_away_from_zero() {
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(0.625), "0.63");
        assert_eq!(format_fixed2(2.375), "2.38");
        assert_eq!(format_fixed2(-0.125), "-0.13");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_fixed2(f64::INFINITY), "Infinity");
        assert_eq!(format_fixed2(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_fixed2(f64::NAN), "NaN");
        assert_eq!(format_fixed2(-0.0), "0.00");
        assert_eq!(format_fixed2(-3.5), "-3.50");
    }

    #[test]
    fn test_format_huge_values_use_exponent_form() {
        assert_eq!(format_fixed2(70.0 / (1e-10 * 1e-10)), "6.999999999999999e+21");
        assert_eq!(format_fixed2(1e21), "1e+21");
        assert_eq!(format_fixed2(-2.5e22), "-2.5e+22");
        assert_eq!(format_fixed2(1e20), "100000000000000000000.00");
    }
}
