/// Maximum number of fractional digits in the printed form of a number.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Formats a number in its canonical fixed-point form.
///
/// The value is rounded to [`MAX_FRACTION_DIGITS`] fractional digits, then
/// trailing zeros and a dangling `.` are removed. Integral values therefore
/// print without any fractional part. A result that rounds to zero prints as
/// `0`, never `-0`.
///
/// ## Example
/// ```
/// use fab::util::num::format_number;
///
/// assert_eq!(format_number(17.0), "17");
/// assert_eq!(format_number(2.50), "2.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.33333333");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let mut text = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }

    if text == "-0" {
        text.remove(0);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(9_007_199_254_740_992.0), "9007199254740992");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-3.10), "-3.1");
        assert_eq!(format_number(1.000_000_001), "1");
        assert_eq!(format_number(0.123_456_789), "0.12345679");
    }

    #[test]
    fn tiny_negative_values_round_to_plain_zero() {
        assert_eq!(format_number(-0.000_000_001), "0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
