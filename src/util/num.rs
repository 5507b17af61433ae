/// Rendering of positive infinity.
pub const INFINITY: &str = "inf";
/// Rendering of negative infinity.
pub const NEG_INFINITY: &str = "-inf";
/// Rendering of not-a-number.
pub const NAN: &str = "nan";

/// Formats a number for display.
///
/// A value with no fractional part is written as an integer, with no decimal
/// point and no exponent. Other finite values use the shortest decimal text
/// that parses back to the same `f64`. Infinities and NaN use the fixed
/// spellings [`INFINITY`], [`NEG_INFINITY`] and [`NAN`], and negative zero is
/// written as `0`.
///
/// ## Example
/// ```
/// use arithmetica::util::num::format_number;
///
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(4.5), "4.5");
/// assert_eq!(format_number(-0.25), "-0.25");
/// assert_eq!(format_number(1e21), "1000000000000000000000");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
/// assert_eq!(format_number(f64::NAN), "nan");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return NAN.to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { INFINITY } else { NEG_INFINITY };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value % 1.0 == 0.0 {
        return format!("{value:.0}");
    }
    value.to_string()
}
