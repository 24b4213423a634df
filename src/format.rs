//! Rendering of evaluation results as calculator display text.

/// Text shown in place of a result when evaluation fails.
pub const ERROR_TEXT: &str = "Error";

/// Formats a value the way a calculator display shows it.
///
/// Non-finite values render as `Infinity`, `-Infinity` and `NaN`. Integral values have
/// no fractional part, negative zero shows as `0`, and everything else uses the shortest
/// representation that reads back as the same `f64`. Exponent notation is never used.
///
/// # Examples
/// ```
/// use safe_calc::format_value;
///
/// assert_eq!(format_value(14.0), "14");
/// assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}
