/// Renders a number as culture-invariant text.
///
/// Finite values use the shortest text that parses back to the same `f64`,
/// with `.` as the decimal point and no exponent. Negative zero prints as
/// `0`. Non-finite values print as `Infinity`, `-Infinity` and `NaN`.
///
/// # Example
/// ```
/// use calcpad::evaluator::format::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-7.0), "-7");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
