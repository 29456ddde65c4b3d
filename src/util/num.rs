/// Magnitude an operand must exceed to count as nonzero in the division and
/// power policies.
///
/// This is machine epsilon rather than exact zero, so operands in
/// `[-f64::EPSILON, f64::EPSILON]` are treated as zero.
pub const ZERO_TOLERANCE: f64 = f64::EPSILON;

/// Returns `true` if `value` is distinguishable from zero under
/// [`ZERO_TOLERANCE`].
///
/// `NaN` is never significant.
///
/// # Example
/// ```
/// use calcpad::util::num::is_significant;
///
/// assert!(is_significant(1e-3));
/// assert!(is_significant(-2.0));
/// assert!(!is_significant(0.0));
/// assert!(!is_significant(f64::EPSILON / 2.0));
/// ```
#[must_use]
pub fn is_significant(value: f64) -> bool {
    value.abs() > ZERO_TOLERANCE
}

/// Returns `-1`, `0` or `1` according to the sign of `value`.
///
/// Unlike [`f64::signum`], zero (of either sign) maps to `0`. `NaN` is passed
/// through.
///
/// # Example
/// ```
/// use calcpad::util::num::sign;
///
/// assert_eq!(sign(-42.0), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(-0.0), 0.0);
/// assert_eq!(sign(11.5), 1.0);
/// assert!(sign(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else if value.is_nan() {
        value
    } else {
        0.0
    }
}
