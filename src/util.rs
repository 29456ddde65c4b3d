/// Numeric helpers.
///
/// Tolerance comparisons used by the evaluator's division and power
/// policies, and the three-way `sign` function.
pub mod num;
