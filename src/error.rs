/// Builder argument errors.
///
/// Raised when an Expression Builder operation receives a character or name
/// outside its accepted set: a non-digit for `add_digit`, an unknown operator
/// symbol or an unknown function name.
pub mod argument_error;
/// Evaluation errors.
///
/// Covers malformed expressions found while converting or evaluating them,
/// and the arithmetic domain errors (division by zero, indeterminate forms,
/// real-valued domain violations) that a user can trigger with well-formed
/// input.
pub mod eval_error;
/// Key script errors.
///
/// Raised when a key script contains text that maps to no calculator key.
pub mod key_error;

pub use argument_error::ArgumentError;
pub use eval_error::EvalError;
pub use key_error::KeyError;
