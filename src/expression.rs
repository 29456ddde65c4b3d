/// The Expression Builder.
///
/// Accepts one user intent at a time (digit, operator, function, constant,
/// parenthesis, removal, clearing) and keeps the expression text well formed
/// by inserting implicit multiplication, leading zeros and delimiters, or by
/// replacing and ignoring requests that would break it.
///
/// # Responsibilities
/// - Maintains the space-delimited expression text and its last token kind.
/// - Tracks open parentheses and decimal separator availability.
/// - Finalizes an expression for evaluation.
/// - Notifies subscribers when the text changes.
pub mod builder;
/// Builder configuration.
///
/// Holds the host-supplied decimal separator and whether the placeholder
/// variable `x` may be entered.
pub mod config;
/// Token kinds, operators, named numbers and the function table.
///
/// These closed sets are shared by the builder, which emits them as text,
/// and by the evaluator, which classifies that text back into them.
pub mod token;
