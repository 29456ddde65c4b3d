/// Compiled single-argument functions.
///
/// Turns an infix expression into an expression tree once, then evaluates it
/// for any value of the placeholder `x` with the same numeric rules as
/// immediate evaluation.
pub mod compile;
/// Postfix evaluation.
///
/// Runs a postfix stream on an operand stack and exposes the `evaluate`
/// family of entry points.
///
/// # Responsibilities
/// - Applies operators and functions to operands in postfix order.
/// - Reports missing operands, leftover operands and unexpected tokens.
/// - Defines the [`EvalResult`](core::EvalResult) alias.
pub mod core;
/// Culture-invariant rendering of results.
pub mod format;
/// Lexeme classification.
///
/// Splits an expression on whitespace and classifies each lexeme with a
/// `logos` lexer as a number, constant, variable, operator, function or
/// parenthesis.
pub mod lexer;
/// Numeric policies.
///
/// The arithmetic of every operator and function, including the tolerance
/// rules for division and powers and the real-valued domain checks.
pub mod ops;
/// Infix to postfix conversion (shunting-yard).
pub mod postfix;
