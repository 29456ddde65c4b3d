//! # calcpad
//!
//! calcpad is the engine of a keypad calculator written in Rust.
//! It builds well-formed infix expressions one key press at a time, converts
//! them to postfix with a shunting-yard pass, and evaluates or compiles them
//! with explicit handling of division by zero, indeterminate forms and
//! real-valued domain errors.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::session::{core::Session, keys::parse_keys};

/// Provides the error types of every stage.
///
/// Each failure domain has its own enum: builder arguments, expression
/// evaluation, and key scripts. All of them implement
/// [`std::error::Error`], so entry points that span several stages return
/// `Box<dyn std::error::Error>`.
///
/// # Responsibilities
/// - Defines error enums for builder, evaluator and key script failures.
/// - Carries the offending text and its position where one exists.
/// - Separates arithmetic domain errors from malformed input.
pub mod error;
/// Converts and evaluates finalized expressions.
///
/// This module classifies the lexemes of a space-delimited infix expression,
/// reorders them into postfix form, and runs the postfix stream on an operand
/// stack, either right away or as a compiled function of `x`.
///
/// # Responsibilities
/// - Lexes numbers, constants, operators, functions and parentheses.
/// - Applies the calculator's precedence rules in the shunting-yard pass.
/// - Evaluates postfix streams and renders results as invariant text.
pub mod evaluator;
/// Builds expressions from key presses.
///
/// This module holds the Expression Builder and the token vocabulary it
/// writes: token kinds, operators, named numbers and the function table.
///
/// # Responsibilities
/// - Keeps the expression text well formed after every edit.
/// - Tracks parentheses and decimal separator state.
/// - Publishes text changes to subscribers.
pub mod expression;
/// Models a calculator session on top of the builder.
///
/// This module maps key presses to builder operations, evaluates on `=`, and
/// formats the display the way a keypad shows it. Key scripts give a compact
/// textual form for sequences of key presses.
pub mod session;
/// General numeric helpers shared by the evaluator.
pub mod util;

/// Applies a key script to a session.
///
/// The script is lexed as a whole before any key is applied, so a typo
/// leaves the session untouched. Keys are then applied in order until one
/// fails.
///
/// # Errors
/// Returns a [`KeyError`](error::KeyError) if the script does not lex, or the
/// first error a key press raises.
///
/// # Examples
/// ```
/// use calcpad::{run_keys, session::core::Session};
///
/// let mut session = Session::new();
///
/// run_keys(&mut session, "(1-2)*4=").unwrap();
/// assert_eq!(session.result(), Some("-4"));
///
/// // A calculation that divides by zero is reported, not shown.
/// let res = run_keys(&mut session, "7÷0=");
/// assert!(res.is_err());
/// assert_eq!(session.display(), "7/0");
/// ```
pub fn run_keys(session: &mut Session, keys: &str) -> Result<(), Box<dyn std::error::Error>> {
    let intents = parse_keys(keys)?;
    session.apply_all(intents)
}
