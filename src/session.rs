/// Calculator intents.
///
/// One variant per key a calculator front end can press.
pub mod intent;
/// Key script lexing.
///
/// Turns compact key scripts such as `12+sin(30)=` into intents with a
/// `logos` lexer.
pub mod keys;
/// The calculator session.
///
/// Routes intents to an Expression Builder, evaluates on `=`, and keeps the
/// shown result and the display text.
pub mod core;
