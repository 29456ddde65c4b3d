use logos::Logos;

use crate::{
    error::KeyError,
    expression::token::{Function, Operator},
    session::intent::Intent,
};

/// A key press as written in a key script.
///
/// Whitespace between keys is ignored. Multi-digit numbers are written as
/// consecutive digit keys, so `12` is two presses.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Key {
    #[regex("[0-9]", |lex| lex.slice().chars().next().map(Intent::Digit))]
    #[token(".", |_| Intent::DecimalSeparator)]
    #[token(",", |_| Intent::DecimalSeparator)]
    #[token("+", |_| Intent::Operator(Operator::Add))]
    #[token("-", |_| Intent::Operator(Operator::Subtract))]
    #[token("*", |_| Intent::Operator(Operator::Multiply))]
    #[token("×", |_| Intent::Operator(Operator::Multiply))]
    #[token("/", |_| Intent::Operator(Operator::Divide))]
    #[token("÷", |_| Intent::Operator(Operator::Divide))]
    #[token("^", |_| Intent::Operator(Operator::Power))]
    #[token("sin", |_| Intent::Function(Function::Sin))]
    #[token("cos", |_| Intent::Function(Function::Cos))]
    #[token("tg", |_| Intent::Function(Function::Tg))]
    #[token("ctg", |_| Intent::Function(Function::Ctg))]
    #[token("sqrt", |_| Intent::Function(Function::Sqrt))]
    #[token("√", |_| Intent::Function(Function::Sqrt))]
    #[token("ln", |_| Intent::Function(Function::Ln))]
    #[token("lg", |_| Intent::Function(Function::Lg))]
    #[token("abs", |_| Intent::Function(Function::Abs))]
    #[token("floor", |_| Intent::Function(Function::Floor))]
    #[token("ceil", |_| Intent::Function(Function::Ceil))]
    #[token("sign", |_| Intent::Function(Function::Sign))]
    #[token("pi", |_| Intent::Pi)]
    #[token("p", |_| Intent::Pi)]
    #[token("π", |_| Intent::Pi)]
    #[token("п", |_| Intent::Pi)]
    #[token("e", |_| Intent::E)]
    #[token("x", |_| Intent::Variable)]
    #[token("(", |_| Intent::OpeningParenthesis)]
    #[token(")", |_| Intent::ClosingParenthesis)]
    #[token("<", |_| Intent::RemoveLastToken)]
    #[token("C", |_| Intent::Clear)]
    #[token("=", |_| Intent::Calculate)]
    Press(Intent),
}

/// Reads a key script into intents.
///
/// # Errors
/// Returns [`KeyError::UnexpectedKey`] with the zero-based character column
/// of the first text that names no key.
///
/// # Example
/// ```
/// use calcpad::{
///     expression::token::{Function, Operator},
///     session::{intent::Intent, keys::parse_keys},
/// };
///
/// assert_eq!(parse_keys("1+sin(p)=").unwrap(),
///            [Intent::Digit('1'),
///             Intent::Operator(Operator::Add),
///             Intent::Function(Function::Sin),
///             Intent::OpeningParenthesis,
///             Intent::Pi,
///             Intent::ClosingParenthesis,
///             Intent::Calculate]);
///
/// let err = parse_keys("2 ? 3").unwrap_err();
/// assert_eq!(err.to_string(), "Error at column 2: Unexpected key: ?.");
/// ```
pub fn parse_keys(script: &str) -> Result<Vec<Intent>, KeyError> {
    let mut lexer = Key::lexer(script);
    let mut intents = Vec::new();

    while let Some(key) = lexer.next() {
        match key {
            Ok(Key::Press(intent)) => intents.push(intent),
            Err(()) => {
                let column = script[..lexer.span().start].chars().count();
                return Err(KeyError::UnexpectedKey { key: lexer.slice().to_string(),
                                                     column });
            },
        }
    }

    Ok(intents)
}
