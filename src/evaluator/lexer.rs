use std::borrow::Cow;

use logos::Logos;

use crate::{
    error::EvalError,
    evaluator::core::EvalResult,
    expression::token::{Function, NamedNumber, Operator},
};

/// Represents a single classified lexeme of an infix or postfix expression.
///
/// Expressions are split on whitespace first; each piece must then lex to
/// exactly one `Lexeme`, so `sine` or `2p` are rejected rather than read as
/// two tokens.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Lexeme {
    /// Numeric literals such as `42`, `0.5`, `5.` or `-3`. Either `.` or `,`
    /// is accepted as the decimal point.
    #[regex(r"-?[0-9]+([.,][0-9]*)?", parse_number)]
    #[regex(r"-?[.,][0-9]+", parse_number)]
    Number(f64),
    /// `p`, `п` or `π` for pi, `e`, and the placeholder `x`.
    #[token("p", |_| NamedNumber::Pi)]
    #[token("п", |_| NamedNumber::Pi)]
    #[token("π", |_| NamedNumber::Pi)]
    #[token("e", |_| NamedNumber::E)]
    #[token("x", |_| NamedNumber::Variable)]
    Named(NamedNumber),
    /// `+ - * / ^`, with `×` and `÷` as aliases.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Subtract)]
    #[token("*", |_| Operator::Multiply)]
    #[token("×", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    #[token("÷", |_| Operator::Divide)]
    #[token("^", |_| Operator::Power)]
    Operator(Operator),
    /// Function names.
    #[token("sin", |_| Function::Sin)]
    #[token("cos", |_| Function::Cos)]
    #[token("tg", |_| Function::Tg)]
    #[token("ctg", |_| Function::Ctg)]
    #[token("sqrt", |_| Function::Sqrt)]
    #[token("√", |_| Function::Sqrt)]
    #[token("ln", |_| Function::Ln)]
    #[token("lg", |_| Function::Lg)]
    #[token("abs", |_| Function::Abs)]
    #[token("floor", |_| Function::Floor)]
    #[token("ceil", |_| Function::Ceil)]
    #[token("sign", |_| Function::Sign)]
    Function(Function),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal, reading `,` as the decimal point.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    let slice = lex.slice();
    if slice.contains(',') {
        slice.replace(',', ".").parse().ok()
    } else {
        slice.parse().ok()
    }
}

/// A classified lexeme together with the text it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// What the text means.
    pub lexeme:   Lexeme,
    /// The source text of the lexeme.
    pub text:     &'a str,
    /// Zero-based index of the lexeme in its stream.
    pub position: usize,
}

impl Token<'_> {
    /// The text written into postfix output: numbers get `.` as their decimal
    /// point, everything else passes through unchanged.
    #[must_use]
    pub fn invariant_text(&self) -> Cow<'_, str> {
        match self.lexeme {
            Lexeme::Number(_) if self.text.contains(',') => Cow::Owned(self.text.replace(',', ".")),
            _ => Cow::Borrowed(self.text),
        }
    }

    /// Builds the error reported when this token cannot be used where it
    /// appears.
    #[must_use]
    pub fn unexpected(&self) -> EvalError {
        EvalError::UnexpectedToken { token:    self.text.to_string(),
                                     position: self.position, }
    }
}

/// Splits an expression on whitespace and classifies every lexeme.
///
/// # Errors
/// Returns [`EvalError::UnexpectedToken`] for the first lexeme that is not
/// exactly one known token.
///
/// # Example
/// ```
/// use calcpad::{
///     evaluator::lexer::{Lexeme, tokenize},
///     expression::token::{Function, Operator},
/// };
///
/// let tokens = tokenize("sin 0,5 × p").unwrap();
/// let lexemes: Vec<Lexeme> = tokens.iter().map(|t| t.lexeme).collect();
///
/// assert_eq!(lexemes[0], Lexeme::Function(Function::Sin));
/// assert_eq!(lexemes[1], Lexeme::Number(0.5));
/// assert_eq!(lexemes[2], Lexeme::Operator(Operator::Multiply));
/// assert!(tokenize("2 + sine").is_err());
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<Token<'_>>> {
    source.split_whitespace()
          .enumerate()
          .map(|(position, text)| classify(text, position))
          .collect()
}

fn classify(text: &str, position: usize) -> EvalResult<Token<'_>> {
    let mut lexer = Lexeme::lexer(text);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(lexeme)), None) => Ok(Token { lexeme,
                                               text,
                                               position }),
        _ => Err(EvalError::UnexpectedToken { token: text.to_string(),
                                              position }),
    }
}
