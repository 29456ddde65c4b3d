use log::{debug, trace};

use crate::{
    evaluator::{
        core::EvalResult,
        lexer::{Lexeme, Token, tokenize},
    },
    expression::token::Operator,
};

/// Converts a space-delimited infix expression to postfix form.
///
/// This is a shunting-yard pass with the precedence rules of the calculator:
/// - `+` and `-` pop everything down to the nearest `(`;
/// - `*` and `/` pop `*`, `/`, `^` and the tightly binding functions (`sin`,
///   `cos`, `tg`, `ctg`, `sqrt`);
/// - `^` pops only the tightly binding functions, so chained powers group to
///   the right;
/// - functions and `(` are always pushed;
/// - `)` pops down to the matching `(` and discards it. A missing `(` is not
///   an error.
///
/// Operator stack leftovers, including unmatched `(`, are appended at the end.
/// Numbers are written with `.` as their decimal point.
///
/// # Errors
/// Returns [`EvalError::UnexpectedToken`](crate::error::EvalError) for a
/// lexeme that is not a number, constant, variable, operator, function or
/// parenthesis.
///
/// # Example
/// ```
/// use calcpad::evaluator::postfix::to_postfix;
///
/// assert_eq!(to_postfix("1 + 2").unwrap(), "1 2 +");
/// assert_eq!(to_postfix("1 - 2 * 4").unwrap(), "1 2 4 * -");
/// assert_eq!(to_postfix("( 1 - 2 ) * 4").unwrap(), "1 2 - 4 *");
/// assert_eq!(to_postfix("2 ^ 3 ^ 2").unwrap(), "2 3 2 ^ ^");
/// ```
pub fn to_postfix(infix: &str) -> EvalResult<String> {
    let postfix = shunt(tokenize(infix)?).iter()
                                         .map(Token::invariant_text)
                                         .collect::<Vec<_>>()
                                         .join(" ");

    debug!("postfix of {infix:?} is {postfix:?}");
    Ok(postfix)
}

/// Reorders classified infix tokens into postfix order.
pub(crate) fn shunt(tokens: Vec<Token<'_>>) -> Vec<Token<'_>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token<'_>> = Vec::new();

    for token in tokens {
        trace!("shunting {:?}", token.text);

        match token.lexeme {
            Lexeme::Number(_) | Lexeme::Named(_) => output.push(token),
            Lexeme::Operator(op) => {
                while let Some(top) = stack.last() {
                    if !pops_before(op, top.lexeme) {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(token);
            },
            Lexeme::Function(_) | Lexeme::LParen => stack.push(token),
            Lexeme::RParen => {
                while let Some(top) = stack.pop() {
                    if top.lexeme == Lexeme::LParen {
                        break;
                    }
                    output.push(top);
                }
            },
        }
    }

    output.extend(stack.into_iter().rev());
    output
}

/// Decides whether `top` leaves the operator stack before `incoming` is
/// pushed.
const fn pops_before(incoming: Operator, top: Lexeme) -> bool {
    match incoming {
        Operator::Add | Operator::Subtract => !matches!(top, Lexeme::LParen),
        Operator::Multiply | Operator::Divide => match top {
            Lexeme::Operator(op) => {
                matches!(op, Operator::Multiply | Operator::Divide | Operator::Power)
            },
            Lexeme::Function(function) => function.binds_tight(),
            _ => false,
        },
        Operator::Power => match top {
            Lexeme::Function(function) => function.binds_tight(),
            _ => false,
        },
    }
}
