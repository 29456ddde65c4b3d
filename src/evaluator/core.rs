use log::debug;

use crate::{
    error::EvalError,
    evaluator::{
        format::format_number,
        lexer::{Lexeme, Token, tokenize},
        ops::{apply_binary, apply_function, constant},
        postfix::to_postfix,
    },
    expression::token::{Function, NamedNumber, Operator},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Interprets postfix tokens on an operand stack.
///
/// The walk over the token stream, the operand bookkeeping and the error
/// reporting are shared by every implementation; an implementation only
/// decides what an operand is and what applying an operator produces.
/// Immediate evaluation uses `f64` operands. Compilation records each step
/// into a flat program and keeps only placeholders on the stack.
pub(crate) trait StackMachine {
    /// The operand type kept on the stack.
    type Operand;

    /// Produces the operand for a numeric literal.
    fn number(&mut self, value: f64) -> Self::Operand;

    /// Produces the operand for a constant or the placeholder variable.
    fn named(&mut self, number: NamedNumber, token: &Token<'_>) -> EvalResult<Self::Operand>;

    /// Combines two operands with a binary operator.
    fn binary(&mut self,
              op: Operator,
              left: Self::Operand,
              right: Self::Operand)
              -> EvalResult<Self::Operand>;

    /// Applies a function to an operand.
    fn unary(&mut self, function: Function, operand: Self::Operand) -> EvalResult<Self::Operand>;

    /// Runs the machine over a postfix token stream.
    ///
    /// For a binary operator the first operand popped is the right one.
    /// Exactly one operand must remain at the end.
    fn run(&mut self, postfix: &[Token<'_>]) -> EvalResult<Self::Operand> {
        let mut stack = Vec::new();

        for token in postfix {
            let operand = match token.lexeme {
                Lexeme::Number(value) => self.number(value),
                Lexeme::Named(number) => self.named(number, token)?,
                Lexeme::Operator(op) => {
                    let right = pop_operand(&mut stack, token)?;
                    let left = pop_operand(&mut stack, token)?;
                    self.binary(op, left, right)?
                },
                Lexeme::Function(function) => {
                    let operand = pop_operand(&mut stack, token)?;
                    self.unary(function, operand)?
                },
                Lexeme::LParen | Lexeme::RParen => return Err(token.unexpected()),
            };
            stack.push(operand);
        }

        match stack.len() {
            1 => stack.pop()
                      .ok_or(EvalError::OperandCountMismatch { remaining: 0 }),
            remaining => Err(EvalError::OperandCountMismatch { remaining }),
        }
    }
}

fn pop_operand<T>(stack: &mut Vec<T>, token: &Token<'_>) -> EvalResult<T> {
    stack.pop()
         .ok_or_else(|| EvalError::MissingOperand { token:    token.text.to_string(),
                                                    position: token.position, })
}

/// Evaluates operands right away.
struct Immediate;

impl StackMachine for Immediate {
    type Operand = f64;

    fn number(&mut self, value: f64) -> f64 {
        value
    }

    fn named(&mut self, number: NamedNumber, token: &Token<'_>) -> EvalResult<f64> {
        constant(number).ok_or_else(|| token.unexpected())
    }

    fn binary(&mut self, op: Operator, left: f64, right: f64) -> EvalResult<f64> {
        apply_binary(op, left, right)
    }

    fn unary(&mut self, function: Function, operand: f64) -> EvalResult<f64> {
        apply_function(function, operand)
    }
}

/// Evaluates a space-delimited infix expression.
///
/// The expression is converted with [`to_postfix`] and the postfix form is
/// evaluated with [`evaluate_postfix`]. The input should come from
/// [`ExpressionBuilder::finalize`](crate::expression::builder::ExpressionBuilder::finalize).
///
/// # Errors
/// - Invalid expressions: [`EvalError::UnexpectedToken`] (including the
///   placeholder `x`, which only compiled functions bind),
///   [`EvalError::MissingOperand`], [`EvalError::OperandCountMismatch`].
/// - Arithmetic domain errors, see [`apply_binary`] and [`apply_function`].
///
/// # Example
/// ```
/// use calcpad::{error::EvalError, evaluator::core::evaluate};
///
/// assert_eq!(evaluate("1 - 2 * 4"), Ok(-7.0));
/// assert_eq!(evaluate("sqrt 16 + abs ( 0 - 2 )"), Ok(6.0));
/// assert_eq!(evaluate("7 / ( 2 - 2 )"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(infix: &str) -> EvalResult<f64> {
    let postfix = to_postfix(infix)?;
    let value = evaluate_postfix(&postfix)?;

    debug!("{infix:?} evaluated to {value}");
    Ok(value)
}

/// Evaluates an expression that is already in postfix form.
///
/// # Errors
/// Same as [`evaluate`]; parentheses are unexpected here.
///
/// # Example
/// ```
/// use calcpad::evaluator::core::evaluate_postfix;
///
/// assert_eq!(evaluate_postfix("1 2 4 * -"), Ok(-7.0));
/// ```
pub fn evaluate_postfix(postfix: &str) -> EvalResult<f64> {
    Immediate.run(&tokenize(postfix)?)
}

/// Evaluates an infix expression and renders the result as culture-invariant
/// text.
///
/// # Errors
/// Same as [`evaluate`].
///
/// # Example
/// ```
/// use calcpad::evaluator::core::evaluate_to_string;
///
/// assert_eq!(evaluate_to_string("1 + 2").unwrap(), "3");
/// assert_eq!(evaluate_to_string("( 1 - 2 ) * 4").unwrap(), "-4");
/// assert_eq!(evaluate_to_string("1 / 4").unwrap(), "0.25");
/// ```
pub fn evaluate_to_string(infix: &str) -> EvalResult<String> {
    evaluate(infix).map(format_number)
}
