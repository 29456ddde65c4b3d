use std::fmt;

use log::debug;

use crate::{
    error::EvalError,
    evaluator::{
        core::{EvalResult, StackMachine},
        lexer::{Token, tokenize},
        ops::{apply_binary, apply_function, constant},
        postfix::shunt,
    },
    expression::token::{Function, NamedNumber, Operator},
};

/// One instruction of a compiled program.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Number(f64),
    Variable,
    Binary(Operator),
    Unary(Function),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable => write!(f, "x"),
            Self::Binary(op) => write!(f, "{op}"),
            Self::Unary(function) => write!(f, "{function}"),
        }
    }
}

/// Records steps while the stack walk checks operand counts.
#[derive(Default)]
struct Compiler {
    program: Vec<Step>,
}

impl StackMachine for Compiler {
    type Operand = ();

    fn number(&mut self, value: f64) {
        self.program.push(Step::Number(value));
    }

    fn named(&mut self, number: NamedNumber, _token: &Token<'_>) -> EvalResult<()> {
        self.program
            .push(constant(number).map_or(Step::Variable, Step::Number));
        Ok(())
    }

    fn binary(&mut self, op: Operator, _left: (), _right: ()) -> EvalResult<()> {
        self.program.push(Step::Binary(op));
        Ok(())
    }

    fn unary(&mut self, function: Function, _operand: ()) -> EvalResult<()> {
        self.program.push(Step::Unary(function));
        Ok(())
    }
}

fn pop(stack: &mut Vec<f64>) -> EvalResult<f64> {
    stack.pop()
         .ok_or(EvalError::OperandCountMismatch { remaining: 0 })
}

/// A single-argument function compiled from an infix expression.
///
/// The expression is validated once by [`compile`] and kept as a flat
/// postfix program. Calling the function only reports arithmetic domain
/// errors, with the same rules that
/// [`evaluate`](crate::evaluator::core::evaluate) applies.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFunction {
    program: Vec<Step>,
}

impl CompiledFunction {
    /// Evaluates the function with the placeholder `x` bound to `x`.
    ///
    /// # Errors
    /// Any arithmetic [`EvalError`](crate::error::EvalError) raised for this
    /// argument, e.g. `DivisionByZero` for `1 / x` at `0`.
    ///
    /// # Example
    /// ```
    /// use calcpad::{error::EvalError, evaluator::compile::compile};
    ///
    /// let f = compile("1 / x").unwrap();
    /// assert_eq!(f.call(4.0), Ok(0.25));
    /// assert_eq!(f.call(0.0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn call(&self, x: f64) -> EvalResult<f64> {
        let mut stack = Vec::new();

        for step in &self.program {
            let value = match *step {
                Step::Number(value) => value,
                Step::Variable => x,
                Step::Binary(op) => {
                    let right = pop(&mut stack)?;
                    let left = pop(&mut stack)?;
                    apply_binary(op, left, right)?
                },
                Step::Unary(function) => apply_function(function, pop(&mut stack)?)?,
            };
            stack.push(value);
        }

        pop(&mut stack)
    }

    /// Returns `true` if the function reads its argument.
    #[must_use]
    pub fn uses_variable(&self) -> bool {
        self.program.contains(&Step::Variable)
    }

    /// Converts the function into a boxed closure.
    ///
    /// # Example
    /// ```
    /// use calcpad::evaluator::compile::compile;
    ///
    /// let square = compile("x ^ 2").unwrap().into_closure();
    /// assert_eq!(square(3.0), Ok(9.0));
    /// ```
    #[must_use]
    pub fn into_closure(self) -> Box<dyn Fn(f64) -> EvalResult<f64>> {
        Box::new(move |x| self.call(x))
    }
}

impl fmt::Display for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x ->")?;
        for step in &self.program {
            write!(f, " {step}")?;
        }
        Ok(())
    }
}

/// Compiles an infix expression into a reusable function of `x`.
///
/// The postfix stream goes through the same stack walk as evaluation, so
/// malformed input fails here rather than on every call.
///
/// # Errors
/// [`EvalError::UnexpectedToken`](crate::error::EvalError),
/// [`EvalError::MissingOperand`](crate::error::EvalError) or
/// [`EvalError::OperandCountMismatch`](crate::error::EvalError) if the
/// expression is malformed.
///
/// # Example
/// ```
/// use calcpad::evaluator::compile::compile;
///
/// let f = compile("2 * x + 1").unwrap();
/// assert_eq!(f.call(3.0), Ok(7.0));
/// assert_eq!(f.call(-0.5), Ok(0.0));
/// assert!(compile("2 +").is_err());
/// ```
pub fn compile(infix: &str) -> EvalResult<CompiledFunction> {
    let mut compiler = Compiler::default();
    compiler.run(&shunt(tokenize(infix)?))?;
    let function = CompiledFunction { program: compiler.program };

    debug!("compiled {infix:?} to {function}");
    Ok(function)
}
