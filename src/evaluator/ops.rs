use std::f64::consts::{E, PI};

use crate::{
    error::EvalError,
    evaluator::core::EvalResult,
    expression::token::{Function, NamedNumber, Operator},
    util::num::{is_significant, sign},
};

/// The value of a constant, or `None` for the placeholder variable.
///
/// # Example
/// ```
/// use calcpad::{evaluator::ops::constant, expression::token::NamedNumber};
///
/// assert_eq!(constant(NamedNumber::Pi), Some(std::f64::consts::PI));
/// assert_eq!(constant(NamedNumber::Variable), None);
/// ```
#[must_use]
pub const fn constant(number: NamedNumber) -> Option<f64> {
    match number {
        NamedNumber::Pi => Some(PI),
        NamedNumber::E => Some(E),
        NamedNumber::Variable => None,
    }
}

/// Applies a binary operator.
///
/// Division and exponentiation check their operands against
/// [`ZERO_TOLERANCE`](crate::util::num::ZERO_TOLERANCE) instead of exact
/// zero.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] for `x / 0` with nonzero `x`.
/// - [`EvalError::IndeterminateZeroOverZero`] for `0 / 0`.
/// - [`EvalError::IndeterminateZeroPowerZero`] for `0 ^ 0`.
///
/// # Example
/// ```
/// use calcpad::{error::EvalError, evaluator::ops::apply_binary, expression::token::Operator};
///
/// assert_eq!(apply_binary(Operator::Power, 2.0, 10.0), Ok(1024.0));
/// assert_eq!(apply_binary(Operator::Divide, 1.0, 0.0), Err(EvalError::DivisionByZero));
/// assert_eq!(apply_binary(Operator::Divide, 0.0, 0.0),
///            Err(EvalError::IndeterminateZeroOverZero));
/// ```
pub fn apply_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide => divide(left, right),
        Operator::Power => power(left, right),
    }
}

fn divide(dividend: f64, divisor: f64) -> EvalResult<f64> {
    if is_significant(divisor) {
        Ok(dividend / divisor)
    } else if is_significant(dividend) {
        Err(EvalError::DivisionByZero)
    } else {
        Err(EvalError::IndeterminateZeroOverZero)
    }
}

fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    if is_significant(base) || is_significant(exponent) {
        Ok(base.powf(exponent))
    } else {
        Err(EvalError::IndeterminateZeroPowerZero)
    }
}

/// Applies a unary function.
///
/// `ctg` is computed as `1 / tan(x)` and inherits its singularities, so it
/// may return an infinite value.
///
/// # Errors
/// - [`EvalError::NegativeRootDomain`] for the square root of a negative
///   number.
/// - [`EvalError::NonPositiveLogarithmDomain`] for `ln` or `lg` of a
///   non-positive number.
///
/// # Example
/// ```
/// use calcpad::{error::EvalError, evaluator::ops::apply_function, expression::token::Function};
///
/// assert_eq!(apply_function(Function::Abs, -2.5), Ok(2.5));
/// assert_eq!(apply_function(Function::Sign, -0.5), Ok(-1.0));
/// assert_eq!(apply_function(Function::Sqrt, -1.0), Err(EvalError::NegativeRootDomain));
/// assert_eq!(apply_function(Function::Ln, 0.0),
///            Err(EvalError::NonPositiveLogarithmDomain));
/// ```
pub fn apply_function(function: Function, x: f64) -> EvalResult<f64> {
    match function {
        Function::Sin => Ok(x.sin()),
        Function::Cos => Ok(x.cos()),
        Function::Tg => Ok(x.tan()),
        Function::Ctg => Ok(1.0 / x.tan()),
        Function::Sqrt if x < 0.0 => Err(EvalError::NegativeRootDomain),
        Function::Sqrt => Ok(x.sqrt()),
        Function::Ln | Function::Lg if x <= 0.0 => Err(EvalError::NonPositiveLogarithmDomain),
        Function::Ln => Ok(x.ln()),
        Function::Lg => Ok(x.log10()),
        Function::Abs => Ok(x.abs()),
        Function::Floor => Ok(x.floor()),
        Function::Ceil => Ok(x.ceil()),
        Function::Sign => Ok(sign(x)),
    }
}
