#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting or evaluating an
/// expression.
///
/// The variants fall into two categories:
/// - invalid expressions (`UnexpectedToken`, `MissingOperand`,
///   `OperandCountMismatch`): the input string was not something the
///   expression builder produces;
/// - arithmetic domain errors: the expression is well formed but its value is
///   undefined. These are meant to be shown to the user as a recoverable
///   message.
pub enum EvalError {
    /// A lexeme could not be classified as a number, constant, operator,
    /// function or parenthesis, or appeared where it cannot be evaluated (a
    /// parenthesis in postfix input, the placeholder `x` outside a compiled
    /// function).
    UnexpectedToken {
        /// The offending lexeme.
        token:    String,
        /// Zero-based index of the lexeme in its stream.
        position: usize,
    },
    /// An operator or function found fewer operands on the stack than it
    /// needs.
    MissingOperand {
        /// The operator or function that ran short.
        token:    String,
        /// Zero-based index of the lexeme in the postfix stream.
        position: usize,
    },
    /// Evaluation finished with a number of values other than one on the
    /// stack.
    OperandCountMismatch {
        /// How many values were left.
        remaining: usize,
    },
    /// Division of a nonzero value by zero.
    DivisionByZero,
    /// `0 / 0`.
    IndeterminateZeroOverZero,
    /// `0 ^ 0`.
    IndeterminateZeroPowerZero,
    /// Square root of a negative number.
    NegativeRootDomain,
    /// Logarithm of zero or a negative number.
    NonPositiveLogarithmDomain,
}

impl EvalError {
    /// Returns `true` for arithmetic domain errors, the category a user can
    /// fix by changing the numbers rather than the shape of the expression.
    ///
    /// # Example
    /// ```
    /// use calcpad::error::EvalError;
    ///
    /// assert!(EvalError::DivisionByZero.is_arithmetic());
    /// assert!(!EvalError::OperandCountMismatch { remaining: 2 }.is_arithmetic());
    /// ```
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self,
                 Self::DivisionByZero
                 | Self::IndeterminateZeroOverZero
                 | Self::IndeterminateZeroPowerZero
                 | Self::NegativeRootDomain
                 | Self::NonPositiveLogarithmDomain)
    }

    /// Returns `true` if the input was not a well-formed expression.
    #[must_use]
    pub const fn is_invalid_expression(&self) -> bool {
        !self.is_arithmetic()
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Invalid expression: unexpected token '{token}' at position {position}.")
            },
            Self::MissingOperand { token, position } => write!(f,
                                                               "Invalid expression: '{token}' at position {position} is missing an operand."),
            Self::OperandCountMismatch { remaining } => write!(f,
                                                               "Invalid expression: expected exactly one value, found {remaining}."),
            Self::DivisionByZero => write!(f, "Division by zero equals infinity."),
            Self::IndeterminateZeroOverZero => write!(f, "0/0 is undefined."),
            Self::IndeterminateZeroPowerZero => write!(f, "0^0 is undefined."),
            Self::NegativeRootDomain => {
                write!(f, "A root of a negative number is not a real number.")
            },
            Self::NonPositiveLogarithmDomain => write!(f,
                                                       "A logarithm of a non-positive number is not a real number."),
        }
    }
}

impl std::error::Error for EvalError {}
