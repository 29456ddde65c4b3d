use std::fmt;

use crate::expression::token::{Function, Operator};

/// A single key press on the calculator.
///
/// Every variant maps to one Expression Builder operation, except
/// [`Intent::Calculate`], which the session handles itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A digit key. Anything but `0`-`9` is rejected by the builder.
    Digit(char),
    /// The decimal separator key. The builder writes the configured
    /// separator regardless of the key that was pressed.
    DecimalSeparator,
    /// A binary operator key.
    Operator(Operator),
    /// A function key.
    Function(Function),
    /// `π`
    Pi,
    /// `e`
    E,
    /// The placeholder variable `x`.
    Variable,
    /// `(`
    OpeningParenthesis,
    /// `)`
    ClosingParenthesis,
    /// Backspace.
    RemoveLastToken,
    /// Clears the expression and the result.
    Clear,
    /// `=`
    Calculate,
}

impl Intent {
    /// Returns `true` for intents that edit the expression.
    ///
    /// Editing after a result has been shown starts a new expression.
    #[must_use]
    pub const fn is_edit(self) -> bool {
        !matches!(self, Self::Clear | Self::Calculate)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{digit}"),
            Self::DecimalSeparator => write!(f, "."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Pi => write!(f, "π"),
            Self::E => write!(f, "e"),
            Self::Variable => write!(f, "x"),
            Self::OpeningParenthesis => write!(f, "("),
            Self::ClosingParenthesis => write!(f, ")"),
            Self::RemoveLastToken => write!(f, "<"),
            Self::Clear => write!(f, "C"),
            Self::Calculate => write!(f, "="),
        }
    }
}
