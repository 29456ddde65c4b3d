#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a malformed argument passed to an expression builder operation.
///
/// These are caller errors: the builder never produces them on its own and
/// never recovers from them. The builder state is left untouched whenever one
/// is returned.
pub enum ArgumentError {
    /// `add_digit` received something other than an ASCII digit.
    NotADigit {
        /// The rejected character.
        found: char,
    },
    /// `add_operator` received a character outside of `+ - × * ÷ / ^`.
    UnknownOperator {
        /// The rejected character.
        found: char,
    },
    /// `add_function` received a name outside of the supported function set.
    UnknownFunction {
        /// The rejected name, as it was passed in.
        name: String,
    },
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotADigit { found } => {
                write!(f, "Invalid argument: '{found}' is not a digit.")
            },
            Self::UnknownOperator { found } => write!(f,
                                                      "Invalid argument: '{found}' is not a valid operator. Expected one of + - × * ÷ / ^"),
            Self::UnknownFunction { name } => write!(f,
                                                     "Invalid argument: '{name}' is not a valid function. Expected one of sin, cos, tg, ctg, sqrt, √, ln, lg, abs, floor, ceil, sign"),
        }
    }
}

impl std::error::Error for ArgumentError {}
