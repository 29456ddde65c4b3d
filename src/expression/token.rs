/// Separates lexemes in builder output and evaluator input.
pub const DELIMITER: char = ' ';

/// The text of a builder that holds no user input.
pub const DEFAULT_EXPRESSION: &str = "0";

/// Classifies the most recently appended lexeme of an expression.
///
/// Every insertion rule of the builder is a function of this kind, so the
/// set is closed and matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    /// Nothing has been added yet.
    #[default]
    None,
    /// A digit of a number.
    Digit,
    /// A constant (`p`, `e`) or the placeholder variable (`x`).
    NamedNumber,
    /// A decimal separator directly after a digit.
    DecimalSeparator,
    /// A binary operator.
    Operator,
    /// A function name.
    Function,
    /// `(`
    OpeningParenthesis,
    /// `)`
    ClosingParenthesis,
}

impl TokenKind {
    /// Returns `true` for tokens that close an operand, after which juxtaposed
    /// operands imply multiplication.
    #[must_use]
    pub const fn ends_operand(self) -> bool {
        matches!(self, Self::Digit | Self::NamedNumber | Self::ClosingParenthesis)
    }

    /// Returns `true` for tokens that may not end a finished expression.
    #[must_use]
    pub const fn is_dangling(self) -> bool {
        matches!(self,
                 Self::Function | Self::Operator | Self::DecimalSeparator | Self::OpeningParenthesis)
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`, also entered as `×`
    Multiply,
    /// `/`, also entered as `÷`
    Divide,
    /// `^`
    Power,
}

impl Operator {
    /// Maps an input character to an operator, normalizing the display glyphs
    /// `×` and `÷`.
    ///
    /// # Example
    /// ```
    /// use calcpad::expression::token::Operator;
    ///
    /// assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
    /// assert_eq!(Operator::from_char('%'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// The character written into expression text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A constant or the placeholder variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedNumber {
    /// π, written `p` (the evaluator also reads `п`).
    Pi,
    /// Euler's number, written `e`.
    E,
    /// The placeholder variable, written `x`.
    Variable,
}

impl NamedNumber {
    /// Characters that end a named-number lexeme.
    pub const CHARS: &'static [char] = &['p', 'п', 'e', 'x'];

    /// The lexeme written into expression text.
    #[must_use]
    pub const fn lexeme(self) -> &'static str {
        match self {
            Self::Pi => "p",
            Self::E => "e",
            Self::Variable => "x",
        }
    }
}

/// Defines the function set by generating the `Function` enum, its lookup
/// table and the list of accepted names.
///
/// Each entry provides:
/// - the enum variant,
/// - the accepted lexemes, canonical one first,
/// - whether the function binds tighter than `*`, `/` and `^` during postfix
///   conversion.
macro_rules! functions {
    (
        $(
            $variant:ident => {
                names: [$($name:literal),+ $(,)?],
                binds_tight: $tight:literal $(,)?
            }
        ),* $(,)?
    ) => {
        /// A unary function.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $($variant,)*
        }

        static FUNCTION_TABLE: &[(&str, Function)] = &[
            $($(
                ($name, Function::$variant),
            )+)*
        ];

        /// Every accepted function lexeme.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($($name,)+)*
        ];

        impl Function {
            /// The canonical lexeme of this function.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => [$($name),+][0],)*
                }
            }

            /// Returns `true` if a pending `*`, `/` or `^` pops this function
            /// off the operator stack, i.e. the function applies to the
            /// operand right after it before the product or power is formed.
            ///
            /// Only `sin`, `cos`, `tg`, `ctg` and the square root bind this
            /// way; the remaining functions capture the whole following
            /// product.
            #[must_use]
            pub const fn binds_tight(self) -> bool {
                match self {
                    $(Self::$variant => $tight,)*
                }
            }
        }
    };
}

functions! {
    Sin   => { names: ["sin"],       binds_tight: true },
    Cos   => { names: ["cos"],       binds_tight: true },
    Tg    => { names: ["tg"],        binds_tight: true },
    Ctg   => { names: ["ctg"],       binds_tight: true },
    Sqrt  => { names: ["sqrt", "√"], binds_tight: true },
    Ln    => { names: ["ln"],        binds_tight: false },
    Lg    => { names: ["lg"],        binds_tight: false },
    Abs   => { names: ["abs"],       binds_tight: false },
    Floor => { names: ["floor"],     binds_tight: false },
    Ceil  => { names: ["ceil"],      binds_tight: false },
    Sign  => { names: ["sign"],      binds_tight: false },
}

impl Function {
    /// Looks a function up by any of its names, ignoring case.
    ///
    /// # Example
    /// ```
    /// use calcpad::expression::token::Function;
    ///
    /// assert_eq!(Function::from_name("SIN"), Some(Function::Sin));
    /// assert_eq!(Function::from_name("√"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("tan"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        FUNCTION_TABLE.iter()
                      .find(|(lexeme, _)| *lexeme == name)
                      .map(|(_, function)| *function)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
