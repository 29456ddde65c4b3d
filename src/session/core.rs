use std::error::Error;

use flume::Receiver;
use log::{debug, warn};

use crate::{
    evaluator::{core::evaluate, format::format_number, ops::constant},
    expression::{
        builder::ExpressionBuilder,
        config::BuilderConfig,
        token::{DELIMITER, NamedNumber, Operator},
    },
    session::intent::Intent,
};

/// Drives an Expression Builder the way a calculator keypad does.
///
/// The session shows either the expression being edited or, after `=`, the
/// result next to the finalized expression. Any edit made while a result is
/// shown starts over from an empty expression.
///
/// # Example
/// ```
/// use calcpad::session::{core::Session, keys::parse_keys};
///
/// let mut session = Session::new();
///
/// session.apply_all(parse_keys("2*sqrt(9)=")?)?;
/// assert_eq!(session.display(), "2×√(9)");
/// assert_eq!(session.result(), Some("6"));
///
/// session.apply_all(parse_keys("5")?)?;
/// assert_eq!(session.display(), "5");
/// assert_eq!(session.result(), None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct Session {
    builder: ExpressionBuilder,
    result:  Option<String>,
}

impl Session {
    /// Creates a session with the default builder configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session whose builder uses `config`.
    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        Self { builder: ExpressionBuilder::with_config(config),
               result:  None, }
    }

    /// The underlying builder.
    #[must_use]
    pub const fn builder(&self) -> &ExpressionBuilder {
        &self.builder
    }

    /// The last calculated result, written with the configured decimal
    /// separator. `None` while an expression is being edited.
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// The expression as a keypad display shows it: without delimiters, with
    /// `×` for `*`, `√` for `sqrt` and `π` for `p`.
    #[must_use]
    pub fn display(&self) -> String {
        display_text(self.builder.text())
    }

    /// Subscribes to changes of the builder text. See
    /// [`ExpressionBuilder::subscribe`].
    pub fn subscribe(&mut self) -> Receiver<String> {
        self.builder.subscribe()
    }

    /// Completes the expression without evaluating it and returns it with
    /// `.` as the decimal point, ready for the evaluator. The builder keeps
    /// its own separator.
    pub fn finalize(&mut self) -> String {
        let text = self.builder.finalize();
        self.builder.config().to_invariant(&text)
    }

    /// Applies one key press.
    ///
    /// # Errors
    /// - [`ArgumentError`](crate::error::ArgumentError) if the builder
    ///   rejects the key, e.g. a digit intent holding a letter.
    /// - [`EvalError`](crate::error::EvalError) if `=` fails to evaluate the
    ///   expression. The finalized expression stays on display and no result
    ///   is stored.
    pub fn apply(&mut self, intent: Intent) -> Result<(), Box<dyn Error>> {
        if intent.is_edit() && self.result.take().is_some() {
            self.builder.clear();
        }

        match intent {
            Intent::Digit(digit) => {
                self.builder.add_digit(digit)?;
            },
            Intent::DecimalSeparator => {
                self.builder.add_decimal_separator();
            },
            Intent::Operator(op) => {
                self.builder.add_operator(op.symbol())?;
            },
            Intent::Function(function) => {
                self.builder.add_function(function.name())?;
            },
            Intent::Pi => {
                self.builder.add_pi();
            },
            Intent::E => {
                self.builder.add_e();
            },
            Intent::Variable => {
                self.builder.add_variable_placeholder();
            },
            Intent::OpeningParenthesis => {
                self.builder.add_opening_parenthesis();
            },
            Intent::ClosingParenthesis => {
                self.builder.add_closing_parenthesis();
            },
            Intent::RemoveLastToken => {
                self.builder.remove_last_token();
            },
            Intent::Clear => {
                self.result = None;
                self.builder.clear();
            },
            Intent::Calculate => self.calculate()?,
        }

        Ok(())
    }

    /// Applies key presses in order, stopping at the first error.
    pub fn apply_all<I>(&mut self, intents: I) -> Result<(), Box<dyn Error>>
        where I: IntoIterator<Item = Intent>
    {
        for intent in intents {
            self.apply(intent)?;
        }
        Ok(())
    }

    fn calculate(&mut self) -> Result<(), Box<dyn Error>> {
        if self.result.is_some() {
            return Ok(());
        }

        let expression = self.finalize();
        let display = self.display();
        let separator = self.builder.config().separator();

        if is_bare_number(&display, separator) {
            debug!("{display:?} is already a number");
            return Ok(());
        }

        let value = if display == "π" {
            constant(NamedNumber::Pi)
        } else if display == NamedNumber::E.lexeme() {
            constant(NamedNumber::E)
        } else {
            None
        };

        let result = match value {
            Some(value) => format_number(value),
            None => evaluate(&expression).inspect_err(|e| warn!("{expression:?}: {e}"))
                                         .map(format_number)?,
        };

        self.result = Some(result.replace('.', &separator.to_string()));
        Ok(())
    }
}

/// Formats builder text for display.
fn display_text(text: &str) -> String {
    text.replace(DELIMITER, "")
        .replace(Operator::Multiply.symbol(), "×")
        .replace("sqrt", "√")
        .replace(NamedNumber::Pi.lexeme(), "π")
}

fn is_bare_number(display: &str, separator: char) -> bool {
    display.chars()
           .all(|c| c.is_ascii_digit() || c == separator || c == '.' || c == ',')
}
