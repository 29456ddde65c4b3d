use flume::{Receiver, Sender};
use log::{debug, trace, warn};

use crate::{
    error::ArgumentError,
    expression::{
        config::BuilderConfig,
        token::{DEFAULT_EXPRESSION, DELIMITER, Function, NamedNumber, Operator, TokenKind},
    },
};

/// Result type used by fallible builder operations.
pub type BuildResult<T> = Result<T, ArgumentError>;

/// Builds a space-delimited infix expression one key at a time.
///
/// Every edit keeps the text a coherent token stream: juxtaposed operands get
/// an implicit `*`, a lone decimal separator is dropped before anything that
/// cannot continue a number, operators replace a pending operator instead of
/// stacking, and closing parentheses are only accepted when one is open.
///
/// The text in progress ([`text`](Self::text)) is not guaranteed to be
/// complete. [`finalize`](Self::finalize) trims dangling tokens and closes
/// open parentheses, and its result is what the evaluator expects.
///
/// # Example
/// ```
/// use calcpad::expression::builder::ExpressionBuilder;
///
/// let mut builder = ExpressionBuilder::new();
///
/// builder.add_digit('2')?
///        .add_opening_parenthesis()
///        .add_digit('1')?
///        .add_operator('+')?
///        .add_pi();
///
/// assert_eq!(builder.text(), "2 * ( 1 + p");
/// assert_eq!(builder.finalize(), "2 * ( 1 + p )");
/// # Ok::<(), calcpad::error::ArgumentError>(())
/// ```
#[derive(Debug)]
pub struct ExpressionBuilder {
    text:                      String,
    last_token:                TokenKind,
    open_parentheses:          usize,
    can_add_decimal_separator: bool,
    config:                    BuilderConfig,
    published:                 String,
    subscribers:               Vec<Sender<String>>,
}

impl Default for ExpressionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBuilder {
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Creates an empty builder with an explicit configuration.
    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        Self { text: DEFAULT_EXPRESSION.to_string(),
               last_token: TokenKind::None,
               open_parentheses: 0,
               can_add_decimal_separator: true,
               config,
               published: DEFAULT_EXPRESSION.to_string(),
               subscribers: Vec::new() }
    }

    /// The expression in its current, possibly incomplete, state.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The kind of the most recently added token.
    #[must_use]
    pub const fn last_token(&self) -> TokenKind {
        self.last_token
    }

    /// The number of opening parentheses not yet matched.
    #[must_use]
    pub const fn open_parentheses(&self) -> usize {
        self.open_parentheses
    }

    /// Whether [`add_decimal_separator`](Self::add_decimal_separator) would
    /// change the expression.
    #[must_use]
    pub const fn can_add_decimal_separator(&self) -> bool {
        self.can_add_decimal_separator
    }

    /// Whether [`add_closing_parenthesis`](Self::add_closing_parenthesis)
    /// would change the expression. Parentheses may not be empty.
    #[must_use]
    pub fn can_add_closing_parenthesis(&self) -> bool {
        self.open_parentheses > 0 && self.last_token != TokenKind::OpeningParenthesis
    }

    /// Returns `true` if nothing has been added since creation or the last
    /// clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_token == TokenKind::None
    }

    /// The configuration this builder was created with.
    #[must_use]
    pub const fn config(&self) -> BuilderConfig {
        self.config
    }

    /// Subscribes to text changes.
    ///
    /// The receiver gets the current text right away, then one message after
    /// every public call that changed the text. Dropping the receiver
    /// unsubscribes.
    ///
    /// # Example
    /// ```
    /// use calcpad::expression::builder::ExpressionBuilder;
    ///
    /// let mut builder = ExpressionBuilder::new();
    /// let changes = builder.subscribe();
    ///
    /// builder.add_digit('4')?.add_operator('^')?;
    /// builder.add_closing_parenthesis(); // no-op, nothing sent
    ///
    /// let seen: Vec<String> = changes.try_iter().collect();
    /// assert_eq!(seen, ["0", "4", "4 ^"]);
    /// # Ok::<(), calcpad::error::ArgumentError>(())
    /// ```
    pub fn subscribe(&mut self) -> Receiver<String> {
        let (sender, receiver) = flume::unbounded();
        if sender.send(self.text.clone()).is_ok() {
            self.subscribers.push(sender);
        }
        receiver
    }

    /// Adds a digit.
    ///
    /// A digit directly after another digit or a decimal separator continues
    /// the same number. The default `"0"` is replaced rather than extended.
    ///
    /// # Errors
    /// Returns [`ArgumentError::NotADigit`] if `digit` is not `0`-`9`.
    pub fn add_digit(&mut self, digit: char) -> BuildResult<&mut Self> {
        if !digit.is_ascii_digit() {
            warn!("rejected digit {digit:?}");
            return Err(ArgumentError::NotADigit { found: digit });
        }

        self.push_digit(digit);
        self.publish();
        Ok(self)
    }

    /// Adds π, written `p`.
    pub fn add_pi(&mut self) -> &mut Self {
        self.push_named_number(NamedNumber::Pi);
        self.publish();
        self
    }

    /// Adds Euler's number, written `e`.
    pub fn add_e(&mut self) -> &mut Self {
        self.push_named_number(NamedNumber::E);
        self.publish();
        self
    }

    /// Adds the placeholder variable `x`.
    ///
    /// Does nothing unless the configuration enables the placeholder.
    pub fn add_variable_placeholder(&mut self) -> &mut Self {
        if self.config.supports_variable() {
            self.push_named_number(NamedNumber::Variable);
            self.publish();
        } else {
            trace!("variable placeholder disabled, ignoring");
        }
        self
    }

    /// Adds the configured decimal separator.
    ///
    /// Does nothing if the current number already has one. Anywhere a number
    /// cannot be continued a `0` is inserted first, so `.5` is written as
    /// `0.5`.
    ///
    /// # Example
    /// ```
    /// use calcpad::expression::{builder::ExpressionBuilder, config::BuilderConfig};
    ///
    /// let mut builder = ExpressionBuilder::with_config(BuilderConfig::default().decimal_separator(','));
    ///
    /// builder.add_digit('1')?
    ///        .add_operator('+')?
    ///        .add_decimal_separator()
    ///        .add_digit('5')?
    ///        .add_decimal_separator();
    ///
    /// assert_eq!(builder.text(), "1 + 0,5");
    /// # Ok::<(), calcpad::error::ArgumentError>(())
    /// ```
    pub fn add_decimal_separator(&mut self) -> &mut Self {
        self.push_decimal_separator();
        self.publish();
        self
    }

    /// Adds a binary operator: `+ - × * ÷ / ^`, where `×` and `÷` are written
    /// as `*` and `/`.
    ///
    /// An operator replaces a pending operator or decimal separator. Only `-`
    /// may start an expression (written `0 -`), and a `-` right after `(`
    /// becomes `( 0 -`. In any other position where no operand precedes it,
    /// the request is ignored.
    ///
    /// # Errors
    /// Returns [`ArgumentError::UnknownOperator`] for any other character.
    pub fn add_operator(&mut self, op: char) -> BuildResult<&mut Self> {
        let Some(operator) = Operator::from_char(op) else {
            warn!("rejected operator {op:?}");
            return Err(ArgumentError::UnknownOperator { found: op });
        };

        self.push_operator(operator);
        self.publish();
        Ok(self)
    }

    /// Adds a function by name: `sin`, `cos`, `tg`, `ctg`, `sqrt`, `√`,
    /// `ln`, `lg`, `abs`, `floor`, `ceil` or `sign`, in any letter case.
    ///
    /// # Errors
    /// Returns [`ArgumentError::UnknownFunction`] for any other name.
    pub fn add_function(&mut self, name: &str) -> BuildResult<&mut Self> {
        if Function::from_name(name).is_none() {
            warn!("rejected function {name:?}");
            return Err(ArgumentError::UnknownFunction { name: name.to_string() });
        }

        self.push_function(&name.to_lowercase());
        self.publish();
        Ok(self)
    }

    /// Adds `(`.
    pub fn add_opening_parenthesis(&mut self) -> &mut Self {
        self.push_opening_parenthesis();
        self.publish();
        self
    }

    /// Adds `)` if a parenthesis is open and would not be left empty.
    pub fn add_closing_parenthesis(&mut self) -> &mut Self {
        self.push_closing_parenthesis();
        self.publish();
        self
    }

    /// Removes the most recently added token and returns its text.
    ///
    /// Digits, constants, operators, separators and parentheses are one
    /// character each; a function is removed as a whole name. Returns `None`
    /// if the builder is empty.
    ///
    /// # Example
    /// ```
    /// use calcpad::expression::{builder::ExpressionBuilder, token::TokenKind};
    ///
    /// let mut builder = ExpressionBuilder::new();
    /// assert_eq!(builder.remove_last_token(), None);
    ///
    /// builder.add_digit('5')?.add_operator('+')?.add_function("tg")?;
    ///
    /// assert_eq!(builder.remove_last_token().as_deref(), Some("tg"));
    /// assert_eq!(builder.text(), "5 +");
    /// assert_eq!(builder.last_token(), TokenKind::Operator);
    /// # Ok::<(), calcpad::error::ArgumentError>(())
    /// ```
    pub fn remove_last_token(&mut self) -> Option<String> {
        let removed = self.pop_token();
        self.publish();
        removed
    }

    /// Resets the builder to the empty `"0"` state.
    pub fn clear(&mut self) -> &mut Self {
        self.text.clear();
        self.text.push_str(DEFAULT_EXPRESSION);
        self.open_parentheses = 0;
        self.set_last_token(TokenKind::None);
        self.publish();
        self
    }

    /// Completes the expression and returns it.
    ///
    /// Trailing functions, operators, decimal separators and opening
    /// parentheses are removed, then every open parenthesis is closed. The
    /// builder keeps the completed text.
    ///
    /// # Example
    /// ```
    /// use calcpad::expression::builder::ExpressionBuilder;
    ///
    /// let mut builder = ExpressionBuilder::new();
    ///
    /// builder.add_opening_parenthesis()
    ///        .add_digit('3')?
    ///        .add_operator('*')?
    ///        .add_opening_parenthesis()
    ///        .add_function("sin")?;
    ///
    /// assert_eq!(builder.finalize(), "( 3 )");
    /// assert_eq!(builder.open_parentheses(), 0);
    /// # Ok::<(), calcpad::error::ArgumentError>(())
    /// ```
    pub fn finalize(&mut self) -> String {
        while self.last_token.is_dangling() {
            self.pop_token();
        }
        while self.can_add_closing_parenthesis() {
            self.push_closing_parenthesis();
        }

        self.publish();
        debug!("finalized expression {:?}", self.text);
        self.text.clone()
    }

    fn push_digit(&mut self, digit: char) {
        self.clear_if_default();

        match self.last_token {
            TokenKind::None | TokenKind::Digit | TokenKind::DecimalSeparator => {},
            kind => {
                if kind.ends_operand() {
                    self.push_operator(Operator::Multiply);
                }
                self.text.push(DELIMITER);
            },
        }

        self.text.push(digit);
        self.set_last_token(TokenKind::Digit);
    }

    fn push_named_number(&mut self, number: NamedNumber) {
        self.clear_if_default();
        self.prepare_operand();

        self.text.push_str(number.lexeme());
        self.set_last_token(TokenKind::NamedNumber);
    }

    fn push_decimal_separator(&mut self) {
        if !self.can_add_decimal_separator {
            return;
        }

        if !matches!(self.last_token, TokenKind::None | TokenKind::Digit) {
            if self.last_token.ends_operand() {
                self.push_operator(Operator::Multiply);
            }
            self.text.push(DELIMITER);
            self.text.push('0');
        }

        self.text.push(self.config.separator());
        self.set_last_token(TokenKind::DecimalSeparator);
    }

    fn push_operator(&mut self, operator: Operator) {
        if operator == Operator::Subtract && self.last_token == TokenKind::OpeningParenthesis {
            self.push_digit('0');
        } else if operator != Operator::Subtract && self.last_token == TokenKind::None {
            return;
        }

        if matches!(self.last_token, TokenKind::Operator | TokenKind::DecimalSeparator) {
            self.pop_token();
        }

        let leading_minus = operator == Operator::Subtract && self.last_token == TokenKind::None;
        if self.last_token.ends_operand() || leading_minus {
            self.text.push(DELIMITER);
            self.text.push(operator.symbol());
            self.set_last_token(TokenKind::Operator);
        }
    }

    fn push_function(&mut self, lexeme: &str) {
        self.clear_if_default();
        self.prepare_operand();

        self.text.push_str(lexeme);
        self.set_last_token(TokenKind::Function);
    }

    fn push_opening_parenthesis(&mut self) {
        self.clear_if_default();
        self.prepare_operand();

        self.text.push('(');
        self.open_parentheses += 1;
        self.set_last_token(TokenKind::OpeningParenthesis);
    }

    fn push_closing_parenthesis(&mut self) {
        if !self.can_add_closing_parenthesis() {
            return;
        }

        self.text.push(DELIMITER);
        self.text.push(')');
        self.open_parentheses -= 1;
        self.set_last_token(TokenKind::ClosingParenthesis);
    }

    /// Makes room for a token that starts a new operand: drops a lone
    /// separator, inserts the implicit `*` and the delimiter.
    fn prepare_operand(&mut self) {
        if self.last_token == TokenKind::DecimalSeparator {
            self.pop_token();
            self.clear_if_default();
        }
        if self.last_token.ends_operand() {
            self.push_operator(Operator::Multiply);
        }
        if self.last_token != TokenKind::None {
            self.text.push(DELIMITER);
        }
    }

    fn pop_token(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let removed = if self.last_token == TokenKind::Function {
            let start = self.text
                            .rfind(DELIMITER)
                            .map_or(0, |index| index + DELIMITER.len_utf8());
            self.text.split_off(start)
        } else {
            match self.last_token {
                TokenKind::OpeningParenthesis => {
                    self.open_parentheses = self.open_parentheses.saturating_sub(1);
                },
                TokenKind::ClosingParenthesis => self.open_parentheses += 1,
                _ => {},
            }
            self.text.pop().map(String::from).unwrap_or_default()
        };

        if self.text.is_empty() {
            self.text.push_str(DEFAULT_EXPRESSION);
            self.set_last_token(TokenKind::None);
            return Some(removed);
        }

        if self.text.ends_with(DELIMITER) {
            self.text.pop();
        }
        self.rederive_last_token();

        Some(removed)
    }

    /// Recomputes the last token kind and separator availability from the
    /// text after a removal.
    fn rederive_last_token(&mut self) {
        let Some(last) = self.text.chars().next_back() else {
            return;
        };
        let separator = self.config.separator();

        self.last_token = if last.is_ascii_digit() {
            TokenKind::Digit
        } else if last == separator {
            TokenKind::DecimalSeparator
        } else if NamedNumber::CHARS.contains(&last) {
            TokenKind::NamedNumber
        } else if Operator::from_char(last).is_some() {
            TokenKind::Operator
        } else if last == '(' {
            TokenKind::OpeningParenthesis
        } else if last == ')' {
            TokenKind::ClosingParenthesis
        } else {
            TokenKind::Function
        };

        self.can_add_decimal_separator = match self.last_token {
            TokenKind::DecimalSeparator => false,
            TokenKind::Digit => {
                let segment = self.text.rsplit(DELIMITER).next().unwrap_or_default();
                !segment.contains(separator)
            },
            _ => true,
        };
    }

    fn set_last_token(&mut self, kind: TokenKind) {
        self.can_add_decimal_separator = match kind {
            TokenKind::DecimalSeparator => false,
            TokenKind::Digit => self.can_add_decimal_separator,
            _ => true,
        };
        self.last_token = kind;
    }

    /// A lone default `"0"` is replaced by the next operand instead of being
    /// multiplied with it.
    fn clear_if_default(&mut self) {
        if self.text == DEFAULT_EXPRESSION {
            self.text.clear();
            self.set_last_token(TokenKind::None);
        }
    }

    fn publish(&mut self) {
        if self.published == self.text {
            return;
        }

        self.published.clone_from(&self.text);
        trace!("expression changed to {:?}", self.text);

        let text = &self.text;
        self.subscribers
            .retain(|subscriber| subscriber.send(text.clone()).is_ok());
    }
}

impl std::fmt::Display for ExpressionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
