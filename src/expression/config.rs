/// Settings an expression builder takes from its host environment.
///
/// # Example
/// ```
/// use calcpad::expression::config::BuilderConfig;
///
/// let config = BuilderConfig::default().decimal_separator(',')
///                                      .variable_placeholder(true);
///
/// assert_eq!(config.separator(), ',');
/// assert!(config.supports_variable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    decimal_separator:    char,
    variable_placeholder: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self { decimal_separator:    '.',
               variable_placeholder: false, }
    }
}

impl BuilderConfig {
    /// Sets the character written for the decimal-separator key, usually `.`
    /// or `,`.
    #[must_use]
    pub const fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Enables or disables insertion of the placeholder variable `x`.
    #[must_use]
    pub const fn variable_placeholder(mut self, enabled: bool) -> Self {
        self.variable_placeholder = enabled;
        self
    }

    /// The configured decimal separator.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.decimal_separator
    }

    /// Rewrites text written with this configuration so that numbers use `.`
    /// as their decimal point, which is what the evaluator reads.
    ///
    /// # Example
    /// ```
    /// use calcpad::expression::config::BuilderConfig;
    ///
    /// let config = BuilderConfig::default().decimal_separator('\u{066B}');
    ///
    /// assert_eq!(config.to_invariant("1\u{066B}5 * 2"), "1.5 * 2");
    /// ```
    #[must_use]
    pub fn to_invariant(&self, text: &str) -> String {
        text.replace(self.decimal_separator, ".")
    }

    /// Whether the placeholder variable may be inserted.
    #[must_use]
    pub const fn supports_variable(&self) -> bool {
        self.variable_placeholder
    }
}
