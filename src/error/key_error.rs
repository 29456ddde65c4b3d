#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents errors raised while reading a key script.
pub enum KeyError {
    /// A run of characters that does not name any key.
    UnexpectedKey {
        /// The unrecognized text.
        key:    String,
        /// Zero-based character column where it starts.
        column: usize,
    },
}

impl std::fmt::Display for KeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedKey { key, column } => {
                write!(f, "Error at column {column}: Unexpected key: {key}.")
            },
        }
    }
}

impl std::error::Error for KeyError {}
