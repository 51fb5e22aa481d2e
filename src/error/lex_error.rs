#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character that does not begin any token.
    UnexpectedCharacter {
        /// The offending character.
        ch:     char,
        /// The source line where the error occurred.
        line:   usize,
        /// The column (in characters) where the error occurred.
        column: usize,
    },
    /// A string literal was still open when the input ended.
    UnterminatedString {
        /// The line of the end of input.
        line:   usize,
        /// The column just past the last character of input.
        column: usize,
    },
}

impl LexError {
    /// Returns the `(line, column)` position of the error.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedCharacter { line, column, .. }
            | Self::UnterminatedString { line, column } => (*line, *column),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { ch, line, column } => write!(f,
                                                                     "Lexical error at line {line}, column {column}: Unexpected character '{}'.",
                                                                     ch.escape_default()),
            Self::UnterminatedString { line, column } => write!(f,
                                                                "Lexical error at line {line}, column {column}: Unterminated string literal."),
        }
    }
}

impl std::error::Error for LexError {}
