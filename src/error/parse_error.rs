#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A token did not match what the grammar required at this point.
    UnexpectedToken {
        /// Human-readable description of what the parser expected.
        expected: String,
        /// Description of the token that was found instead.
        found:    String,
        /// The source line of the offending token.
        line:     usize,
        /// The column of the offending token.
        column:   usize,
    },
}

impl ParseError {
    /// Returns the `(line, column)` position of the offending token.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedToken { line, column, .. } => (*line, *column),
        }
    }

    /// Returns the description of what the parser expected.
    #[must_use]
    pub fn expected(&self) -> &str {
        match self {
            Self::UnexpectedToken { expected, .. } => expected,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => write!(f,
                                                        "Syntax error at line {line}, column {column}: {expected}, found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
