/// Lexical errors.
///
/// Raised while turning source text into tokens: characters that do not start
/// any token, and string literals that run into the end of input.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the grammar violations detected while building statements from the
/// token stream. Every error names what the parser expected and what it found.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while executing statements or
/// invoking native extension entries from host code.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error produced by one run of the pipeline.
///
/// Each stage reports its own error type; this enum lets callers propagate
/// all of them through a single `?` chain.
pub enum FabError {
    /// Tokenization failed.
    Lex(LexError),
    /// Parsing failed.
    Parse(ParseError),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for FabError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for FabError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for FabError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for FabError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
