use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// `echo`
    #[token("echo")]
    Echo,
    /// Identifier tokens such as `name` or `_tmp2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Numeric literal tokens, such as `42`, `-7` or `3.25`.
    #[regex(r"-?[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"-?[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens with escapes decoded.
    #[token("\"", lex_string)]
    Str(String),
    /// `$`
    #[token("$")]
    Dollar,
    /// `=`
    #[token("=")]
    Equals,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// Statement separator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input. Appended by [`tokenize`], never matched from text.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Echo => write!(f, "'echo'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Number(n) => write!(f, "number {n}"),
            Self::Str(s) => write!(f, "string \"{}\"", s.escape_default()),
            Self::Dollar => write!(f, "'$'"),
            Self::Equals => write!(f, "'='"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Dot => write!(f, "'.'"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so that
/// columns can be computed for every token.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// The error reported by the generated lexer before a position is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token starts at this character.
    #[default]
    UnexpectedCharacter,
    /// A string literal reached the end of input.
    UnterminatedString,
}

/// A token together with its raw text and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token kind and its decoded payload.
    pub token:  Token,
    /// The exact source text of the token.
    pub text:   String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character, counted in characters.
    pub column: usize,
}

/// Converts source text into a token sequence terminated by [`Token::Eof`].
///
/// Comments are stripped first (see [`strip_comments`]). Tokenization stops at
/// the first character that cannot start a token, and no partial token stream
/// is returned in that case.
///
/// # Errors
/// Returns a [`LexError`] for an unexpected character or an unterminated
/// string literal.
///
/// # Example
/// ```
/// use fab::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("echo $x").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|l| l.token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Echo, Token::Dollar, Token::Identifier("x".into()), Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, LexError> {
    let stripped = strip_comments(source);
    let mut lexer = Token::lexer_with_extras(&stripped, LexerExtras::default());
    let mut tokens = Vec::new();

    loop {
        // Skipped whitespace never contains a newline, so a token always
        // starts on the line the lexer is on before it is produced.
        let (line, line_start) = (lexer.extras.line, lexer.extras.line_start);
        let Some(result) = lexer.next() else {
            break;
        };
        let span = lexer.span();

        match result {
            Ok(token) => {
                tokens.push(Lexeme { token,
                                     text: lexer.slice().to_string(),
                                     line,
                                     column: column_at(&stripped, line_start, span.start) });
            },
            Err(LexErrorKind::UnterminatedString) => {
                let end_line_start = lexer.extras.line_start;
                return Err(LexError::UnterminatedString { line:   lexer.extras.line,
                                                          column: column_at(&stripped,
                                                                            end_line_start,
                                                                            span.end), });
            },
            Err(LexErrorKind::UnexpectedCharacter) => {
                let ch = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedCharacter { ch,
                                                           line,
                                                           column: column_at(&stripped,
                                                                             line_start,
                                                                             span.start) });
            },
        }
    }

    tokens.push(Lexeme { token:  Token::Eof,
                         text:   String::new(),
                         line:   lexer.extras.line,
                         column: column_at(&stripped, lexer.extras.line_start, stripped.len()), });

    Ok(tokens)
}

/// Blanks out `/* ... */` and `// ...` comments.
///
/// Every comment character is replaced by a space while newlines are kept, so
/// lines and columns of the remaining tokens are unchanged. A block comment
/// ends at the first `*/` and may span lines; a `//` inside it does not start
/// a line comment. A `/*` with no closing `*/` is left untouched. Comment
/// markers inside string literals are part of the string.
///
/// # Example
/// ```
/// use fab::interpreter::lexer::strip_comments;
///
/// assert_eq!(strip_comments("echo 1 // one"), "echo 1       ");
/// assert_eq!(strip_comments("/* a\n// b */echo"), "    \n       echo");
/// ```
#[must_use]
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(ch) = rest.chars().next() {
        if rest.starts_with("/*")
           && let Some(end) = rest[2..].find("*/")
        {
            let comment = &rest[..end + 4];
            blank(comment, &mut out);
            rest = &rest[comment.len()..];
        } else if rest.starts_with("//") {
            let end = rest.find('\n').unwrap_or(rest.len());
            blank(&rest[..end], &mut out);
            rest = &rest[end..];
        } else if ch == '"' {
            let end = string_literal_len(rest);
            out.push_str(&rest[..end]);
            rest = &rest[end..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

fn blank(comment: &str, out: &mut String) {
    out.extend(comment.chars().map(|c| if c == '\n' { '\n' } else { ' ' }));
}

/// Byte length of the string literal at the start of `text`, including both
/// quotes, or the rest of `text` if it is never closed.
fn string_literal_len(text: &str) -> usize {
    let mut chars = text.char_indices().skip(1);
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            },
            '"' => {
                return chars.next().map_or(text.len(), |(i, _)| i);
            },
            _ => {},
        }
    }
    text.len()
}

fn column_at(source: &str, line_start: usize, offset: usize) -> usize {
    source[line_start..offset].chars().count() + 1
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Consumes a string literal after its opening quote.
///
/// `\n`, `\r`, `\t`, `\"` and `\\` are decoded; any other escaped character is
/// kept as-is without the backslash. Newlines inside the literal advance the
/// line counter.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let base = lex.span().end;
    let mut value = String::new();
    let mut consumed = None;
    let mut newlines = 0;
    let mut last_line_start = None;
    let mut chars = lex.remainder().char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                consumed = Some(i + 1);
                break;
            },
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, 't')) => value.push('\t'),
                Some((j, other)) => {
                    if other == '\n' {
                        newlines += 1;
                        last_line_start = Some(base + j + 1);
                    }
                    value.push(other);
                },
                None => break,
            },
            '\n' => {
                newlines += 1;
                last_line_start = Some(base + i + 1);
                value.push(c);
            },
            _ => value.push(c),
        }
    }

    lex.extras.line += newlines;
    if let Some(line_start) = last_line_start {
        lex.extras.line_start = line_start;
    }

    match consumed {
        Some(len) => {
            lex.bump(len);
            Ok(value)
        },
        None => {
            lex.bump(lex.remainder().len());
            Err(LexErrorKind::UnterminatedString)
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|l| l.token).collect()
    }

    #[test]
    fn assignment_tokens() {
        assert_eq!(kinds("$word = \"Hello\"\n"),
                   vec![Token::Dollar,
                        Token::Identifier("word".into()),
                        Token::Equals,
                        Token::Str("Hello".into()),
                        Token::NewLine,
                        Token::Eof]);
    }

    #[test]
    fn echo_is_a_keyword_only_as_whole_word() {
        assert_eq!(kinds("echo echoes"),
                   vec![Token::Echo, Token::Identifier("echoes".into()), Token::Eof]);
    }

    #[test]
    fn numbers() {
        assert_eq!(kinds("17 -3 0.25"),
                   vec![Token::Number(17.0), Token::Number(-3.0), Token::Number(0.25), Token::Eof]);
    }

    #[test]
    fn second_dot_is_not_part_of_number() {
        assert_eq!(kinds("1.5.2"),
                   vec![Token::Number(1.5), Token::Dot, Token::Number(2.0), Token::Eof]);
        assert_eq!(kinds("7."), vec![Token::Number(7.0), Token::Dot, Token::Eof]);
    }

    #[test]
    fn string_escapes() {
        assert_eq!(kinds(r#""a\nb\t\"q\"\\ \x""#),
                   vec![Token::Str("a\nb\t\"q\"\\ x".into()), Token::Eof]);
    }

    #[test]
    fn unterminated_string_reports_end_of_input() {
        let err = tokenize("echo \"abc").unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 10 });
    }

    #[test]
    fn unexpected_character() {
        let err = tokenize("echo 1\n$a = @").unwrap_err();
        assert_eq!(err,
                   LexError::UnexpectedCharacter { ch:     '@',
                                                   line:   2,
                                                   column: 6, });
    }

    #[test]
    fn lone_minus_is_rejected() {
        assert!(matches!(tokenize("echo -").unwrap_err(),
                         LexError::UnexpectedCharacter { ch: '-', .. }));
    }

    #[test]
    fn positions_are_tracked() {
        let tokens = tokenize("echo 1\n  $x = 2").unwrap();
        let dollar = &tokens[3];
        assert_eq!(dollar.token, Token::Dollar);
        assert_eq!((dollar.line, dollar.column), (2, 3));
        let newline = &tokens[2];
        assert_eq!((newline.line, newline.column), (1, 7));
    }

    #[test]
    fn multiline_string_advances_lines() {
        let tokens = tokenize("echo \"a\nb\"\necho 2").unwrap();
        let second_echo = tokens.iter().filter(|l| l.token == Token::Echo).nth(1).unwrap();
        assert_eq!((second_echo.line, second_echo.column), (3, 1));
    }

    #[test]
    fn comments_are_stripped() {
        assert_eq!(kinds("/* block\n// still block */ echo 1 // trailing"),
                   vec![Token::NewLine, Token::Echo, Token::Number(1.0), Token::Eof]);
    }

    #[test]
    fn comment_markers_inside_strings_are_kept() {
        assert_eq!(kinds("echo \"http://x /* y */\""),
                   vec![Token::Echo, Token::Str("http://x /* y */".into()), Token::Eof]);
    }

    #[test]
    fn unclosed_block_comment_is_an_error() {
        assert!(matches!(tokenize("/* never closed").unwrap_err(),
                         LexError::UnexpectedCharacter { ch: '/', line: 1, column: 1 }));
    }

    #[test]
    fn positions_after_block_comment_match_original_text() {
        let tokens = tokenize("/* x\n */ echo 1").unwrap();
        let echo = tokens.iter().find(|l| l.token == Token::Echo).unwrap();
        assert_eq!((echo.line, echo.column), (2, 5));
    }
}
