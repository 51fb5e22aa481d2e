use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            map::parse_map_literal,
            statement::parse_statement,
            utils::{expect, expect_identifier, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Statements are parsed in order until the end-of-file token. Newlines
/// between statements are skipped; a statement does not have to be followed
/// by one.
///
/// Grammar: `program := (statement NEWLINE?)* EOF`
///
/// # Errors
/// Returns the first `ParseError` encountered; no partial program is
/// returned.
///
/// # Example
/// ```
/// use fab::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("$a = 1\n\necho $a").unwrap();
/// let statements = parse(&tokens).unwrap();
///
/// assert_eq!(statements.len(), 2);
/// ```
pub fn parse(tokens: &[Lexeme]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        while let Some(Lexeme { token: Token::NewLine,
                                .. }) = iter.peek()
        {
            iter.next();
        }
        match iter.peek() {
            None
            | Some(Lexeme { token: Token::Eof,
                            .. }) => break,
            Some(_) => statements.push(parse_statement(&mut iter)?),
        }
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a full expression.
///
/// A primary expression may be followed by any number of `.$key` path
/// accesses, which associate to the left. Number literals take no path
/// suffix.
///
/// Grammar: `expression := primary ("." "$" IDENT)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut expr = parse_primary(tokens)?;
    if matches!(expr, Expr::NumberLiteral { .. }) {
        return Ok(expr);
    }

    while let Some(Lexeme { token: Token::Dot,
                            line,
                            .. }) = tokens.peek()
    {
        let line = *line;
        tokens.next();

        expect(tokens, &Token::Dollar, "expected $ after .")?;
        let key = expect_identifier(tokens, "expected key name after $")?;
        expr = Expr::PathAccess { base: Box::new(expr),
                                  key,
                                  line };
    }

    Ok(expr)
}

/// Parses a primary expression: a string, a number, a variable reference or
/// a map literal.
///
/// Grammar: `primary := STRING | NUMBER | "$" IDENT | map`
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.next() {
        Some(Lexeme { token: Token::Str(value),
                      line,
                      .. }) => Ok(Expr::StringLiteral { value: value.clone(),
                                                        line:  *line, }),
        Some(Lexeme { token: Token::Number(value),
                      line,
                      .. }) => Ok(Expr::NumberLiteral { value: *value,
                                                        line:  *line, }),
        Some(Lexeme { token: Token::Dollar,
                      line,
                      .. }) => {
            let name = expect_identifier(tokens, "expected variable name after $")?;
            Ok(Expr::Variable { name, line: *line })
        },
        Some(Lexeme { token: Token::LBracket,
                      line,
                      .. }) => parse_map_literal(tokens, *line),
        other => Err(unexpected(other, "expected expression")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse_source(source: &str) -> ParseResult<Vec<Statement>> {
        parse(&tokenize(source).unwrap())
    }

    fn echo_expr(source: &str) -> Expr {
        match parse_source(source).unwrap().remove(0) {
            Statement::Echo { expr, .. } => expr,
            other => panic!("expected echo, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_source("\n\n\n").unwrap(), vec![]);
        assert_eq!(parse_source("\necho 1\n\n\necho 2\n").unwrap().len(), 2);
    }

    #[test]
    fn statements_may_share_a_line() {
        assert_eq!(parse_source("$a = 1 echo $a").unwrap().len(), 2);
    }

    #[test]
    fn path_access_is_left_associative() {
        let expr = echo_expr("echo $a.$b.$c");
        let Expr::PathAccess { base, key, .. } = expr else {
            panic!("expected path access");
        };
        assert_eq!(key, "c");
        let Expr::PathAccess { base, key, .. } = *base else {
            panic!("expected nested path access");
        };
        assert_eq!(key, "b");
        assert_eq!(*base,
                   Expr::Variable { name: "a".into(),
                                    line: 1, });
    }

    #[test]
    fn path_access_on_map_literal() {
        assert!(matches!(echo_expr("echo [$a = 1].$a"), Expr::PathAccess { .. }));
    }

    #[test]
    fn number_literal_takes_no_path() {
        let err = parse_source("echo 1.$a").unwrap_err();
        assert_eq!(err.expected(), "expected statement");
        assert_eq!(err.position(), (1, 7));
    }

    #[test]
    fn dot_must_be_followed_by_dollar() {
        let err = parse_source("echo $a.b").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { expected: "expected $ after .".into(),
                                                 found:    "identifier 'b'".into(),
                                                 line:     1,
                                                 column:   9, });
    }

    #[test]
    fn missing_expression() {
        let err = parse_source("echo\n").unwrap_err();
        assert_eq!(err.expected(), "expected expression");
        assert_eq!(err.to_string(),
                   "Syntax error at line 1, column 5: expected expression, found newline.");
    }

    #[test]
    fn tokens_without_eof_still_fail_cleanly() {
        let mut tokens = tokenize("echo").unwrap();
        tokens.pop();
        let err = parse(&tokens).unwrap_err();
        assert_eq!(err.position(), (0, 0));
    }
}
