use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, expect_identifier, parse_comma_separated},
        },
    },
};

/// Parses a map literal of the form `[$key1 = expr1, ..., $keyN = exprN]`.
///
/// Entries are kept in the order they are written. Repeated keys are legal
/// here; they are collapsed when the map is evaluated. An empty map `[]` is
/// accepted, a trailing comma is not.
///
/// Grammar: `map := "[" ("$" IDENT "=" expression ("," "$" IDENT "=" expression)*)? "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `[`.
/// - `line`: Line number of the `[` token.
///
/// # Errors
/// Returns a `ParseError` if an entry is malformed or the list is not closed
/// by `]`.
pub fn parse_map_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Lexeme>
{
    let entries = parse_comma_separated(tokens, parse_map_entry, &Token::RBracket)?;

    Ok(Expr::MapLiteral { entries, line })
}

/// Parses one `$key = expression` entry.
fn parse_map_entry<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Expr)>
    where I: Iterator<Item = &'a Lexeme>
{
    expect(tokens, &Token::Dollar, "expected $ before map key")?;
    let key = expect_identifier(tokens, "expected key name after $")?;
    expect(tokens, &Token::Equals, "expected '=' after map key")?;
    let value = parse_expression(tokens)?;

    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Expr, Statement},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::core::parse},
    };

    fn assigned(source: &str) -> Result<Expr, ParseError> {
        let mut statements = parse(&tokenize(source).unwrap())?;
        match statements.remove(0) {
            Statement::Assign { value, .. } => Ok(value),
            other => panic!("expected assignment, got {other:?}"),
        }
    }

    fn keys(expr: &Expr) -> Vec<&str> {
        match expr {
            Expr::MapLiteral { entries, .. } => entries.iter().map(|(k, _)| k.as_str()).collect(),
            other => panic!("expected map literal, got {other:?}"),
        }
    }

    #[test]
    fn empty_map() {
        assert_eq!(assigned("$m = []").unwrap(),
                   Expr::MapLiteral { entries: vec![],
                                      line:    1, });
    }

    #[test]
    fn entries_keep_written_order_and_duplicates() {
        let expr = assigned("$m = [$b = 1, $a = 2, $b = 3]").unwrap();
        assert_eq!(keys(&expr), ["b", "a", "b"]);
    }

    #[test]
    fn nested_maps() {
        let expr = assigned("$m = [$inner = [$x = \"y\"], $n = 1]").unwrap();
        let Expr::MapLiteral { entries, .. } = expr else {
            panic!("expected map literal");
        };
        assert_eq!(keys(&entries[0].1), ["x"]);
    }

    #[test]
    fn trailing_comma_is_rejected() {
        let err = assigned("$m = [$a = 1,]").unwrap_err();
        assert_eq!(err.expected(), "expected $ before map key");
        assert_eq!(err.position(), (1, 14));
    }

    #[test]
    fn missing_separator() {
        let err = assigned("$m = [$a = 1 $b = 2]").unwrap_err();
        assert_eq!(err.expected(), "expected ',' or ']'");
    }

    #[test]
    fn unclosed_map() {
        let err = assigned("$m = [$a = 1").unwrap_err();
        assert_eq!(err.to_string(),
                   "Syntax error at line 1, column 13: expected ',' or ']', found end of input.");
    }

    #[test]
    fn missing_equals_in_entry() {
        let err = assigned("$m = [$a 1]").unwrap_err();
        assert_eq!(err.expected(), "expected '=' after map key");
    }
}
