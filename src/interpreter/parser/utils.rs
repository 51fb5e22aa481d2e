use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::ParseResult,
    },
};

/// Builds the error for an unexpected token.
///
/// The error is positioned at `found`, or at line 0 when the stream ended
/// without an end-of-file token.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&Lexeme>, expected: &str)
                                                 -> ParseError {
    match found {
        Some(lexeme) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                      found:    lexeme.token.to_string(),
                                                      line:     lexeme.line,
                                                      column:   lexeme.column, },
        None => ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    Token::Eof.to_string(),
                                              line:     0,
                                              column:   0, },
    }
}

/// Consumes the next token, which must equal `expected_token`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected_token`: The token that must come next.
/// - `expected`: Description used in the error message.
///
/// # Errors
/// Returns a `ParseError` naming `expected` if the next token differs.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected_token: &Token,
                                                    expected: &str)
                                                    -> ParseResult<&'a Lexeme>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.next() {
        Some(lexeme) if lexeme.token == *expected_token => Ok(lexeme),
        other => Err(unexpected(other, expected)),
    }
}

/// Consumes an identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` naming `expected` if the next token is not an
/// identifier.
pub(in crate::interpreter::parser) fn expect_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                               expected: &str)
                                                               -> ParseResult<String>
    where I: Iterator<Item = &'a Lexeme>
{
    match tokens.next() {
        Some(Lexeme { token: Token::Identifier(name),
                      .. }) => Ok(name.clone()),
        other => Err(unexpected(other, expected)),
    }
}

/// Returns `true` if the next token equals `token`, without consuming it.
pub(in crate::interpreter::parser) fn peek_is<'a, I>(tokens: &mut Peekable<I>, token: &Token) -> bool
    where I: Iterator<Item = &'a Lexeme>
{
    tokens.peek().is_some_and(|lexeme| lexeme.token == *token)
}

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either a
/// comma, to continue the list, or the closing token, to end it. An
/// immediately encountered closing token produces an empty list. A trailing
/// comma is rejected by `parse_item`.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or if anything other than
/// a comma or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut items = Vec::new();
    if peek_is(tokens, closing) {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Lexeme { token: Token::Comma,
                          .. }) => {},
            Some(lexeme) if lexeme.token == *closing => break,
            other => return Err(unexpected(other, &format!("expected ',' or {closing}"))),
        }
    }
    Ok(items)
}
