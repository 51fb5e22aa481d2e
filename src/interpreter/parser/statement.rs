use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, expect_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either an `echo` statement or an assignment. Parsing is
/// attempted in that order; if neither matches, an error naming the
/// offending token is returned.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Lexeme>
{
    if let Some(statement) = parse_echo(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    Err(unexpected(tokens.peek().copied(), "expected statement"))
}

/// Parses an `echo <expression>` statement.
///
/// If the next token is not `echo`, this function returns `Ok(None)` and does
/// not consume any input.
fn parse_echo<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Lexeme>
{
    if let Some(Lexeme { token: Token::Echo,
                         line,
                         .. }) = tokens.peek()
    {
        let line = *line;
        tokens.next();

        let expr = parse_expression(tokens)?;
        return Ok(Some(Statement::Echo { expr, line }));
    }

    Ok(None)
}

/// Parses an assignment of the form `$<identifier> = <expression>`.
///
/// Assigning to a name that is already bound is not distinguished from a
/// first assignment. If the next token is not `$`, this function returns
/// `Ok(None)` and does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the `$` is not followed by a name,
/// - `=` is missing,
/// - the expression is malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Lexeme>
{
    if let Some(Lexeme { token: Token::Dollar,
                         line,
                         .. }) = tokens.peek()
    {
        let line = *line;
        tokens.next();

        let name = expect_identifier(tokens, "expected variable name after $")?;
        expect(tokens, &Token::Equals, "expected '=' after variable name")?;

        let value = parse_expression(tokens)?;
        return Ok(Some(Statement::Assign { name, value, line }));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Expr, Statement},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::core::parse},
    };

    fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
        parse(&tokenize(source).unwrap())
    }

    #[test]
    fn assignment() {
        assert_eq!(parse_source("$word = \"Hello World\"").unwrap(),
                   vec![Statement::Assign { name:  "word".into(),
                                            value: Expr::StringLiteral { value: "Hello World".into(),
                                                                         line:  1, },
                                            line:  1, }]);
    }

    #[test]
    fn echo_records_its_line() {
        let statements = parse_source("\n\necho 5").unwrap();
        assert_eq!(statements[0].line_number(), 3);
    }

    #[test]
    fn missing_variable_name() {
        let err = parse_source("$ = 1").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { expected: "expected variable name after $".into(),
                                                 found:    "'='".into(),
                                                 line:     1,
                                                 column:   3, });
    }

    #[test]
    fn missing_equals() {
        let err = parse_source("$a 1").unwrap_err();
        assert_eq!(err.expected(), "expected '=' after variable name");
        assert_eq!(err.position(), (1, 4));
    }

    #[test]
    fn bare_expression_is_not_a_statement() {
        let err = parse_source("\"text\"").unwrap_err();
        assert_eq!(err.expected(), "expected statement");
        assert_eq!(err.to_string(),
                   "Syntax error at line 1, column 1: expected statement, found string \"text\".");
    }

    #[test]
    fn plain_identifier_is_not_a_statement() {
        let err = parse_source("print 1").unwrap_err();
        assert_eq!(err.expected(), "expected statement");
    }
}
