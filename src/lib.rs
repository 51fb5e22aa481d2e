//! # fab
//!
//! fab is a small scripting language interpreter written in Rust.
//! Scripts bind strings, numbers and nested ordered maps to `$variables`,
//! read map entries through dotted paths, and print values with `echo`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    error::FabError,
    interpreter::{
        evaluator::{core::execute, environment::Environment},
        lexer::tokenize,
        parser::core::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of a script as a tree. The AST is built by the parser
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of statement and expression forms.
/// - Attaches source lines to every node for diagnostics.
pub mod ast;
/// Provides unified error types for lexing, parsing, and execution.
///
/// This module defines all errors that can be raised while running a script.
/// Each stage has its own error enum carrying the position of the failure;
/// `FabError` wraps them for callers that run the whole pipeline.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers for user feedback.
/// - Implements `Display` and `std::error::Error` for every error type.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and native extensions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the registration seam for host-supplied native libraries.
pub mod interpreter;
/// General utilities.
///
/// # Responsibilities
/// - Render numbers in the canonical fixed-point print form.
pub mod util;

/// The script run by the command-line tool when no file is given.
pub const DEMO_SCRIPT: &str = r#"/*
 * fab demo: variables, maps and paths.
 */
$greeting = "Hello World"
echo $greeting

// Maps keep their insertion order.
$user = [$name = "Sebastian", $age = 17, $home = [$city = "Vienna"]]
echo $user
echo $user.$name
echo $user.$home.$city

// Missing variables and keys are null.
echo $user.$email
echo $nobody

$pi = 3.14159265358979
echo $pi
"#;

/// Runs a script against an existing environment.
///
/// The source is tokenized, parsed, and then executed statement by statement.
/// Output of `echo` statements goes to `out`. Nothing is executed unless the
/// whole script lexes and parses.
///
/// # Errors
/// Returns the first lexical, syntax, or runtime error encountered.
///
/// # Examples
/// ```
/// use fab::{interpreter::evaluator::environment::Environment, run};
///
/// let mut env = Environment::new();
/// let mut out = Vec::new();
///
/// run("$word = \"Hello World\"\necho $word", &mut env, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "Hello World\n");
/// assert!(env.get("word").is_some());
/// ```
pub fn run<W: Write>(source: &str, env: &mut Environment, out: &mut W) -> Result<(), FabError> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenized source");

    let statements = parse(&tokens)?;
    execute(&statements, env, out)?;

    Ok(())
}

/// Runs a script in a fresh environment and returns everything it echoed.
///
/// # Errors
/// Returns an error if lexing, parsing, or execution fails.
///
/// # Examples
/// ```
/// use fab::get_result;
///
/// let output = get_result("$user = [$name = \"Sebastian\", $age = 17]\necho $user.$name");
/// assert_eq!(output.unwrap(), "Sebastian\n");
///
/// // Unterminated string literal.
/// assert!(get_result("echo \"abc").is_err());
/// ```
pub fn get_result(source: &str) -> Result<String, FabError> {
    let mut env = Environment::new();
    let mut out = Vec::new();

    run(source, &mut env, &mut out)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}
