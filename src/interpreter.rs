/// The evaluator module executes statements and computes values.
///
/// The evaluator walks the statement list in order against an explicit
/// environment, evaluates expressions to runtime values, and writes the
/// output of `echo` statements.
///
/// # Responsibilities
/// - Evaluates expressions: literals, variables, path access and map
///   literals.
/// - Executes assignments and `echo` statements.
/// - Resolves missing variables and keys to `null` instead of failing.
pub mod evaluator;
/// Native extension libraries.
///
/// Host code assembles a namespace of native entries from an explicit list of
/// `(name, arity, implementation)` triples and registers it into an
/// environment before a script runs.
pub mod extension;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer strips comments and reads the remaining text into a stream of
/// tokens, each carrying its line and column. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Removes block and line comments without disturbing positions.
/// - Handles numeric and string literals, identifiers, and punctuation.
/// - Reports lexical errors for unexpected characters and unterminated
///   strings.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the list of statements of a program. It stops at the first grammar
/// violation.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Reports what was expected and what was found, with the position of the
///   offending token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: null, number, string and ordered map.
/// - Provides the insertion-ordered, key-unique map used by values and the
///   environment.
/// - Renders the canonical print form of every value.
pub mod value;
