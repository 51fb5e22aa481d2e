/// Program and expression parsing.
///
/// Entry points of the parser: the statement loop over a whole token stream,
/// expressions with dotted path chaining, and primary expressions.
pub mod core;

/// Map literal parsing.
///
/// Handles `[$key = expr, ...]` literals, including the empty map `[]`.
pub mod map;

/// Statement parsing.
///
/// Implements `echo` statements and `$name = expr` assignments.
pub mod statement;

/// Shared parser helpers.
///
/// Expectation checks that turn a mismatched token into a `ParseError`, and
/// the comma-separated list loop used by map literals.
pub mod utils;
