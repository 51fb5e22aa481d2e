use std::io::Write;

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::environment::Environment,
        value::{core::Value, map::OrderedMap},
    },
};

/// Result type used by the evaluator.
///
/// All execution functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes statements strictly in order.
///
/// Assignments update `env`; `echo` statements write to `out`. Execution
/// stops at the first error.
///
/// # Errors
/// Returns a `RuntimeError` if writing to `out` fails.
///
/// # Example
/// ```
/// use fab::interpreter::{
///     evaluator::{core::execute, environment::Environment},
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let statements = parse(&tokenize("$x = 2\necho $x").unwrap()).unwrap();
/// let mut env = Environment::new();
/// let mut out = Vec::new();
///
/// execute(&statements, &mut env, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "2\n");
/// ```
pub fn execute<W: Write>(statements: &[Statement],
                         env: &mut Environment,
                         out: &mut W)
                         -> EvalResult<()> {
    for statement in statements {
        execute_statement(statement, env, out)?;
    }

    Ok(())
}

/// Executes a single statement.
///
/// - `Assign` evaluates its expression and binds the result, overwriting any
///   previous binding of the same name.
/// - `Echo` evaluates its expression and writes the canonical print form
///   followed by a newline.
///
/// # Errors
/// Returns `RuntimeError::Output` if writing to `out` fails.
pub fn execute_statement<W: Write>(statement: &Statement,
                                   env: &mut Environment,
                                   out: &mut W)
                                   -> EvalResult<()> {
    match statement {
        Statement::Assign { name, value, line } => {
            let value = eval(value, env);
            trace!(line, name = name.as_str(), kind = value.type_name(), "assign");
            env.set(name.as_str(), value);
            Ok(())
        },
        Statement::Echo { expr, line } => {
            let value = eval(expr, env);
            trace!(line, kind = value.type_name(), "echo");
            writeln!(out, "{value}").map_err(|source| RuntimeError::Output { source,
                                                                           line: *line })
        },
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// Evaluation cannot fail:
/// - a variable that is not bound evaluates to `Null`;
/// - a path access on a non-map value, or for a missing key, evaluates to
///   `Null`;
/// - a map literal is built in written order, and a repeated key overwrites
///   the earlier value while keeping its position.
///
/// # Example
/// ```
/// use fab::{
///     ast::Expr,
///     interpreter::{
///         evaluator::{core::eval, environment::Environment},
///         value::core::Value,
///     },
/// };
///
/// let env = Environment::new();
/// let missing = Expr::Variable { name: "missing".to_string(),
///                                line: 1, };
///
/// assert_eq!(eval(&missing, &env), Value::Null);
/// ```
#[must_use]
pub fn eval(expr: &Expr, env: &Environment) -> Value {
    match expr {
        Expr::StringLiteral { value, .. } => Value::from(value.as_str()),
        Expr::NumberLiteral { value, .. } => Value::Number(*value),
        Expr::Variable { name, .. } => env.get(name).cloned().unwrap_or(Value::Null),
        Expr::PathAccess { base, key, .. } => eval(base, env).get_path(key),
        Expr::MapLiteral { entries, .. } => eval_map_literal(entries, env),
    }
}

/// Builds a fresh map from literal entries.
fn eval_map_literal(entries: &[(String, Expr)], env: &Environment) -> Value {
    let mut map = OrderedMap::new();

    for (key, expr) in entries {
        map.insert(key.as_str(), eval(expr, env));
    }

    map.into()
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::core::parse};

    fn run(source: &str, env: &mut Environment) -> String {
        let statements = parse(&tokenize(source).unwrap()).unwrap();
        let mut out = Vec::new();
        execute(&statements, env, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reassignment_overwrites() {
        let mut env = Environment::new();
        assert_eq!(run("$a = 1\n$a = \"two\"\necho $a", &mut env), "two\n");
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn variables_are_copied_by_value() {
        let mut env = Environment::new();
        let out = run("$a = [$x = 1]\n$b = $a\n$a = 2\necho $b\necho $a", &mut env);
        assert_eq!(out, "[$x = 1]\n2\n");
    }

    #[test]
    fn duplicate_keys_keep_first_position() {
        let mut env = Environment::new();
        assert_eq!(run("echo [$a = 1, $b = 2, $a = 3]", &mut env), "[$a = 3, $b = 2]\n");
    }

    #[test]
    fn map_entries_see_earlier_bindings_only() {
        let mut env = Environment::new();
        assert_eq!(run("$x = 5\necho [$x = 1, $y = $x]", &mut env), "[$x = 1, $y = 5]\n");
    }

    #[test]
    fn nested_path_access() {
        let mut env = Environment::new();
        let source = "$u = [$home = [$city = \"Graz\"]]\necho $u.$home.$city\necho $u.$home.$zip";
        assert_eq!(run(source, &mut env), "Graz\nnull\n");
    }

    #[test]
    fn path_on_non_map_is_null() {
        let mut env = Environment::new();
        assert_eq!(run("$s = \"text\"\necho $s.$len\necho $nothing.$deeper.$still", &mut env),
                   "null\nnull\n");
    }

    #[test]
    fn environment_keeps_binding_order() {
        let mut env = Environment::new();
        run("$b = 1\n$a = 2\n$b = 3", &mut env);
        let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(env.get("b"), Some(&Value::Number(3.0)));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported_with_line() {
        let statements = parse(&tokenize("$a = 1\n\necho $a").unwrap()).unwrap();
        let mut env = Environment::new();
        let err = execute(&statements, &mut env, &mut BrokenPipe).unwrap_err();

        assert!(matches!(err, RuntimeError::Output { line: 3, .. }));
        assert_eq!(env.get("a"), Some(&Value::Number(1.0)));
    }
}
