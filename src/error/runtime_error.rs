#[derive(Debug)]
/// Represents all errors that can occur during execution.
///
/// Name lookups and path accesses never fail; they resolve to `null`. The
/// remaining failures come from the output sink and from host code calling
/// into a native library.
pub enum RuntimeError {
    /// Writing an echoed value to the output failed.
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line of the `echo` statement.
        line:   usize,
    },
    /// Host code asked a native library for an entry it does not have.
    UnknownFunction {
        /// The namespace of the library.
        namespace: String,
        /// The name that was requested.
        name:      String,
    },
    /// A native entry was invoked with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the entry.
        name:     String,
        /// The declared arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A native entry rejected its arguments.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Output { source, line } => {
                write!(f, "Runtime error on line {line}: Failed to write output: {source}.")
            },
            Self::UnknownFunction { namespace, name } => {
                write!(f, "Runtime error: Unknown native function '{namespace}.{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Runtime error: '{name}' expects {expected} argument(s), but {found} were given."),
            Self::InvalidArgument { details } => {
                write!(f, "Runtime error: Invalid argument: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}
