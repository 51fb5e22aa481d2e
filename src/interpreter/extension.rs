use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment},
        value::{core::Value, map::OrderedMap},
    },
};

/// Signature of a native entry implemented by host code.
pub type NativeImpl = fn(&[Value]) -> EvalResult<Value>;

/// A native entry: a name, the number of arguments it takes, and the Rust
/// function implementing it.
#[derive(Debug, Clone, Copy)]
pub struct NativeFunction {
    /// The name the entry is registered under.
    pub name:           &'static str,
    /// Exact number of arguments the entry accepts.
    pub arity:          usize,
    /// The implementation.
    pub implementation: NativeImpl,
}

/// A namespace of native entries supplied by host code.
///
/// Libraries are assembled explicitly from a fixed list of
/// [`NativeFunction`]s; nothing is discovered at run time. Registering a
/// library binds its namespace in an [`Environment`] as a map with one
/// placeholder string per entry, so scripts can see which entries exist.
/// The language has no call syntax; host code invokes entries through
/// [`NativeLibrary::call`].
#[derive(Debug, Clone)]
pub struct NativeLibrary {
    namespace: String,
    functions: Vec<NativeFunction>,
}

impl NativeLibrary {
    /// Creates an empty library bound under `namespace`.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self { namespace: namespace.into(),
               functions: Vec::new(), }
    }

    /// Adds an entry. A later entry with the same name replaces the earlier
    /// one.
    #[must_use]
    pub fn with_function(mut self,
                         name: &'static str,
                         arity: usize,
                         implementation: NativeImpl)
                         -> Self {
        let function = NativeFunction { name,
                                        arity,
                                        implementation };
        match self.functions.iter_mut().find(|f| f.name == name) {
            Some(existing) => *existing = function,
            None => self.functions.push(function),
        }
        self
    }

    /// The namespace the library is bound under.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The registered entries, in registration order.
    #[must_use]
    pub fn functions(&self) -> &[NativeFunction] {
        &self.functions
    }

    /// Binds the library's namespace in `env`.
    ///
    /// The bound value is a map from entry name to a placeholder string of
    /// the form `<native name/arity>`. Registering again replaces the
    /// previous binding. This must happen before user statements run.
    ///
    /// # Example
    /// ```
    /// use fab::interpreter::{
    ///     evaluator::environment::Environment, extension::NativeLibrary, value::core::Value,
    /// };
    ///
    /// let library = NativeLibrary::new("host").with_function("echo_back", 1, |args| {
    ///                                             Ok(args[0].clone())
    ///                                         });
    /// let mut env = Environment::new();
    /// library.register(&mut env);
    ///
    /// assert_eq!(env.get("host").unwrap().to_string(),
    ///            "[$echo_back = <native echo_back/1>]");
    /// ```
    pub fn register(&self, env: &mut Environment) {
        let entries: OrderedMap<Value> =
            self.functions
                .iter()
                .map(|f| (f.name, Value::from(format!("<native {}/{}>", f.name, f.arity))))
                .collect();

        debug!(namespace = self.namespace.as_str(),
               entries = entries.len(),
               "registered native library");
        env.set(self.namespace.as_str(), entries.into());
    }

    /// Invokes the entry called `name` with `args`.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownFunction` if no entry has that name.
    /// - `RuntimeError::ArgumentCountMismatch` if `args` does not match the
    ///   entry's arity.
    /// - Any error returned by the entry itself.
    pub fn call(&self, name: &str, args: &[Value]) -> EvalResult<Value> {
        let function = self.functions
                           .iter()
                           .find(|f| f.name == name)
                           .ok_or_else(|| RuntimeError::UnknownFunction { namespace:
                                                                              self.namespace
                                                                                  .clone(),
                                                                          name:
                                                                              name.to_string(), })?;

        check_arity(function, args)?;
        (function.implementation)(args)
    }
}

/// Ensures `args` matches the declared arity of `function`.
fn check_arity(function: &NativeFunction, args: &[Value]) -> EvalResult<()> {
    if args.len() == function.arity {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name:     function.name.to_string(),
                                                  expected: function.arity,
                                                  found:    args.len(), })
    }
}
