use crate::interpreter::value::{core::Value, map::OrderedMap};

/// Stores the variables of one interpreter run.
///
/// There is a single flat namespace: no nested scopes and no shadowing.
/// Variables are kept in the order they were first bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: OrderedMap<Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: OrderedMap::new() }
    }

    /// Binds `value` to `name`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name, value);
    }

    /// Returns the value bound to `name`, if any.
    ///
    /// ## Example
    /// ```
    /// use fab::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Number(1.0));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Iterates over `(name, value)` bindings in the order they were first
    /// bound.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter()
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
