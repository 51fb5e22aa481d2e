use std::rc::Rc;

use crate::{interpreter::value::map::OrderedMap, util::num::format_number};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce. Unresolved
/// variables and failed path lookups produce `Null` rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A double precision floating-point number.
    Number(f64),
    /// A string of text.
    String(Rc<str>),
    /// An insertion-ordered map with unique keys.
    Map(Rc<OrderedMap<Self>>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<OrderedMap<Self>> for Value {
    fn from(v: OrderedMap<Self>) -> Self {
        Self::Map(Rc::new(v))
    }
}

impl Value {
    /// Looks up `key` when `self` is a map.
    ///
    /// Returns `Null` for a missing key and for any non-map value.
    ///
    /// # Example
    /// ```
    /// use fab::interpreter::value::{core::Value, map::OrderedMap};
    ///
    /// let user: Value = [("name", Value::from("Sebastian"))].into_iter()
    ///                                                       .collect::<OrderedMap<_>>()
    ///                                                       .into();
    ///
    /// assert_eq!(user.get_path("name"), Value::from("Sebastian"));
    /// assert_eq!(user.get_path("age"), Value::Null);
    /// assert_eq!(Value::Number(1.0).get_path("name"), Value::Null);
    /// ```
    #[must_use]
    pub fn get_path(&self, key: &str) -> Self {
        match self {
            Self::Map(map) => map.get(key).cloned().unwrap_or(Self::Null),
            Self::Null | Self::Number(_) | Self::String(_) => Self::Null,
        }
    }

    /// Returns the name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Map(_) => "map",
        }
    }

    /// Returns `true` if the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Renders the canonical print form written by `echo`.
///
/// Strings print raw, numbers use [`format_number`], and maps print as
/// `[$key = value, ...]` in insertion order.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Map(map) => {
                write!(f, "[")?;

                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "${key} = {value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
