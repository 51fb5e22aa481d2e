/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form of the language: literals, variable
/// references, dotted path access and map literals. Each variant carries the
/// source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A string literal with escapes already decoded.
    StringLiteral {
        /// The decoded text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A numeric literal.
    NumberLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name (`$name`).
    Variable {
        /// Name of the variable, without the `$`.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Key lookup on a map-valued expression (`base.$key`).
    PathAccess {
        /// The expression being indexed.
        base: Box<Self>,
        /// The key to look up, without the `$`.
        key:  String,
        /// Line number in the source code.
        line: usize,
    },
    /// Map literal expression (`[$a = 1, $b = 2]`).
    ///
    /// Keys are kept in written order and may repeat; duplicates are resolved
    /// when the map is evaluated.
    MapLiteral {
        /// The `(key, value)` entries as written.
        entries: Vec<(String, Self)>,
        /// Line number in the source code.
        line:    usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use fab::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::StringLiteral { line, .. }
            | Self::NumberLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::PathAccess { line, .. }
            | Self::MapLiteral { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `echo <expr>`: prints the canonical form of a value.
    Echo {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `$name = <expr>`: binds a value in the environment.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Echo { line, .. } | Self::Assign { line, .. } => *line,
        }
    }
}
