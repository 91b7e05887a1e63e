use crate::formula::functions::Function;

/// An abstract syntax tree (AST) node representing a formula expression.
///
/// `Expr` covers every construct of the formula language: numeric literals,
/// positional variables, unary and binary operations, and calls to functions
/// from the fixed allow-list. Each variant records the byte offset of the
/// construct in the formula string so that errors can point back at the
/// offending source text.
///
/// Nodes are exclusively owned by their parent; the tree root is owned by a
/// [`CompiledExpression`](crate::formula::compiled::CompiledExpression).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal value.
    Literal {
        /// The constant value.
        value: f64,
        /// Byte offset in the formula string.
        pos:   usize,
    },
    /// Reference to a positional variable (`x1`, `x2`, ...).
    Variable {
        /// Zero-based index into the coordinate vector. The surface syntax
        /// is one-based: `x1` refers to index `0`.
        index: usize,
        /// Byte offset in the formula string.
        pos:   usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Byte offset in the formula string.
        pos:  usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Byte offset in the formula string.
        pos:   usize,
    },
    /// A call to an allow-listed function (e.g. `sin(x1)`).
    ///
    /// The function is resolved during parsing, so evaluation never deals
    /// with unknown names or wrong argument counts.
    Call {
        /// The resolved function.
        function:  Function,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Byte offset in the formula string.
        pos:       usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    ///
    /// ## Example
    /// ```
    /// use pointcalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { index: 0, pos: 4 };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { pos, .. }
            | Self::Variable { pos, .. }
            | Self::UnaryOp { pos, .. }
            | Self::BinaryOp { pos, .. }
            | Self::Call { pos, .. } => *pos,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`, also spelled `**`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x1`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
