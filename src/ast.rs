/// Represents a binary operator.
///
/// Only the additive operators exist; there is no precedence between them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every `BinaryOp` owns both of its operands, so a tree built from `Expr`
/// can never share or cycle nodes. Incomplete operations are rejected by the
/// parser before an `Expr` is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// A binary operation (addition or subtraction).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a `BinaryOp` node from two operands.
    ///
    /// ## Example
    /// ```
    /// use addsub::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::from(3), Expr::from(4));
    /// assert_eq!(expr.to_string(), "(3 + 4)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Literal { value }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
