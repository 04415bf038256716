use crate::ast::{BinaryOperator, Expr};

impl Expr {
    /// Evaluates the expression tree to an integer.
    ///
    /// Literals evaluate to themselves; a binary operation evaluates both
    /// operands and combines them. Evaluation cannot fail: overflow wraps
    /// around in two's complement.
    ///
    /// # Example
    /// ```
    /// use addsub::ast::{BinaryOperator, Expr};
    ///
    /// let left = Expr::binary(BinaryOperator::Sub, Expr::from(13), Expr::from(4));
    /// let right = Expr::binary(BinaryOperator::Add, Expr::from(12), Expr::from(1));
    /// let expr = Expr::binary(BinaryOperator::Sub, left, right);
    ///
    /// assert_eq!(expr.eval(), -4);
    /// ```
    #[must_use]
    pub fn eval(&self) -> i64 {
        match self {
            Self::Literal { value } => *value,
            Self::BinaryOp { op, left, right } => {
                let (left, right) = (left.eval(), right.eval());
                match op {
                    BinaryOperator::Add => left.wrapping_add(right),
                    BinaryOperator::Sub => left.wrapping_sub(right),
                }
            },
        }
    }
}
