use std::convert::From;
use std::fmt::Display;


/// Abstract syntax tree of an arithmetic expression.
///
/// A run of operators of one precedence level, such as `1 + 2 - 3`, is a single [`Expr::Chain`]
/// folded left to right, so only parentheses and precedence make the tree deeper.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Literal(f64),
    Chain {
        first: Box<Expr>,
        rest: Vec<(BinaryOperator, Expr)>
    }
}

impl Expr {
    /// Reduces the tree to a single value using IEEE-754 arithmetic.
    ///
    /// Division by zero is not an error: it yields an infinity, or NaN for `0 / 0`.
    ///
    /// # Examples
    /// ```
    /// use safe_calc::Expr;
    ///
    /// assert_eq!(Expr::add(2.0, Expr::mul(3.0, 4.0)).evaluate(), 14.0);
    /// assert_eq!(Expr::div(1.0, 0.0).evaluate(), f64::INFINITY);
    /// ```
    pub fn evaluate(&self) -> f64 {
        match self {
            Expr::Literal(value) => *value,
            Expr::Chain { first, rest } => rest
                .iter()
                .fold(first.evaluate(), |acc, (op, operand)| op.op(acc, operand.evaluate()))
        }
    }

    /// Height of the tree, a literal being 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Chain { first, rest } => {
                let deepest = rest.iter().map(|(_, operand)| operand.depth()).max().unwrap_or(0);
                1 + first.depth().max(deepest)
            }
        }
    }

    /// Builds a chain, or returns `first` itself when there is nothing to apply.
    pub(crate) fn chain(first: Expr, rest: Vec<(BinaryOperator, Expr)>) -> Self {
        if rest.is_empty() {
            return first;
        }

        Self::Chain { first: Box::new(first), rest }
    }

    pub(crate) fn binary_op<L: Into<Expr>, R: Into<Expr>>(op: BinaryOperator, left: L, right: R) -> Self {
        Self::chain(left.into(), vec![(op, right.into())])
    }

    /// Builds `left + right`.
    pub fn add<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Add, left, right)
    }

    pub fn sub<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Subtract, left, right)
    }

    pub fn mul<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Multiply, left, right)
    }

    pub fn div<L: Into<Expr>, R: Into<Expr>>(left: L, right: R) -> Self {
        Self::binary_op(BinaryOperator::Divide, left, right)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(v) => write!(f, "{v}"),
            Expr::Chain { first, rest } => {
                write!(f, "({first}")?;
                for (op, operand) in rest {
                    write!(f, " {op} {operand}")?;
                }
                write!(f, ")")
            }
        }
    }
}


/// The four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn op(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator as Op;
        match self {
            Op::Add => left + right,
            Op::Subtract => left - right,
            Op::Multiply => left * right,
            Op::Divide => left / right
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/")
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn operator_strategy() -> impl Strategy<Value = BinaryOperator> {
        prop::sample::select(&[
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide
        ])
    }

    fn first_op(expr: &Expr) -> Option<BinaryOperator> {
        match expr {
            Expr::Chain { rest, .. } => rest.first().map(|(op, _)| *op),
            Expr::Literal(_) => None
        }
    }

    fn expr_strategy() -> impl Strategy<Value = Expr> {
        let leaf = (0u16..1000).prop_map(|n| Expr::Literal(n as f64));

        leaf.prop_recursive(8, 64, 2, |inner| {
            (operator_strategy(), inner.clone(), inner)
                .prop_map(|(op, left, right)| Expr::binary_op(op, left, right))
        })
    }

    proptest! {
        #[test]
        fn test_expr_evaluate_literal(value in any::<f64>()) {
            let result = Expr::Literal(value).evaluate();

            prop_assert!(result == value || (result.is_nan() && value.is_nan()));
        }

        #[test]
        fn test_expr_evaluate_binary(
            left in 0u16..1000,
            right in 1u16..1000,
            op in operator_strategy()
        ) {
            let (l, r) = (left as f64, right as f64);
            let result = Expr::binary_op(op, l, r).evaluate();

            let expected = match op {
                BinaryOperator::Add => l + r,
                BinaryOperator::Subtract => l - r,
                BinaryOperator::Multiply => l * r,
                BinaryOperator::Divide => l / r,
            };

            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_expr_constructors(left in 0u16..100, right in 0u16..100) {
            let (l, r) = (left as f64, right as f64);

            prop_assert_eq!(first_op(&Expr::add(l, r)), Some(BinaryOperator::Add));
            prop_assert_eq!(first_op(&Expr::sub(l, r)), Some(BinaryOperator::Subtract));
            prop_assert_eq!(first_op(&Expr::mul(l, r)), Some(BinaryOperator::Multiply));
            prop_assert_eq!(first_op(&Expr::div(l, r)), Some(BinaryOperator::Divide));
        }

        #[test]
        fn test_chain_folds_left(values in prop::collection::vec(1u16..100, 1..20)) {
            let first = Expr::Literal(values[0] as f64);
            let rest = values[1..].iter().map(|v| (BinaryOperator::Subtract, Expr::Literal(*v as f64))).collect();
            let expected = values[1..].iter().fold(values[0] as f64, |acc, v| acc - *v as f64);

            prop_assert_eq!(Expr::chain(first, rest).evaluate(), expected);
        }

        #[test]
        fn test_expr_depth_bounds(expr in expr_strategy()) {
            let depth = expr.depth();

            prop_assert!(depth >= 1);
            prop_assert!(depth <= 9);
        }

        #[test]
        fn test_evaluation_is_repeatable(expr in expr_strategy()) {
            prop_assert_eq!(expr.evaluate().to_bits(), expr.evaluate().to_bits());
        }
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        assert_eq!(Expr::div(1.0, 0.0).evaluate(), f64::INFINITY);
        assert_eq!(Expr::sub(0.0, Expr::div(1.0, 0.0)).evaluate(), f64::NEG_INFINITY);
        assert!(Expr::div(0.0, 0.0).evaluate().is_nan());
    }

    #[test]
    fn test_display_groups_every_operation() {
        let expr = Expr::sub(Expr::sub(10.0, 2.5), Expr::mul(3.0, 4.0));

        assert_eq!(expr.to_string(), "((10 - 2.5) - (3 * 4))");
    }

    #[test]
    fn test_display_lists_a_chain_flat() {
        let expr = Expr::chain(Expr::Literal(10.0), vec![
            (BinaryOperator::Divide, Expr::Literal(2.0)),
            (BinaryOperator::Divide, Expr::Literal(5.0)),
        ]);

        assert_eq!(expr.to_string(), "(10 / 2 / 5)");
        assert_eq!(expr.evaluate(), 1.0);
    }

    #[test]
    fn test_long_chain_stays_shallow() {
        let rest = (1..100_000).map(|_| (BinaryOperator::Add, Expr::Literal(1.0))).collect();
        let expr = Expr::chain(Expr::Literal(1.0), rest);

        assert_eq!(expr.depth(), 2);
        assert_eq!(expr.evaluate(), 100_000.0);
    }

    #[test]
    fn test_chain_of_nothing_is_its_first_operand() {
        assert_eq!(Expr::chain(Expr::Literal(4.0), Vec::new()), Expr::Literal(4.0));
    }

    #[test]
    fn test_depth() {
        assert_eq!(Expr::Literal(1.0).depth(), 1);
        assert_eq!(Expr::add(1.0, Expr::mul(2.0, 3.0)).depth(), 3);
    }
}
