use std::fmt;

use crate::ast::{Expression, LiteralNode};

/// Renders `expr` in fully-parenthesized prefix form, e.g. `(* (- 123) (group 45.67))`.
///
/// The output always re-scans, but it is not infix source: `(+ 1 2)` does not
/// parse, and that is expected. Do not widen the grammar to accept it.
pub fn print(expr: &Expression) -> String {
    expr.to_string()
}

impl fmt::Display for LiteralNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralNode::Nil => write!(f, "nil"),
            LiteralNode::Bool(b) => write!(f, "{}", b),
            LiteralNode::Number(n) => write!(f, "{}", n),
            // strings cannot contain '"', so quoting keeps the output scannable
            LiteralNode::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(node) => write!(f, "{}", node),
            Expression::Grouping(inner) => write!(f, "(group {})", inner),
            Expression::Unary { op, operand } => write!(f, "({} {})", op.lexeme, operand),
            Expression::Binary { lhs, op, rhs } => write!(f, "({} {} {})", op.lexeme, lhs, rhs),
        }
    }
}
