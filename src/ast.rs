use crate::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralNode {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralNode),
    Grouping(Box<Expression>),
    // op is `-` or `!`
    Unary {
        op: Token,
        operand: Box<Expression>,
    },
    Binary {
        lhs: Box<Expression>,
        op: Token,
        rhs: Box<Expression>,
    },
}

impl Expression {
    pub fn literal(node: LiteralNode) -> Self {
        Expression::Literal(node)
    }

    pub fn grouping(inner: Expression) -> Self {
        Expression::Grouping(Box::new(inner))
    }

    pub fn unary(op: Token, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(lhs: Expression, op: Token, rhs: Expression) -> Self {
        Expression::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}
