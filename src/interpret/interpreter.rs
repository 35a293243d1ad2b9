use log::trace;

use super::error::Error;
use super::value::Value;
use crate::ast::Expression;
use crate::token::{Token, TokenKind};

pub fn evaluate(expr: &Expression) -> Result<Value, Error> {
    let value = interpret_expr(expr)?;
    trace!("{:?}", &value);
    Ok(value)
}

fn interpret_expr(expr: &Expression) -> Result<Value, Error> {
    match expr {
        Expression::Literal(node) => Ok(Value::from(node)),
        Expression::Grouping(inner) => interpret_expr(inner),
        Expression::Unary { op, operand } => interpret_unary_op(op, operand),
        Expression::Binary { lhs, op, rhs } => interpret_binary_op(lhs, op, rhs),
    }
}

fn interpret_unary_op(op: &Token, operand: &Expression) -> Result<Value, Error> {
    let res = interpret_expr(operand)?;
    match op.kind {
        TokenKind::Bang => Ok(Value::Bool(!res.is_truthy())),
        _ => match res {
            Value::Number(v) => Ok(Value::Number(-v)),
            _ => Err(Error::NotANumber(op.clone(), res)),
        },
    }
}

fn interpret_binary_op(lhs: &Expression, op: &Token, rhs: &Expression) -> Result<Value, Error> {
    // both sides always run, there is no short circuit
    let lhs = interpret_expr(lhs)?;
    let rhs = interpret_expr(rhs)?;

    if let (Value::Number(l), Value::Number(r)) = (&lhs, &rhs) {
        return number_op(*l, op, *r)
            .ok_or_else(|| Error::InvalidOperands(op.clone(), lhs.clone(), rhs.clone()));
    }
    mixed_op(lhs, op, rhs)
}

fn number_op(l: f64, op: &Token, r: f64) -> Option<Value> {
    let value = match op.kind {
        TokenKind::Minus => Value::Number(l - r),
        TokenKind::Slash => Value::Number(l / r),
        TokenKind::Star => Value::Number(l * r),
        TokenKind::Plus => Value::Number(l + r),
        TokenKind::Greater => Value::Bool(l > r),
        TokenKind::GreaterEqual => Value::Bool(l >= r),
        TokenKind::Less => Value::Bool(l < r),
        TokenKind::LessEqual => Value::Bool(l <= r),
        TokenKind::BangEqual => Value::Bool(l != r),
        TokenKind::EqualEqual => Value::Bool(l == r),
        _ => return None,
    };
    Some(value)
}

// Equality outside of number pairs compares truthiness, not type or content:
// `"string" == true` holds and `"a" == "b"` holds.
fn mixed_op(lhs: Value, op: &Token, rhs: Value) -> Result<Value, Error> {
    match op.kind {
        TokenKind::BangEqual => Ok(Value::Bool(lhs.is_truthy() != rhs.is_truthy())),
        TokenKind::EqualEqual => Ok(Value::Bool(lhs.is_truthy() == rhs.is_truthy())),
        TokenKind::Plus => match (lhs, rhs) {
            (Value::Str(l), Value::Str(r)) => Ok(Value::Str(l + &r)),
            (lhs, rhs) => Err(Error::InvalidOperands(op.clone(), lhs, rhs)),
        },
        _ => Err(Error::InvalidOperands(op.clone(), lhs, rhs)),
    }
}
