use derive_more::Display;

use crate::ast::LiteralNode;

#[derive(Display, Debug, Clone, PartialEq)]
pub enum Value {
    #[display(fmt = "nil")]
    Nil,

    // use ":?" to print the string in quotes
    #[display(fmt = "{:?}", _0)]
    Str(String),

    Number(f64),

    Bool(bool),
}

impl Value {
    /// `nil` and `false` are falsy, everything else (including `0` and `""`) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Number(_) | Value::Str(_) => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
        }
    }
}

impl From<&LiteralNode> for Value {
    fn from(node: &LiteralNode) -> Self {
        match node {
            LiteralNode::Nil => Value::Nil,
            LiteralNode::Bool(b) => Value::Bool(*b),
            LiteralNode::Number(n) => Value::Number(*n),
            LiteralNode::Str(s) => Value::Str(s.clone()),
        }
    }
}
