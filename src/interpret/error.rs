use super::value::Value;
use thiserror::Error;

use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("[line {}] Operand of `{}` must be a number, got {} `{1}`", .0.line, .0.lexeme, .1.type_name())]
    NotANumber(Token, Value),

    #[error("[line {}] Operands `{1}` and `{2}` are invalid for operator `{}`", .0.line, .0.lexeme)]
    InvalidOperands(Token, Value, Value),
}
