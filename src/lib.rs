//! Scanner, parser and evaluator for a small Lox expression language.
//!
//! The pipeline is `scan` -> `parse` -> `evaluate`; `print` renders a parsed
//! tree in prefix form for debugging.
//!
//! Note that `==` and `!=` on anything other than two numbers compare the
//! *truthiness* of the operands, so `"string" == true` evaluates to `true`.

pub mod ast;
pub mod interpret;
pub mod parse;
pub mod printer;
pub mod token;

use thiserror::Error;

pub use ast::{Expression, LiteralNode};
pub use interpret::{evaluate, Value};
pub use parse::{parse, scan, ParseError, ScanError};
pub use printer::print;
pub use token::{Literal, Token, TokenKind};

pub type EvalError = interpret::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Interpreter error: {0}")]
    Eval(#[from] EvalError),
}

/// Runs the whole pipeline over `source`, stopping at the first error.
pub fn run(source: &str) -> Result<Value, Error> {
    let tokens = scan(source)?;
    let expr = parse(&tokens)?;
    Ok(evaluate(&expr)?)
}
