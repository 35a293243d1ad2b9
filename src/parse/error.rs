use crate::token::{Token, TokenKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString { line: usize },

    #[error("[line {line}] Error: Unexpected character `{character}`.")]
    UnexpectedCharacter { character: char, line: usize },

    #[error("[line {line}] Error: Unable to parse `{lexeme}` to a number.")]
    ParseToNumber { lexeme: String, line: usize },
}

impl ScanError {
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnterminatedString { line } => *line,
            ScanError::UnexpectedCharacter { line, .. } => *line,
            ScanError::ParseToNumber { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("{} Expect expression.", diagnostic_at(.0))]
    ExpectedExpression(Token),

    #[error("{} Expect `{1}` after expression.", diagnostic_at(.0))]
    ExpectedToken(Token, TokenKind),

    #[error("{} Unexpected token after a complete expression.", diagnostic_at(.0))]
    Unfinished(Token),

    #[error("{} Expression nests too deeply.", diagnostic_at(.0))]
    TooDeep(Token),

    #[error("Token stream does not end with an end-of-input marker")]
    MissingEof,
}

impl ParseError {
    /// The token the parser was looking at when it gave up.
    pub fn token(&self) -> Option<&Token> {
        use ParseError::*;
        match self {
            ExpectedExpression(t) | ExpectedToken(t, _) | Unfinished(t) | TooDeep(t) => Some(t),
            MissingEof => None,
        }
    }
}

fn diagnostic_at(token: &Token) -> String {
    if token.is_eof() {
        format!("[line {}] Error at end:", token.line)
    } else {
        format!("[line {}] Error at `{}`:", token.line, token.lexeme)
    }
}
