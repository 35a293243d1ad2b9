use std::fmt;

use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[display(fmt = "LEFT_PAREN")]
    LeftParen,
    #[display(fmt = "RIGHT_PAREN")]
    RightParen,
    #[display(fmt = "LEFT_BRACE")]
    LeftBrace,
    #[display(fmt = "RIGHT_BRACE")]
    RightBrace,
    #[display(fmt = "COMMA")]
    Comma,
    #[display(fmt = "DOT")]
    Dot,
    #[display(fmt = "MINUS")]
    Minus,
    #[display(fmt = "PLUS")]
    Plus,
    #[display(fmt = "SEMICOLON")]
    Semicolon,
    #[display(fmt = "SLASH")]
    Slash,
    #[display(fmt = "STAR")]
    Star,

    #[display(fmt = "BANG")]
    Bang,
    #[display(fmt = "BANG_EQUAL")]
    BangEqual,
    #[display(fmt = "EQUAL")]
    Equal,
    #[display(fmt = "EQUAL_EQUAL")]
    EqualEqual,
    #[display(fmt = "GREATER")]
    Greater,
    #[display(fmt = "GREATER_EQUAL")]
    GreaterEqual,
    #[display(fmt = "LESS")]
    Less,
    #[display(fmt = "LESS_EQUAL")]
    LessEqual,

    #[display(fmt = "IDENTIFIER")]
    Identifier,
    #[display(fmt = "STRING")]
    String,
    #[display(fmt = "NUMBER")]
    Number,

    #[display(fmt = "AND")]
    And,
    #[display(fmt = "CLASS")]
    Class,
    #[display(fmt = "ELSE")]
    Else,
    #[display(fmt = "FALSE")]
    False,
    #[display(fmt = "FUN")]
    Fun,
    #[display(fmt = "FOR")]
    For,
    #[display(fmt = "IF")]
    If,
    #[display(fmt = "NIL")]
    Nil,
    #[display(fmt = "OR")]
    Or,
    #[display(fmt = "PRINT")]
    Print,
    #[display(fmt = "RETURN")]
    Return,
    #[display(fmt = "SUPER")]
    Super,
    #[display(fmt = "THIS")]
    This,
    #[display(fmt = "TRUE")]
    True,
    #[display(fmt = "VAR")]
    Var,
    #[display(fmt = "WHILE")]
    While,

    #[display(fmt = "EOF")]
    Eof,
}

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf::phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

impl TokenKind {
    /// Returns the reserved word kind for `text`, if it is one.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS.get(text).copied()
    }
}

/// Value carried by STRING and NUMBER tokens.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum Literal {
    // content between the quotes, quotes excluded
    #[display(fmt = "{}", _0)]
    Str(String),

    #[display(fmt = "{}", _0)]
    Number(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", None, line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kind: {}, lexeme: {}, literal: ", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, "{}", literal)?;
        }
        write!(f, ", line: {}", self.line)
    }
}
