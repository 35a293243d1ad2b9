use log::trace;

use super::error::ParseError;
use crate::ast::{Expression, LiteralNode};
use crate::token::{Literal, Token, TokenKind};

type ParseResult = Result<Expression, ParseError>;

// deepest tree the parser builds; evaluation, printing and drop all recurse
const MAX_DEPTH: usize = 256;

pub fn parse(tokens: &[Token]) -> ParseResult {
    if !tokens.last().is_some_and(Token::is_eof) {
        return Err(ParseError::MissingEof);
    }

    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;

    let li = parser.get_curr();
    if !li.is_eof() {
        return Err(ParseError::Unfinished(li.clone()));
    }

    trace!("{:?}", &expr);
    Ok(expr)
}

struct Parser<'a> {
    // always ends with an EOF token
    tokens: &'a [Token],
    curr_pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            curr_pos: 0,
            depth: 0,
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep(self.get_curr().clone()));
        }
        self.depth += 1;
        Ok(())
    }

    fn get_curr(&self) -> &'a Token {
        &self.tokens[self.curr_pos]
    }

    fn advance(&mut self) -> &'a Token {
        let li = self.get_curr();
        if !li.is_eof() {
            self.curr_pos += 1;
        }
        li
    }

    /// Consumes the current token if it is one of `match_tokens`.
    fn next_if(&mut self, match_tokens: &'static [TokenKind]) -> Option<&'a Token> {
        if match_tokens.contains(&self.get_curr().kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn consume_token(&mut self, token: TokenKind) -> Result<&'a Token, ParseError> {
        let li = self.get_curr();
        if li.kind != token {
            return Err(ParseError::ExpectedToken(li.clone(), token));
        }
        Ok(self.advance())
    }

    fn parse_expr(&mut self) -> ParseResult {
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> ParseResult {
        self.parse_recursive_binary(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::parse_comparison,
        )
    }

    fn parse_comparison(&mut self) -> ParseResult {
        self.parse_recursive_binary(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::parse_term,
        )
    }

    fn parse_term(&mut self) -> ParseResult {
        self.parse_recursive_binary(&[TokenKind::Minus, TokenKind::Plus], Self::parse_factor)
    }

    fn parse_factor(&mut self) -> ParseResult {
        self.parse_recursive_binary(&[TokenKind::Slash, TokenKind::Star], Self::parse_unary)
    }

    fn parse_recursive_binary(
        &mut self,
        match_tokens: &'static [TokenKind],
        lower_fn: fn(&mut Self) -> ParseResult,
    ) -> ParseResult {
        let mut lhs = lower_fn(self)?;
        let depth = self.depth;

        // each fold deepens the left-leaning chain by one
        while let Some(op) = self.next_if(match_tokens) {
            self.enter()?;
            let rhs = lower_fn(self)?;
            lhs = Expression::binary(lhs, op.clone(), rhs);
        }

        self.depth = depth;
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> ParseResult {
        match self.next_if(&[TokenKind::Bang, TokenKind::Minus]) {
            Some(op) => {
                self.enter()?;
                let operand = self.parse_unary()?;
                self.depth -= 1;
                Ok(Expression::unary(op.clone(), operand))
            }
            None => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> ParseResult {
        let li = self.get_curr();

        let node = match (li.kind, &li.literal) {
            (TokenKind::False, _) => LiteralNode::Bool(false),
            (TokenKind::True, _) => LiteralNode::Bool(true),
            (TokenKind::Nil, _) => LiteralNode::Nil,
            (TokenKind::Number, Some(Literal::Number(n))) => LiteralNode::Number(*n),
            (TokenKind::String, Some(Literal::Str(s))) => LiteralNode::Str(s.clone()),
            (TokenKind::LeftParen, _) => return self.parse_group(),
            _ => return Err(ParseError::ExpectedExpression(li.clone())),
        };

        self.advance();
        Ok(Expression::literal(node))
    }

    fn parse_group(&mut self) -> ParseResult {
        self.consume_token(TokenKind::LeftParen)?;
        self.enter()?;
        let expr = self.parse_expr()?;
        self.depth -= 1;
        self.consume_token(TokenKind::RightParen)?;
        Ok(Expression::grouping(expr))
    }
}
