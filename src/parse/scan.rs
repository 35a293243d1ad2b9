use log::trace;

use super::error::ScanError;
use crate::token::{Literal, Token, TokenKind};

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

pub fn scan(input: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(input);
    while !scanner.is_at_end() {
        scanner.start = scanner.current;
        scanner.scan_token()?;
    }
    scanner.tokens.push(Token::eof(scanner.line));

    trace!("scanned {} tokens", scanner.tokens.len());
    Ok(scanner.tokens)
}

struct Scanner {
    chars: Vec<char>,
    // start of the token being scanned
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Scanner {
            chars: input.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: vec![],
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    fn next_is(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += 1;
        true
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.lexeme(), literal, self.line);
        trace!("{}", token);
        self.tokens.push(token);
    }

    fn add_one_or_two(&mut self, second: char, two: TokenKind, one: TokenKind) {
        let kind = if self.next_is(second) { two } else { one };
        self.add_token(kind, None);
    }

    fn scan_token(&mut self) -> Result<(), ScanError> {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen, None),
            ')' => self.add_token(TokenKind::RightParen, None),
            '{' => self.add_token(TokenKind::LeftBrace, None),
            '}' => self.add_token(TokenKind::RightBrace, None),
            ',' => self.add_token(TokenKind::Comma, None),
            '.' => self.add_token(TokenKind::Dot, None),
            '-' => self.add_token(TokenKind::Minus, None),
            '+' => self.add_token(TokenKind::Plus, None),
            ';' => self.add_token(TokenKind::Semicolon, None),
            '*' => self.add_token(TokenKind::Star, None),
            '!' => self.add_one_or_two('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_one_or_two('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_one_or_two('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_one_or_two('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.next_is('/') {
                    // the newline itself is left for the main loop to count
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.current += 1;
                    }
                } else {
                    self.add_token(TokenKind::Slash, None);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.scan_string()?,
            c if c.is_ascii_digit() => self.scan_number()?,
            c if is_identifier_start(c) => self.scan_keyword_or_identifier(),
            character => {
                return Err(ScanError::UnexpectedCharacter {
                    character,
                    line: self.line,
                })
            }
        }
        Ok(())
    }

    fn scan_string(&mut self) -> Result<(), ScanError> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            return Err(ScanError::UnterminatedString { line: self.line });
        }

        // closing quote
        self.current += 1;

        let value = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_token(TokenKind::String, Some(Literal::Str(value)));
        Ok(())
    }

    fn scan_number(&mut self) -> Result<(), ScanError> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
        }

        // a trailing '.' stays out of the number
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.current += 1;
            }
        }

        let lexeme = self.lexeme();
        let value = lexeme
            .parse::<f64>()
            .map_err(|_| ScanError::ParseToNumber {
                lexeme: lexeme.clone(),
                line: self.line,
            })?;
        self.add_token(TokenKind::Number, Some(Literal::Number(value)));
        Ok(())
    }

    fn scan_keyword_or_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_char) {
            self.current += 1;
        }

        let kind = TokenKind::keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        scan(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn punctuation_and_operators() {
        use TokenKind::*;
        assert_eq!(
            kinds("(){},.-+;*/ ! != = == < <= > >="),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon,
                Star, Slash, Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater,
                GreaterEqual, Eof
            ]
        );
    }

    #[test]
    fn empty_input_is_only_eof() {
        let tokens = scan("").unwrap();
        assert_eq!(tokens, vec![Token::eof(1)]);
    }

    #[test]
    fn numbers_carry_parsed_value() {
        let tokens = scan("1234 45.67").unwrap();
        assert_eq!(tokens[0].literal, Some(Literal::Number(1234.0)));
        assert_eq!(tokens[0].lexeme, "1234");
        assert_eq!(tokens[1].literal, Some(Literal::Number(45.67)));
        assert_eq!(tokens[1].lexeme, "45.67");
    }

    #[test]
    fn trailing_dot_is_not_part_of_number() {
        let tokens = scan("12.").unwrap();
        assert_eq!(tokens[0].lexeme, "12");
        assert_eq!(tokens[0].literal, Some(Literal::Number(12.0)));
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn string_literal_excludes_quotes() {
        let tokens = scan("\"hello, world!\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello, world!\"");
        assert_eq!(tokens[0].literal, Some(Literal::Str("hello, world!".into())));
    }

    #[test]
    fn multiline_string_counts_lines() {
        let tokens = scan("\"a\nb\" 1").unwrap();
        assert_eq!(tokens[0].literal, Some(Literal::Str("a\nb".into())));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unterminated_string() {
        assert_eq!(
            scan("\"abc"),
            Err(ScanError::UnterminatedString { line: 1 })
        );
        assert_eq!(
            scan("1\n\"abc\n"),
            Err(ScanError::UnterminatedString { line: 3 })
        );
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            scan("1 +\n @"),
            Err(ScanError::UnexpectedCharacter {
                character: '@',
                line: 2
            })
        );
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        let tokens = scan("1 // one\r\n\t/ 2 // trailing").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number, TokenKind::Eof]
        );
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[3].line, 2);
    }

    #[test]
    fn keywords_and_identifiers() {
        let tokens = scan("true nil foo_1 _bar classy").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::True,
                TokenKind::Nil,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
        assert!(tokens.iter().all(|t| t.literal.is_none()));
    }

    #[test]
    fn lines_advance_across_statements() {
        let tokens = scan("foo = 1234;\nbar = 4321;").unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 1, 2, 2, 2, 2, 2]);
    }
}
