
use crate::token::{Literal, Token, TokenType};
use std::collections::HashMap;

pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    errors: Vec<ScanError>,
    start: usize,
    current: usize,
    line: usize,
    keywords: HashMap<&'static str, TokenType>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("[line {line}] Error at `{position}`: Unexpected character.")]
    UnexpectedCharacter { line: usize, position: usize },
    #[error("[line {line}] Error at `{position}`: Unterminated string.")]
    UnterminatedString { line: usize, position: usize },
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut keywords = HashMap::new();
        keywords.insert("and", TokenType::And);
        keywords.insert("class", TokenType::Class);
        keywords.insert("else", TokenType::Else);
        keywords.insert("false", TokenType::False);
        keywords.insert("for", TokenType::For);
        keywords.insert("fun", TokenType::Fun);
        keywords.insert("if", TokenType::If);
        keywords.insert("nil", TokenType::Nil);
        keywords.insert("or", TokenType::Or);
        keywords.insert("print", TokenType::Print);
        keywords.insert("return", TokenType::Return);
        keywords.insert("super", TokenType::Super);
        keywords.insert("this", TokenType::This);
        keywords.insert("true", TokenType::True);
        keywords.insert("var", TokenType::Var);
        keywords.insert("while", TokenType::While);

        Self {
            source,
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            keywords,
        }
    }

    /// Runs the full pass over the source. The token list always ends with
    /// exactly one Eof token; the error list holds every diagnostic raised
    /// along the way, and the caller decides what to do with them.
    pub fn scan_tokens(mut self) -> (Vec<Token<'a>>, Vec<ScanError>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token {
            token_type: TokenType::Eof,
            lexeme: "",
            literal: None,
            line: self.line,
        });

        (self.tokens, self.errors)
    }

    fn scan_token(&mut self) {
        match self.advance() {
            b'(' => self.add_token(TokenType::LeftParen),
            b')' => self.add_token(TokenType::RightParen),
            b'{' => self.add_token(TokenType::LeftBrace),
            b'}' => self.add_token(TokenType::RightBrace),
            b',' => self.add_token(TokenType::Comma),
            b'.' => self.add_token(TokenType::Dot),
            b'+' => self.add_token(TokenType::Plus),
            b';' => self.add_token(TokenType::Semicolon),
            b'*' => self.add_token(TokenType::Star),

            b'!' if self.match_byte(b'=') => self.add_token(TokenType::BangEqual),
            b'!' => self.add_token(TokenType::Bang),

            b'=' if self.match_byte(b'=') => self.add_token(TokenType::EqualEqual),
            b'=' => self.add_token(TokenType::Equal),

            b'<' if self.match_byte(b'=') => self.add_token(TokenType::LessEqual),
            b'<' => self.add_token(TokenType::Less),

            b'>' if self.match_byte(b'=') => self.add_token(TokenType::GreaterEqual),
            b'>' => self.add_token(TokenType::Greater),

            // A second slash starts a line comment; the newline itself is
            // left for the next iteration so line counting stays in one place.
            b'/' if self.match_byte(b'/') => {
                while self.peek() != b'\n' && !self.is_at_end() {
                    self.advance();
                }
            }
            b'/' => self.add_token(TokenType::Slash),

            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,

            b'"' => self.string(),

            b if is_digit(b) => self.number(),

            b if is_alpha(b) => self.identifier(),

            _ => self.errors.push(ScanError::UnexpectedCharacter {
                line: self.line,
                position: self.current,
            }),
        }
    }

    #[inline]
    fn advance(&mut self) -> u8 {
        let b = self.source.as_bytes()[self.current];
        self.current += 1;
        b
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    #[inline]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.source.as_bytes()[self.current]
        }
    }

    #[inline]
    fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.source.len() {
            0
        } else {
            self.source.as_bytes()[self.current + 1]
        }
    }

    #[inline]
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.source.as_bytes()[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn add_token(&mut self, token_type: TokenType) {
        self.add_literal(token_type, None);
    }

    fn add_literal(&mut self, token_type: TokenType, literal: Option<Literal<'a>>) {
        self.tokens.push(Token {
            token_type,
            lexeme: &self.source[self.start..self.current],
            literal,
            line: self.line,
        });
    }

    fn string(&mut self) {
        while !self.is_at_end() && self.peek() != b'"' {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.errors.push(ScanError::UnterminatedString {
                line: self.line,
                position: self.current,
            });
            return;
        }

        // The closing quote.
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal(TokenType::String, Some(Literal::Str(value)));
    }

    fn number(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }

        // Consume the dot only when a digit follows it; a trailing dot
        // belongs to the next token.
        if self.peek() == b'.' && is_digit(self.peek_next()) {
            self.advance();

            while is_digit(self.peek()) {
                self.advance();
            }
        }

        // The lexeme is a digit run, so this cannot fail.
        let value: f64 = self.source[self.start..self.current].parse().unwrap();
        self.add_literal(TokenType::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        let lexeme = &self.source[self.start..self.current];
        let token_type = self.keywords.get(lexeme)
            .cloned()
            .unwrap_or(TokenType::Identifier);

        self.add_token(token_type);
    }
}

#[inline]
fn is_alpha(c: u8) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_uppercase() || c == b'_'
}

#[inline]
fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline]
fn is_alphanumeric(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}
