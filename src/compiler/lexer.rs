//! Hand-written scanner for ToyC.
//!
//! Comments are consumed as whitespace. The unsupported `++`/`--` operators
//! and an unterminated block comment are reported as lexical errors with
//! line/column information.
//!
//! ToyC 的手写扫描器。
//! 注释被当作空白消耗。不支持的 `++`/`--` 运算符和未闭合的块注释
//! 会作为带行列信息的词法错误报告。

use anyhow::{Result, bail};

use crate::compiler::token::{Token, TokenKind, keyword_kind};

pub struct Lexer {
    chars: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans the whole source and returns the token stream, terminated by an
    /// `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.skip_whitespace()?;
            self.start = self.current;

            if self.is_at_end() {
                break;
            }

            let c = self.advance();
            let token = if c.is_ascii_alphabetic() || c == '_' {
                self.identifier()
            } else if c.is_ascii_digit() {
                self.number()
            } else {
                self.operator_or_delimiter(c)?
            };
            tokens.push(token);
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line, self.column));
        Ok(tokens)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() != expected {
            return false;
        }
        self.current += 1;
        self.column += 1;
        true
    }

    fn newline(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Skips spaces and comments. `/` followed by anything else is left in
    /// place for the operator scanner (it is the division operator).
    fn skip_whitespace(&mut self) -> Result<()> {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.newline();
                }
                '/' if self.peek_next() == '/' => {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                }
                '/' if self.peek_next() == '*' => {
                    let start_line = self.line;
                    self.advance();
                    self.advance();
                    loop {
                        if self.is_at_end() {
                            bail!("Unterminated block comment at line {}", start_line);
                        }
                        if self.peek() == '*' && self.peek_next() == '/' {
                            self.advance();
                            self.advance();
                            break;
                        }
                        if self.peek() == '\n' {
                            self.advance();
                            self.newline();
                        } else {
                            self.advance();
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
        Ok(())
    }

    fn identifier(&mut self) -> Token {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        let kind = keyword_kind(&lexeme).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, lexeme)
    }

    fn number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        self.make_token(TokenKind::Number, lexeme)
    }

    fn operator_or_delimiter(&mut self, c: char) -> Result<Token> {
        let token = match c {
            '+' => {
                if self.matches('+') {
                    return self.lexical_error("Unexpected '++', increment operator not supported");
                }
                self.make_token(TokenKind::Plus, "+")
            }
            '-' => {
                if self.matches('-') {
                    return self.lexical_error("Unexpected '--', decrement operator not supported");
                }
                self.make_token(TokenKind::Minus, "-")
            }
            '*' => self.make_token(TokenKind::Multiply, "*"),
            '/' => self.make_token(TokenKind::Divide, "/"),
            '%' => self.make_token(TokenKind::Modulo, "%"),
            '<' => {
                if self.matches('=') {
                    self.make_token(TokenKind::LessEqual, "<=")
                } else {
                    self.make_token(TokenKind::Less, "<")
                }
            }
            '>' => {
                if self.matches('=') {
                    self.make_token(TokenKind::GreaterEqual, ">=")
                } else {
                    self.make_token(TokenKind::Greater, ">")
                }
            }
            '=' => {
                if self.matches('=') {
                    self.make_token(TokenKind::Equal, "==")
                } else {
                    self.make_token(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.matches('=') {
                    self.make_token(TokenKind::NotEqual, "!=")
                } else {
                    self.make_token(TokenKind::Not, "!")
                }
            }
            '&' => {
                if self.matches('&') {
                    self.make_token(TokenKind::LogicalAnd, "&&")
                } else {
                    self.make_token(TokenKind::Unknown, "&")
                }
            }
            '|' => {
                if self.matches('|') {
                    self.make_token(TokenKind::LogicalOr, "||")
                } else {
                    self.make_token(TokenKind::Unknown, "|")
                }
            }
            '(' => self.make_token(TokenKind::LParen, "("),
            ')' => self.make_token(TokenKind::RParen, ")"),
            '{' => self.make_token(TokenKind::LBrace, "{"),
            '}' => self.make_token(TokenKind::RBrace, "}"),
            ',' => self.make_token(TokenKind::Comma, ","),
            ';' => self.make_token(TokenKind::Semicolon, ";"),
            other => self.make_token(TokenKind::Unknown, other.to_string()),
        };
        Ok(token)
    }

    fn lexical_error(&self, msg: &str) -> Result<Token> {
        bail!(
            "Lexical error at line {}, column {}: {}",
            self.line,
            self.column,
            msg
        )
    }

    fn make_token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        let lexeme = lexeme.into();
        let column = (self.column + 1).saturating_sub(lexeme.chars().count() + 1);
        Token::new(kind, lexeme, self.line, column.max(1))
    }
}
