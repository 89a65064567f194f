//! Lexer (tokenizer) for equation text.

use crate::error::{EqsysError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in equation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A variable name: a letter followed by letters or digits
    Identifier,
    /// A number literal (`3`, `1.5`, `3,5`, `3/4`)
    Number,
    /// Plus sign '+'
    Plus,
    /// Minus sign '-'
    Minus,
    /// Explicit multiplication '*'
    Star,
    /// Open parenthesis '('
    OpenParen,
    /// Close parenthesis ')'
    CloseParen,
    /// Equals sign '='
    Equals,
    /// End of input
    Eof,
}

/// Lexer for tokenizing a single equation.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    column: usize,
    equation: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for equation number `equation` (1-indexed).
    pub fn new(input: &'a str, equation: usize) -> Self {
        Self {
            chars: input.chars().peekable(),
            column: 1,
            equation,
        }
    }

    /// Index of the equation being tokenized, used in error reports.
    pub fn equation(&self) -> usize {
        self.equation
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let column = self.column;
        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    column,
                });
            }
        };

        let single = |kind| Token {
            kind,
            text: ch.to_string(),
            column,
        };

        let token = match ch {
            '+' => single(TokenKind::Plus),
            '-' => single(TokenKind::Minus),
            '*' => single(TokenKind::Star),
            '(' => single(TokenKind::OpenParen),
            ')' => single(TokenKind::CloseParen),
            '=' => single(TokenKind::Equals),
            '0'..='9' | '.' | ',' => {
                return Ok(Token {
                    kind: TokenKind::Number,
                    text: self.read_run(is_number_char),
                    column,
                });
            }
            _ if ch.is_ascii_alphabetic() => {
                return Ok(Token {
                    kind: TokenKind::Identifier,
                    text: self.read_run(|c| c.is_ascii_alphanumeric()),
                    column,
                });
            }
            _ => {
                return Err(EqsysError::syntax(
                    self.equation,
                    column,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        self.advance();
        Ok(token)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.column += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Read a run of accepted characters. Whitespace inside the run is
    /// dropped, so `1 2` reads as `12` and `3 / 4` as `3/4`.
    fn read_run(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if accept(ch) {
                text.push(ch);
            } else if !ch.is_whitespace() || !self.run_continues(&accept) {
                break;
            }
            self.advance();
        }
        text
    }

    /// Whether the next non-whitespace character is accepted.
    fn run_continues(&self, accept: impl Fn(char) -> bool) -> bool {
        self.chars
            .clone()
            .find(|c| !c.is_whitespace())
            .map_or(false, accept)
    }
}

fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | ',' | '/')
}
