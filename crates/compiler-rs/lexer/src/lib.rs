//! Pascal Lexer
//!
//! This crate implements the lexical analysis (tokenization) phase of the compiler.
//! It converts ISO 7185 source text into a vector of tokens terminated by a
//! single zero-length [`TokenKind::Eof`] token.

use std::fmt;

use errors::{Diagnostic, ErrorSeverity};
use log::debug;
use thiserror::Error;
use tokens::{lookup_keyword, SourceLocation, Token, TokenKind};

/// A source byte reported in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character(pub u8);

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (32..=126).contains(&self.0) {
            write!(f, "'{}'", self.0 as char)
        } else {
            write!(f, "non-printable character #{}", self.0)
        }
    }
}

/// Lexer error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError<'a> {
    #[error("Non-ASCII character")]
    NonAsciiCharacter { location: SourceLocation<'a> },
    #[error("Unexpected character: Got {actual}, expected {expected}")]
    UnexpectedCharacter {
        location: SourceLocation<'a>,
        actual: Character,
        expected: &'static str,
    },
    #[error("Unterminated character string")]
    UnterminatedCharacterString { location: SourceLocation<'a> },
    /// Located at the opening delimiter
    #[error("Unterminated comment")]
    UnterminatedComment { location: SourceLocation<'a> },
}

impl<'a> LexerError<'a> {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn location(&self) -> SourceLocation<'a> {
        match self {
            LexerError::NonAsciiCharacter { location }
            | LexerError::UnexpectedCharacter { location, .. }
            | LexerError::UnterminatedCharacterString { location }
            | LexerError::UnterminatedComment { location } => *location,
        }
    }

    /// Lexer errors never carry notes
    pub fn notes(&self) -> &[errors::Note<'a>] {
        &[]
    }

    pub fn to_diagnostic(&self) -> Diagnostic<'a> {
        Diagnostic::new(ErrorSeverity::Error, self.message(), Some(self.location()))
    }
}

const WORD_EXPECTED: &str = "number, word symbol, or identifier";
const DIGIT_EXPECTED: &str = "digit";
const STRING_CHARACTER_EXPECTED: &str = "string character";
const SEPARATOR_EXPECTED: &str = "token separator";

/// Lexer (scanner) for ISO 7185 Pascal
pub struct Lexer<'a> {
    path: &'a str,
    source: &'a str,
    /// Current position (byte offset)
    position: usize,
    tokens: Vec<Token<'a>>,
    /// Whether whitespace or a comment was seen since the last token
    encountered_separator: bool,
}

/// Tokenize a whole source file.
pub fn tokenize<'a>(path: &'a str, source: &'a str) -> Result<Vec<Token<'a>>, LexerError<'a>> {
    let tokens = Lexer::new(path, source).tokenize()?;
    debug!("{}: {} tokens", path, tokens.len());
    Ok(tokens)
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from source code
    pub fn new(path: &'a str, source: &'a str) -> Self {
        Self {
            path,
            source,
            position: 0,
            tokens: Vec::new(),
            encountered_separator: true,
        }
    }

    /// Consume the lexer and produce the full token sequence
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, LexerError<'a>> {
        while !self.is_at_end() {
            let ch = self.current_char();
            if !ch.is_ascii() {
                let length = self
                    .source
                    .get(self.position..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(1, char::len_utf8);
                return Err(LexerError::NonAsciiCharacter {
                    location: self.location_here(length),
                });
            }

            if self.skip_comment()? || self.skip_whitespace() {
                self.encountered_separator = true;
                continue;
            }

            match ch.to_ascii_uppercase() {
                b'\'' => self.scan_char_or_string()?,
                b'+' | b'-' if self.peek_char().is_ascii_digit() => self.scan_number()?,
                b'0'..=b'9' => self.scan_number()?,
                b'A'..=b'Z' => self.scan_word_symbol_or_identifier()?,
                _ => self.scan_special_symbol()?,
            }
        }
        self.emit_token(TokenKind::Eof, self.position, 0)?;
        Ok(self.tokens)
    }

    /// Check if we're at the end of source
    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Get current byte, NUL at end of input
    fn current_char(&self) -> u8 {
        self.source.as_bytes().get(self.position).copied().unwrap_or(0)
    }

    /// Peek at next byte without advancing, NUL at end of input
    fn peek_char(&self) -> u8 {
        self.source.as_bytes().get(self.position + 1).copied().unwrap_or(0)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    fn location_here(&self, length: usize) -> SourceLocation<'a> {
        SourceLocation::new(self.path, self.source, self.position, length)
    }

    fn unexpected_character(&self, expected: &'static str) -> LexerError<'a> {
        LexerError::UnexpectedCharacter {
            location: self.location_here(1),
            actual: Character(self.current_char()),
            expected,
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.position;
        while matches!(self.current_char(), b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r') {
            self.advance();
        }
        self.position != start
    }

    /// Skip one `{ ... }` or `(* ... *)` comment. Either closer ends either
    /// form and the body is not inspected.
    fn skip_comment(&mut self) -> Result<bool, LexerError<'a>> {
        let opener_length = match (self.current_char(), self.peek_char()) {
            (b'{', _) => 1,
            (b'(', b'*') => 2,
            _ => return Ok(false),
        };
        let opener = self.location_here(opener_length);
        self.position += opener_length;

        while !self.is_at_end() {
            match (self.current_char(), self.peek_char()) {
                (b'}', _) => {
                    self.advance();
                    return Ok(true);
                }
                (b'*', b')') => {
                    self.position += 2;
                    return Ok(true);
                }
                _ => self.advance(),
            }
        }

        Err(LexerError::UnterminatedComment { location: opener })
    }

    /// Append a token, enforcing the separator rule between word-like tokens.
    fn emit_token(&mut self, kind: TokenKind, start: usize, length: usize) -> Result<(), LexerError<'a>> {
        let token = Token::new(kind, SourceLocation::new(self.path, self.source, start, length));
        if let Some(previous) = self.tokens.last() {
            if !self.encountered_separator && previous.is_word_like() && token.is_word_like() {
                let offset = previous.location.offset() + previous.location.length();
                return Err(LexerError::UnexpectedCharacter {
                    location: SourceLocation::new(self.path, self.source, offset, 1),
                    actual: Character(self.source.as_bytes().get(offset).copied().unwrap_or(0)),
                    expected: SEPARATOR_EXPECTED,
                });
            }
        }
        self.tokens.push(token);
        self.encountered_separator = false;
        Ok(())
    }

    /// Emit a token that starts at the current position and advance past it
    fn emit_symbol(&mut self, kind: TokenKind, length: usize) -> Result<(), LexerError<'a>> {
        self.emit_token(kind, self.position, length)?;
        self.position += length;
        Ok(())
    }

    fn scan_special_symbol(&mut self) -> Result<(), LexerError<'a>> {
        let (kind, length) = match (self.current_char(), self.peek_char()) {
            // Two-character symbols
            (b'<', b'>') => (TokenKind::NotEqual, 2),
            (b'<', b'=') => (TokenKind::LessEqual, 2),
            (b'>', b'=') => (TokenKind::GreaterEqual, 2),
            (b':', b'=') => (TokenKind::Assign, 2),
            (b'.', b'.') => (TokenKind::DotDot, 2),
            // Alternative tokens
            (b'(', b'.') => (TokenKind::LeftBracket, 2),
            (b'.', b')') => (TokenKind::RightBracket, 2),
            (b'@', _) => (TokenKind::Caret, 1),
            // Single-character symbols
            (b'+', _) => (TokenKind::Plus, 1),
            (b'-', _) => (TokenKind::Minus, 1),
            (b'*', _) => (TokenKind::Star, 1),
            (b'/', _) => (TokenKind::Slash, 1),
            (b'=', _) => (TokenKind::Equal, 1),
            (b'<', _) => (TokenKind::Less, 1),
            (b'>', _) => (TokenKind::Greater, 1),
            (b'[', _) => (TokenKind::LeftBracket, 1),
            (b']', _) => (TokenKind::RightBracket, 1),
            (b'.', _) => (TokenKind::Dot, 1),
            (b',', _) => (TokenKind::Comma, 1),
            (b':', _) => (TokenKind::Colon, 1),
            (b';', _) => (TokenKind::Semicolon, 1),
            (b'^', _) => (TokenKind::Caret, 1),
            (b'(', _) => (TokenKind::LeftParen, 1),
            (b')', _) => (TokenKind::RightParen, 1),
            _ => return Err(self.unexpected_character(WORD_EXPECTED)),
        };
        self.emit_symbol(kind, length)
    }

    /// Consume a non-empty digit sequence
    fn scan_digits(&mut self) -> Result<(), LexerError<'a>> {
        if !self.current_char().is_ascii_digit() {
            return Err(self.unexpected_character(DIGIT_EXPECTED));
        }
        while self.current_char().is_ascii_digit() {
            self.advance();
        }
        Ok(())
    }

    /// Scan `[sign] digits [. digits] [E [sign] digits]` (6.1.5)
    fn scan_number(&mut self) -> Result<(), LexerError<'a>> {
        let start = self.position;
        if matches!(self.current_char(), b'+' | b'-') {
            self.advance();
        }
        self.scan_digits()?;

        let mut is_real = false;

        // `1..10` and `a[1.)` keep the dot for the next token
        if self.current_char() == b'.' && !matches!(self.peek_char(), b'.' | b')') {
            self.advance();
            self.scan_digits()?;
            is_real = true;
        }

        if self.current_char().eq_ignore_ascii_case(&b'E') {
            self.advance();
            if matches!(self.current_char(), b'+' | b'-') {
                self.advance();
            }
            self.scan_digits()?;
            is_real = true;
        }

        let kind = if is_real {
            TokenKind::RealLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        self.emit_token(kind, start, self.position - start)
    }

    fn scan_word_symbol_or_identifier(&mut self) -> Result<(), LexerError<'a>> {
        let start = self.position;
        while self.current_char().is_ascii_alphanumeric() {
            self.advance();
        }
        let lexeme = &self.source[start..self.position];
        let kind = lookup_keyword(lexeme).unwrap_or(TokenKind::Identifier);
        self.emit_token(kind, start, self.position - start)
    }

    /// Scan a quoted literal; `''` inside the quotes is an apostrophe image.
    fn scan_char_or_string(&mut self) -> Result<(), LexerError<'a>> {
        let start = self.position;
        self.advance();
        let mut characters = 0usize;
        loop {
            if self.is_at_end() {
                return Err(LexerError::UnterminatedCharacterString {
                    location: self.location_here(1),
                });
            }
            match (self.current_char(), self.peek_char()) {
                (b'\'', b'\'') => self.position += 2,
                (b'\'', _) => break,
                (ch, _) if (32..=126).contains(&ch) => self.advance(),
                _ => return Err(self.unexpected_character(STRING_CHARACTER_EXPECTED)),
            }
            characters += 1;
        }
        self.advance();

        let kind = if characters == 1 {
            TokenKind::CharLiteral
        } else {
            TokenKind::StringLiteral
        };
        self.emit_token(kind, start, self.position - start)
    }
}
