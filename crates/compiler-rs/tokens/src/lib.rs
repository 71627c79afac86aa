//! Pascal Token Definitions
//!
//! This crate defines the token kinds produced by the lexer together with
//! [`SourceLocation`], the borrowed view into the source text that every token
//! and every AST node is anchored to.

use std::fmt;

/// Line/column range of a [`SourceLocation`] (all values 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Position {
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }
}

/// A span of the source text.
///
/// The location never owns text: it borrows both the path and the source, so
/// the source buffer must outlive every token and AST node derived from it.
/// Construction performs no bounds checks; accessors clamp to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    path: &'a str,
    source: &'a str,
    offset: usize,
    length: usize,
}

impl<'a> SourceLocation<'a> {
    /// Create a new source location
    pub fn new(path: &'a str, source: &'a str, offset: usize, length: usize) -> Self {
        Self {
            path,
            source,
            offset,
            length,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Compute the line/column range by rescanning the source from the start.
    pub fn position(&self) -> Position {
        let bytes = self.source.as_bytes();
        let (start_line, start_column) = advance_position(&bytes[..self.offset.min(bytes.len())], 1, 1);
        let span_end = (self.offset + self.length).min(bytes.len());
        let span_start = self.offset.min(span_end);
        let (end_line, end_column) =
            advance_position(&bytes[span_start..span_end], start_line, start_column);
        Position::new(start_line, start_column, end_line, end_column)
    }

    /// The covered text, clamped to the source
    pub fn text(&self) -> &'a str {
        let end = (self.offset + self.length).min(self.source.len());
        let start = self.offset.min(end);
        self.source.get(start..end).unwrap_or("")
    }

    /// Zero-length location immediately after this one
    pub fn end(&self) -> Self {
        Self::new(self.path, self.source, self.offset + self.length, 0)
    }

    /// Smallest location covering both `self` and `other`
    pub fn join(&self, other: &Self) -> Self {
        let start = self.offset.min(other.offset);
        let end = (self.offset + self.length).max(other.offset + other.length);
        Self::new(self.path, self.source, start, end - start)
    }

    /// The full source lines touched by this location.
    ///
    /// Always yields at least one line; a location at the very end of a source
    /// that ends in a newline yields an empty line.
    pub fn surrounding_lines(&self) -> Vec<&'a str> {
        let bytes = self.source.as_bytes();
        let offset = self.offset.min(bytes.len());
        let span_end = (self.offset + self.length).min(bytes.len());

        let mut line_start = offset;
        while line_start > 0 && bytes[line_start - 1] != b'\n' {
            line_start -= 1;
        }

        let mut lines = Vec::new();
        for index in offset..span_end {
            if bytes[index] == b'\n' && index + 1 < span_end {
                lines.push(&self.source[line_start..index]);
                line_start = index + 1;
            }
        }

        let mut line_end = line_start;
        while line_end < bytes.len() && bytes[line_end] != b'\n' {
            line_end += 1;
        }
        lines.push(&self.source[line_start..line_end]);
        lines
    }
}

fn advance_position(bytes: &[u8], mut line: usize, mut column: usize) -> (usize, usize) {
    for &byte in bytes {
        if byte == b'\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

impl fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.position();
        write!(f, "{}:{}:{}", self.path, position.start_line, position.start_column)
    }
}

/// Token kinds of ISO 7185 Pascal (6.1.2 - 6.1.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Special symbols =====
    Plus,         // +
    Minus,        // -
    Star,         // *
    Slash,        // /
    Equal,        // =
    Less,         // <
    Greater,      // >
    LeftBracket,  // [ or (.
    RightBracket, // ] or .)
    Dot,          // .
    Comma,        // ,
    Colon,        // :
    Semicolon,    // ;
    Caret,        // ^ or @
    LeftParen,    // (
    RightParen,   // )
    NotEqual,     // <>
    LessEqual,    // <=
    GreaterEqual, // >=
    Assign,       // :=
    DotDot,       // ..

    // ===== Word symbols =====
    KwAnd,
    KwArray,
    KwBegin,
    KwCase,
    KwConst,
    KwDiv,
    KwDo,
    KwDownto,
    KwElse,
    KwEnd,
    KwFile,
    KwFor,
    KwFunction,
    KwGoto,
    KwIf,
    KwIn,
    KwLabel,
    KwMod,
    KwNil,
    KwNot,
    KwOf,
    KwOr,
    KwPacked,
    KwProcedure,
    KwProgram,
    KwRecord,
    KwRepeat,
    KwSet,
    KwThen,
    KwTo,
    KwType,
    KwUntil,
    KwVar,
    KwWhile,
    KwWith,

    // ===== Identifiers and literals =====
    Identifier,
    IntegerLiteral,
    RealLiteral,
    CharLiteral,
    StringLiteral,

    /// End of file
    Eof,
}

/// The word symbols, spelled the way they are printed in diagnostics
pub const KEYWORDS: [(&str, TokenKind); 35] = [
    ("AND", TokenKind::KwAnd),
    ("ARRAY", TokenKind::KwArray),
    ("BEGIN", TokenKind::KwBegin),
    ("CASE", TokenKind::KwCase),
    ("CONST", TokenKind::KwConst),
    ("DIV", TokenKind::KwDiv),
    ("DO", TokenKind::KwDo),
    ("DOWNTO", TokenKind::KwDownto),
    ("ELSE", TokenKind::KwElse),
    ("END", TokenKind::KwEnd),
    ("FILE", TokenKind::KwFile),
    ("FOR", TokenKind::KwFor),
    ("FUNCTION", TokenKind::KwFunction),
    ("GOTO", TokenKind::KwGoto),
    ("IF", TokenKind::KwIf),
    ("IN", TokenKind::KwIn),
    ("LABEL", TokenKind::KwLabel),
    ("MOD", TokenKind::KwMod),
    ("NIL", TokenKind::KwNil),
    ("NOT", TokenKind::KwNot),
    ("OF", TokenKind::KwOf),
    ("OR", TokenKind::KwOr),
    ("PACKED", TokenKind::KwPacked),
    ("PROCEDURE", TokenKind::KwProcedure),
    ("PROGRAM", TokenKind::KwProgram),
    ("RECORD", TokenKind::KwRecord),
    ("REPEAT", TokenKind::KwRepeat),
    ("SET", TokenKind::KwSet),
    ("THEN", TokenKind::KwThen),
    ("TO", TokenKind::KwTo),
    ("TYPE", TokenKind::KwType),
    ("UNTIL", TokenKind::KwUntil),
    ("VAR", TokenKind::KwVar),
    ("WHILE", TokenKind::KwWhile),
    ("WITH", TokenKind::KwWith),
];

/// Case-insensitive keyword lookup
pub fn lookup_keyword(s: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(s))
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Check if this is a word symbol (reserved word)
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Upper-case name used when printing token streams
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Equal => "EQUALS",
            TokenKind::Less => "LESS_THAN",
            TokenKind::Greater => "GREATER_THAN",
            TokenKind::LeftBracket => "LEFT_SQUARE_BRACKET",
            TokenKind::RightBracket => "RIGHT_SQUARE_BRACKET",
            TokenKind::Dot => "DOT",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Caret => "UP_ARROW",
            TokenKind::LeftParen => "LEFT_PARENTHESIS",
            TokenKind::RightParen => "RIGHT_PARENTHESIS",
            TokenKind::NotEqual => "LESS_THAN_GREATER_THAN",
            TokenKind::LessEqual => "LESS_THAN_EQUALS",
            TokenKind::GreaterEqual => "GREATER_THAN_EQUALS",
            TokenKind::Assign => "COLON_EQUALS",
            TokenKind::DotDot => "DOT_DOT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_NUMBER",
            TokenKind::RealLiteral => "REAL_NUMBER",
            TokenKind::CharLiteral => "CHAR",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Eof => "END_OF_FILE",
            keyword => KEYWORDS
                .iter()
                .find(|&&(_, kind)| kind == keyword)
                .map(|&(name, _)| name)
                .unwrap_or("KEYWORD"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub location: SourceLocation<'a>,
}

impl<'a> Token<'a> {
    /// Create a new token
    pub fn new(kind: TokenKind, location: SourceLocation<'a>) -> Self {
        Self { kind, location }
    }

    /// The source text of this token
    pub fn lexeme(&self) -> &'a str {
        self.location.text()
    }

    /// Unsigned integer literals take part in the token separator rule,
    /// signed ones do not.
    pub fn is_unsigned_integer(&self) -> bool {
        self.kind == TokenKind::IntegerLiteral
            && self.lexeme().bytes().next().is_some_and(|b| b.is_ascii_digit())
    }

    /// Identifiers, word symbols and unsigned integers must be separated by
    /// whitespace or comments when adjacent.
    pub fn is_word_like(&self) -> bool {
        self.kind == TokenKind::Identifier || self.kind.is_keyword() || self.is_unsigned_integer()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
