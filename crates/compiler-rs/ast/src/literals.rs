//! Identifier and literal leaves

use std::num::IntErrorKind;

use errors::{InternalCompilerError, ParserError, ParserResult};
use tokens::{SourceLocation, Token, TokenKind};

use crate::{Print, Spanned, TreePrinter};

/// Identifier leaf
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identifier<'a> {
    pub token: &'a Token<'a>,
}

impl<'a> Identifier<'a> {
    pub fn new(token: &'a Token<'a>) -> Self {
        Self { token }
    }

    /// The identifier as written in the source
    pub fn name(&self) -> &'a str {
        self.token.lexeme()
    }

    /// Identifiers are case-insensitive (6.1.3)
    pub fn matches(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }
}

impl<'a> Spanned<'a> for Identifier<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.token.location
    }
}

impl Print for Identifier<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("Identifier", Some(self.source_location()), &[&self.name()]);
    }
}

/// Integer literal with its converted value. A sign attached by the lexer is
/// part of the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegerLiteral<'a> {
    pub token: &'a Token<'a>,
    pub value: i64,
}

impl<'a> IntegerLiteral<'a> {
    pub fn new(token: &'a Token<'a>) -> ParserResult<'a, Self> {
        expect_kind(token, TokenKind::IntegerLiteral)?;
        match token.lexeme().parse::<i64>() {
            Ok(value) => Ok(Self { token, value }),
            Err(error) if matches!(error.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Err(ParserError::syntax("Integer literal out of range.", token.location))
            }
            Err(_) => Err(InternalCompilerError::new(format!("Invalid integer literal `{}`.", token.lexeme())).into()),
        }
    }
}

impl<'a> Spanned<'a> for IntegerLiteral<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.token.location
    }
}

impl Print for IntegerLiteral<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("IntegerLiteral", Some(self.source_location()), &[&self.value]);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealLiteral<'a> {
    pub token: &'a Token<'a>,
    pub value: f64,
}

impl<'a> RealLiteral<'a> {
    pub fn new(token: &'a Token<'a>) -> Result<Self, InternalCompilerError> {
        expect_kind(token, TokenKind::RealLiteral)?;
        let value = token
            .lexeme()
            .parse::<f64>()
            .map_err(|_| InternalCompilerError::new(format!("Invalid real literal `{}`.", token.lexeme())))?;
        Ok(Self { token, value })
    }
}

impl<'a> Spanned<'a> for RealLiteral<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.token.location
    }
}

impl Print for RealLiteral<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("RealLiteral", Some(self.source_location()), &[&format_args!("{:?}", self.value)]);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharLiteral<'a> {
    pub token: &'a Token<'a>,
    pub value: char,
}

impl<'a> CharLiteral<'a> {
    /// Accepts `'x'` and the apostrophe image `''''`
    pub fn new(token: &'a Token<'a>) -> Result<Self, InternalCompilerError> {
        expect_kind(token, TokenKind::CharLiteral)?;
        let value = match token.lexeme().as_bytes() {
            [b'\'', b'\'', b'\'', b'\''] => '\'',
            [b'\'', ch, b'\''] if *ch != b'\'' => *ch as char,
            _ => {
                return Err(InternalCompilerError::new(format!(
                    "Invalid character literal `{}`.",
                    token.lexeme()
                )))
            }
        };
        Ok(Self { token, value })
    }
}

impl<'a> Spanned<'a> for CharLiteral<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.token.location
    }
}

impl Print for CharLiteral<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("CharLiteral", Some(self.source_location()), &[&format_args!("{:?}", self.value)]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral<'a> {
    pub token: &'a Token<'a>,
    /// Contents with apostrophe images collapsed
    pub value: String,
}

impl<'a> StringLiteral<'a> {
    pub fn new(token: &'a Token<'a>) -> Result<Self, InternalCompilerError> {
        expect_kind(token, TokenKind::StringLiteral)?;
        let lexeme = token.lexeme();
        let contents = lexeme
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
            .ok_or_else(|| InternalCompilerError::new(format!("Invalid string literal `{}`.", lexeme)))?;
        Ok(Self {
            token,
            value: contents.replace("''", "'"),
        })
    }
}

impl<'a> Spanned<'a> for StringLiteral<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.token.location
    }
}

impl Print for StringLiteral<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("StringLiteral", Some(self.source_location()), &[&format_args!("{:?}", self.value)]);
    }
}

fn expect_kind(token: &Token<'_>, kind: TokenKind) -> Result<(), InternalCompilerError> {
    if token.kind == kind {
        Ok(())
    } else {
        Err(InternalCompilerError::new(format!(
            "Expected {} token, got {}.",
            kind, token.kind
        )))
    }
}
