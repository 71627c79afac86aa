//! Core parser functionality
//!
//! This module contains the fundamental token management and error reporting
//! utilities used throughout the parser.

use ast::{IntegerConstant, IntegerLiteral};
use errors::{Note, ParserError, ParserResult};
use tokens::{SourceLocation, Token, TokenKind};

/// Core parser functionality for token management
impl<'a> super::Parser<'a> {
    /// Get the current token, end of file once the stream is exhausted
    pub(super) fn current(&self) -> &'a Token<'a> {
        self.peek(0)
    }

    /// Look ahead `offset` tokens, clamped to the final end of file
    pub(super) fn peek(&self, offset: usize) -> &'a Token<'a> {
        let tokens: &'a [Token<'a>] = self.tokens;
        tokens.get(self.index + offset).unwrap_or(self.eof)
    }

    /// Advance to the next token; never moves past end of file
    pub(super) fn advance(&mut self) {
        if self.current().kind != TokenKind::Eof {
            self.index += 1;
        }
    }

    /// Check if current token matches a kind
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(super) fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current().kind)
    }

    /// Check if the upcoming tokens match `kinds` in order
    pub(super) fn continues_with(&self, kinds: &[TokenKind]) -> bool {
        kinds
            .iter()
            .enumerate()
            .all(|(offset, &kind)| self.peek(offset).kind == kind)
    }

    /// Consume current token if it matches
    pub(super) fn match_token(&mut self, kind: TokenKind) -> Option<&'a Token<'a>> {
        if self.check(kind) {
            let token = self.current();
            self.advance();
            Some(token)
        } else {
            None
        }
    }

    /// Consume current token if it matches, otherwise error
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> ParserResult<'a, &'a Token<'a>> {
        match self.match_token(kind) {
            Some(token) => Ok(token),
            None => Err(self.error(message, self.current().location)),
        }
    }

    /// Check for one of the required type identifiers, which are not reserved
    pub(super) fn check_required_type(&self, name: &str) -> bool {
        let token = self.current();
        token.kind == TokenKind::Identifier && token.lexeme().eq_ignore_ascii_case(name)
    }

    pub(super) fn match_required_type(&mut self, name: &str) -> Option<&'a Token<'a>> {
        if self.check_required_type(name) {
            let token = self.current();
            self.advance();
            Some(token)
        } else {
            None
        }
    }

    /// Create a syntax error carrying the active notes
    pub(super) fn error(&self, message: impl Into<String>, location: SourceLocation<'a>) -> ParserError<'a> {
        ParserError::InvalidSyntax {
            message: message.into(),
            location,
            notes: self.notes.clone(),
        }
    }

    /// Convert an integer token, attaching the active notes to range errors
    pub(super) fn integer_literal(&self, token: &'a Token<'a>) -> ParserResult<'a, IntegerLiteral<'a>> {
        IntegerLiteral::new(token).map_err(|error| error.with_notes(self.notes.clone()))
    }

    /// Convert an integer token and its separate sign, attaching the active notes to range errors
    pub(super) fn integer_constant(
        &self,
        sign: Option<&'a Token<'a>>,
        token: &'a Token<'a>,
    ) -> ParserResult<'a, IntegerConstant<'a>> {
        IntegerConstant::new(sign, token).map_err(|error| error.with_notes(self.notes.clone()))
    }

    /// Run a recursive rule, failing instead of overflowing the stack on deep nesting
    pub(super) fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParserResult<'a, T>) -> ParserResult<'a, T> {
        if self.depth >= super::MAX_NESTING_DEPTH {
            return Err(self.error("Type nesting too deep.", self.current().location));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Run `parse` with a note pushed for its duration
    pub(super) fn with_note<T>(
        &mut self,
        location: SourceLocation<'a>,
        message: impl Into<String>,
        parse: impl FnOnce(&mut Self) -> ParserResult<'a, T>,
    ) -> ParserResult<'a, T> {
        self.notes.push(Note::new(location, message));
        let result = parse(self);
        self.notes.pop();
        result
    }
}
