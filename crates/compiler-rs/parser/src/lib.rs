//! Pascal Parser
//!
//! This crate implements a recursive descent parser for the declaration part
//! of an ISO 7185 block. It builds an AST that borrows from the token slice
//! produced by the lexer.
//!
//! Parsing fails fast: the first error aborts the parse, carrying the notes
//! that were active when it was raised.

mod core;
mod declarations;
mod types;

/// Deepest nesting of type denoters and record field lists accepted
pub const MAX_NESTING_DEPTH: usize = 64;

use ast::Block;
use errors::{InternalCompilerError, Note, ParserResult};
use tokens::{Token, TokenKind};

/// Parser for the declaration part of a block
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    /// The terminating end-of-file token, returned for lookahead past the end
    eof: &'a Token<'a>,
    index: usize,
    /// Innermost last
    notes: Vec<Note<'a>>,
    /// Nesting of type denoters and field lists currently being parsed
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token stream that ends with end of file
    pub fn new(tokens: &'a [Token<'a>]) -> Result<Self, InternalCompilerError> {
        match tokens.last() {
            Some(eof) if eof.kind == TokenKind::Eof => Ok(Self {
                tokens,
                eof,
                index: 0,
                notes: Vec::new(),
                depth: 0,
            }),
            _ => Err(InternalCompilerError::new(
                "Token stream must be terminated by an end of file token.",
            )),
        }
    }

    /// Parse a block followed by end of file
    pub fn parse(mut self) -> ParserResult<'a, Block<'a>> {
        let block = self.parse_block()?;
        self.consume(TokenKind::Eof, "Expected end of file.")?;
        Ok(block)
    }
}

/// Parse a token stream into a [`Block`]
pub fn parse<'a>(tokens: &'a [Token<'a>]) -> ParserResult<'a, Block<'a>> {
    Parser::new(tokens)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{Constant, OrdinalType, Spanned, Type};
    use errors::ParserError;
    use tokens::SourceLocation;

    fn lex(source: &str) -> Vec<Token<'_>> {
        lexer::tokenize("test.pas", source).unwrap()
    }

    #[test]
    fn test_parse_empty() {
        let tokens = lex("");
        let block = parse(&tokens).unwrap();
        assert!(block.label_declarations.is_none());
        assert!(block.constant_definitions.is_none());
        assert!(block.type_definitions.is_none());
        assert!(block.variable_declarations.is_none());
        assert_eq!(block.source_location(), None);
    }

    #[test]
    fn test_parse_comments_only() {
        let tokens = lex("{ nothing here }\n(* at all *)\n");
        assert!(parse(&tokens).unwrap().is_empty());
    }

    #[test]
    fn test_missing_eof_is_internal_error() {
        let tokens = lex("const");
        let without_eof = &tokens[..1];
        assert!(Parser::new(without_eof).is_err());
        assert!(matches!(parse(without_eof), Err(ParserError::Internal(_))));
        assert!(matches!(parse(&[]), Err(ParserError::Internal(_))));
    }

    #[test]
    fn test_constant_kinds() {
        let tokens = lex("const x = 5; y = 'a'; z = 'hello';");
        let block = parse(&tokens).unwrap();
        let constants = block.constant_definitions.unwrap();
        let definitions = constants.definitions();
        assert_eq!(definitions.len(), 3);
        assert!(matches!(definitions[0].constant, Constant::Integer(_)));
        assert!(matches!(definitions[1].constant, Constant::Char(_)));
        assert!(matches!(definitions[2].constant, Constant::String(_)));
    }

    #[test]
    fn test_section_order() {
        let tokens = lex("label 1; const c = 1; type t = integer; var v: t;");
        let block = parse(&tokens).unwrap();
        assert!(block.label_declarations.is_some());
        assert!(block.constant_definitions.is_some());
        assert!(block.type_definitions.is_some());
        assert!(block.variable_declarations.is_some());
        assert_eq!(block.source_location().map(|location| location.text()), Some("label 1; const c = 1; type t = integer; var v: t"));
    }

    #[test]
    fn test_sections_out_of_order_fail() {
        let tokens = lex("var v: integer; const c = 1;");
        let error = parse(&tokens).unwrap_err();
        assert_eq!(error.message(), "Expected end of file.");
        assert_eq!(error.location().map(|location| location.text()), Some("const"));
    }

    #[test]
    fn test_required_types_case_insensitive() {
        let tokens = lex("type a = INTEGER; b = Boolean; c = cHaR; d = REAL;");
        let block = parse(&tokens).unwrap();
        let types = block.type_definitions.unwrap();
        let kinds: Vec<_> = types.definitions().iter().map(|definition| &definition.type_denoter).collect();
        assert!(matches!(kinds[0], Type::Ordinal(OrdinalType::Integer(_))));
        assert!(matches!(kinds[1], Type::Ordinal(OrdinalType::Boolean(_))));
        assert!(matches!(kinds[2], Type::Ordinal(OrdinalType::Char(_))));
        assert!(matches!(kinds[3], Type::Real(_)));
    }

    #[test]
    fn test_error_notes_are_scoped() {
        let tokens = lex("const x = ;");
        let error = parse(&tokens).unwrap_err();
        assert_eq!(error.message(), "Expected constant value in constant definition.");
        let notes = error.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, "In constant definitions starting from here.");
        assert_eq!(notes[0].location, tokens[0].location);
    }

    #[test]
    fn test_notes_do_not_leak_between_sections() {
        // The constant section's note is popped before the type section starts
        let tokens = lex("const x = 1; type t = ;");
        let error = parse(&tokens).unwrap_err();
        let messages: Vec<_> = error.notes().iter().map(|note| note.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["In type definitions starting from here.", "In type definition of `t`."]
        );
    }

    #[test]
    fn test_integer_out_of_range_carries_notes() {
        let tokens = lex("const big = 99999999999999999999;");
        let error = parse(&tokens).unwrap_err();
        assert_eq!(error.message(), "Integer literal out of range.");
        assert_eq!(error.notes().len(), 1);
    }

    #[test]
    fn test_peek_is_clamped_to_eof() {
        let tokens = lex("x");
        let parser = Parser::new(&tokens).unwrap();
        assert_eq!(parser.peek(0).kind, TokenKind::Identifier);
        assert_eq!(parser.peek(1).kind, TokenKind::Eof);
        assert_eq!(parser.peek(100).kind, TokenKind::Eof);
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let tokens = lex("x");
        let mut parser = Parser::new(&tokens).unwrap();
        parser.advance();
        parser.advance();
        parser.advance();
        assert!(parser.check(TokenKind::Eof));
        assert!(parser.continues_with(&[TokenKind::Eof, TokenKind::Eof]));
    }

    #[test]
    fn test_with_note_pops_on_error() {
        let tokens = lex("x");
        let mut parser = Parser::new(&tokens).unwrap();
        let location = SourceLocation::new("test.pas", "x", 0, 1);
        let result: ParserResult<()> = parser.with_note(location, "outer", |parser| {
            Err(parser.error("failure", location))
        });
        assert_eq!(result.unwrap_err().notes().len(), 1);
        assert!(parser.notes.is_empty());
    }
}
