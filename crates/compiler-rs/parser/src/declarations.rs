//! Declaration parsing
//!
//! This module handles the block and its label, constant, type and variable
//! sections, along with constants and identifier lists.

use ast::{
    Block, CharConstant, CharLiteral, Constant, ConstantDefinition, ConstantDefinitions, ConstantReference,
    Identifier, IdentifierList, LabelDeclaration, LabelDeclarations, RealConstant, RealLiteral,
    StringConstant, StringLiteral, TypeDefinition, TypeDefinitions, VariableDeclaration, VariableDeclarations,
};
use errors::ParserResult;
use log::trace;
use tokens::TokenKind;

/// Declaration parsing functionality
impl<'a> super::Parser<'a> {
    /// Parse block: [label-declarations] [constant-definitions] [type-definitions] [variable-declarations]
    pub(super) fn parse_block(&mut self) -> ParserResult<'a, Block<'a>> {
        let label_declarations = if self.check(TokenKind::KwLabel) {
            Some(self.parse_label_declarations()?)
        } else {
            None
        };
        let constant_definitions = if self.check(TokenKind::KwConst) {
            Some(self.parse_constant_definitions()?)
        } else {
            None
        };
        let type_definitions = if self.check(TokenKind::KwType) {
            Some(self.parse_type_definitions()?)
        } else {
            None
        };
        let variable_declarations = if self.check(TokenKind::KwVar) {
            Some(self.parse_variable_declarations()?)
        } else {
            None
        };
        Ok(Block {
            label_declarations,
            constant_definitions,
            type_definitions,
            variable_declarations,
        })
    }

    /// Parse label declarations: LABEL label { , label } ;
    pub(super) fn parse_label_declarations(&mut self) -> ParserResult<'a, LabelDeclarations<'a>> {
        let keyword = self.consume(TokenKind::KwLabel, "Expected `label`.")?;
        trace!("label declarations at {}", keyword.location);

        self.with_note(keyword.location, "In label declarations starting from here.", |parser| {
            let mut labels = vec![parser.parse_label()?];
            while parser.match_token(TokenKind::Comma).is_some() {
                labels.push(parser.parse_label()?);
            }
            parser.consume(TokenKind::Semicolon, "Expected semicolon after label declarations.")?;
            Ok(LabelDeclarations::new(keyword, labels)?)
        })
    }

    /// Parse label: digit-sequence (6.1.6)
    fn parse_label(&mut self) -> ParserResult<'a, LabelDeclaration<'a>> {
        let token = self.consume(TokenKind::IntegerLiteral, "Expected label.")?;
        if !token.is_unsigned_integer() {
            return Err(self.error("Expected label.", token.location));
        }
        Ok(LabelDeclaration {
            label: self.integer_literal(token)?,
        })
    }

    /// Parse constant definitions: CONST identifier = constant ; { identifier = constant ; }
    pub(super) fn parse_constant_definitions(&mut self) -> ParserResult<'a, ConstantDefinitions<'a>> {
        let keyword = self.consume(TokenKind::KwConst, "Expected `const`.")?;
        trace!("constant definitions at {}", keyword.location);

        self.with_note(keyword.location, "In constant definitions starting from here.", |parser| {
            let mut definitions = Vec::new();
            loop {
                definitions.push(parser.parse_constant_definition()?);
                parser.consume(TokenKind::Semicolon, "Expected semicolon after constant definition.")?;
                if !parser.check(TokenKind::Identifier) {
                    break;
                }
            }
            Ok(ConstantDefinitions::new(keyword, definitions)?)
        })
    }

    fn parse_constant_definition(&mut self) -> ParserResult<'a, ConstantDefinition<'a>> {
        let identifier = self.consume(TokenKind::Identifier, "Expected identifier in constant definition.")?;
        self.consume(TokenKind::Equal, "Expected equals sign in constant definition.")?;
        let constant = self.parse_constant()?;
        Ok(ConstantDefinition {
            identifier: Identifier::new(identifier),
            constant,
        })
    }

    /// Parse constant: [sign] (unsigned-number | constant-identifier) | character-string
    pub(super) fn parse_constant(&mut self) -> ParserResult<'a, Constant<'a>> {
        let sign = self
            .match_token(TokenKind::Plus)
            .or_else(|| self.match_token(TokenKind::Minus));

        if sign.is_some()
            && !self.check_any(&[TokenKind::IntegerLiteral, TokenKind::RealLiteral, TokenKind::Identifier])
        {
            return Err(self.error(
                "Expected integer, real, or identifier after sign in constant definition.",
                self.current().location,
            ));
        }

        let token = self.current();
        let constant = match token.kind {
            TokenKind::IntegerLiteral => Constant::Integer(self.integer_constant(sign, token)?),
            TokenKind::RealLiteral => Constant::Real(RealConstant::new(sign, RealLiteral::new(token)?)),
            TokenKind::Identifier => Constant::Reference(ConstantReference {
                sign,
                identifier: Identifier::new(token),
            }),
            TokenKind::CharLiteral => Constant::Char(CharConstant {
                literal: CharLiteral::new(token)?,
            }),
            TokenKind::StringLiteral => Constant::String(StringConstant {
                literal: StringLiteral::new(token)?,
            }),
            _ => {
                return Err(self.error("Expected constant value in constant definition.", token.location));
            }
        };
        self.advance();
        Ok(constant)
    }

    /// Parse type definitions: TYPE identifier = type ; { identifier = type ; }
    pub(super) fn parse_type_definitions(&mut self) -> ParserResult<'a, TypeDefinitions<'a>> {
        let keyword = self.consume(TokenKind::KwType, "Expected `type`.")?;
        trace!("type definitions at {}", keyword.location);

        self.with_note(keyword.location, "In type definitions starting from here.", |parser| {
            let mut definitions = Vec::new();
            loop {
                definitions.push(parser.parse_type_definition()?);
                parser.consume(TokenKind::Semicolon, "Expected semicolon after type definition.")?;
                if !parser.check(TokenKind::Identifier) {
                    break;
                }
            }
            Ok(TypeDefinitions::new(keyword, definitions)?)
        })
    }

    fn parse_type_definition(&mut self) -> ParserResult<'a, TypeDefinition<'a>> {
        let identifier = self.consume(TokenKind::Identifier, "Expected identifier in type definition.")?;
        let note = format!("In type definition of `{}`.", identifier.lexeme());

        self.with_note(identifier.location, note, |parser| {
            parser.consume(TokenKind::Equal, "Expected equals sign in type definition.")?;
            let type_denoter = parser.parse_type()?;
            Ok(TypeDefinition {
                identifier: Identifier::new(identifier),
                type_denoter,
            })
        })
    }

    /// Parse variable declarations: VAR identifier-list : type ; { identifier-list : type ; }
    pub(super) fn parse_variable_declarations(&mut self) -> ParserResult<'a, VariableDeclarations<'a>> {
        let keyword = self.consume(TokenKind::KwVar, "Expected `var`.")?;
        trace!("variable declarations at {}", keyword.location);

        self.with_note(keyword.location, "In variable declarations starting from here.", |parser| {
            let mut declarations = Vec::new();
            loop {
                declarations.push(parser.parse_variable_declaration()?);
                parser.consume(TokenKind::Semicolon, "Expected `;`.")?;
                if !parser.check(TokenKind::Identifier) {
                    break;
                }
            }
            Ok(VariableDeclarations::new(keyword, declarations)?)
        })
    }

    fn parse_variable_declaration(&mut self) -> ParserResult<'a, VariableDeclaration<'a>> {
        let identifiers = self.parse_identifier_list()?;
        self.consume(TokenKind::Colon, "Expected `:`.")?;
        let type_denoter = self.parse_type()?;
        Ok(VariableDeclaration {
            identifiers,
            type_denoter,
        })
    }

    /// Parse identifier list: identifier { , identifier }
    pub(super) fn parse_identifier_list(&mut self) -> ParserResult<'a, IdentifierList<'a>> {
        let mut identifiers = vec![Identifier::new(
            self.consume(TokenKind::Identifier, "Expected identifier.")?,
        )];
        while self.match_token(TokenKind::Comma).is_some() {
            identifiers.push(Identifier::new(
                self.consume(TokenKind::Identifier, "Expected identifier.")?,
            ));
        }
        Ok(IdentifierList::new(identifiers)?)
    }
}
