//! Type parsing
//!
//! This module handles parsing of type denoters: ordinal, real, pointer and
//! structured types, including record field lists with variant parts.

use ast::{
    ArrayTypeDefinition, BooleanType, CaseConstantList, CharType, EnumeratedTypeDefinition, FieldList,
    FileTypeDefinition, FixedPart, Identifier, IntegerType, OrdinalType, PointerTypeDefinition, RealType,
    RecordSection, RecordTypeDefinition, SetTypeDefinition, StructuredTypeDefinition, SubrangeTypeDefinition,
    Type, TypeAliasDefinition, UnpackedStructuredTypeDefinition, Variant, VariantList, VariantPart,
    VariantSelector,
};
use errors::ParserResult;
use tokens::TokenKind;

/// Type parsing functionality
impl<'a> super::Parser<'a> {
    /// Parse type: structured-type | pointer-type | REAL | ordinal-type
    pub(super) fn parse_type(&mut self) -> ParserResult<'a, Type<'a>> {
        self.nested(Self::parse_type_denoter)
    }

    fn parse_type_denoter(&mut self) -> ParserResult<'a, Type<'a>> {
        if self.check_any(&[
            TokenKind::KwArray,
            TokenKind::KwRecord,
            TokenKind::KwSet,
            TokenKind::KwFile,
            TokenKind::KwPacked,
        ]) {
            Ok(Type::Structured(self.parse_structured_type()?))
        } else if self.check(TokenKind::Caret) {
            Ok(Type::Pointer(self.parse_pointer_type()?))
        } else if let Some(token) = self.match_required_type("real") {
            Ok(Type::Real(RealType { token }))
        } else {
            Ok(Type::Ordinal(self.parse_ordinal_type()?))
        }
    }

    /// Parse pointer type: ^ type-identifier
    fn parse_pointer_type(&mut self) -> ParserResult<'a, PointerTypeDefinition<'a>> {
        let caret = self.consume(TokenKind::Caret, "Expected `^`.")?;
        match self.match_token(TokenKind::Identifier) {
            Some(target) => Ok(PointerTypeDefinition {
                caret,
                target: Identifier::new(target),
            }),
            None => Err(self.error("Expected type reference after `^`.", caret.location)),
        }
    }

    /// Parse ordinal type: BOOLEAN | CHAR | INTEGER | enumerated | subrange | type-identifier
    pub(super) fn parse_ordinal_type(&mut self) -> ParserResult<'a, OrdinalType<'a>> {
        if let Some(token) = self.match_required_type("boolean") {
            return Ok(OrdinalType::Boolean(BooleanType { token }));
        }
        if let Some(token) = self.match_required_type("char") {
            return Ok(OrdinalType::Char(CharType { token }));
        }
        if let Some(token) = self.match_required_type("integer") {
            return Ok(OrdinalType::Integer(IntegerType { token }));
        }

        if self.check(TokenKind::LeftParen) {
            return Ok(OrdinalType::Enumerated(self.parse_enumerated_type()?));
        }

        let starts_subrange = self.check_any(&[
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::CharLiteral,
            TokenKind::IntegerLiteral,
        ]) || self.continues_with(&[TokenKind::Identifier, TokenKind::DotDot]);
        if starts_subrange {
            return Ok(OrdinalType::Subrange(self.parse_subrange_type()?));
        }

        let identifier = self.consume(TokenKind::Identifier, "Expected identifier in type definition.")?;
        Ok(OrdinalType::Alias(TypeAliasDefinition {
            identifier: Identifier::new(identifier),
        }))
    }

    /// Parse enumerated type: ( identifier-list )
    fn parse_enumerated_type(&mut self) -> ParserResult<'a, EnumeratedTypeDefinition<'a>> {
        let left_paren = self.consume(TokenKind::LeftParen, "Expected `(` in enumerated type definition.")?;
        let identifiers = self.parse_identifier_list()?;
        let right_paren = self.consume(TokenKind::RightParen, "Expected `)` in enumerated type definition.")?;
        Ok(EnumeratedTypeDefinition {
            left_paren,
            identifiers,
            right_paren,
        })
    }

    /// Parse subrange type: constant .. constant
    fn parse_subrange_type(&mut self) -> ParserResult<'a, SubrangeTypeDefinition<'a>> {
        let lower = self.parse_constant()?;
        self.consume(TokenKind::DotDot, "Expected `..` in subrange type definition.")?;
        let upper = self.parse_constant()?;
        Ok(SubrangeTypeDefinition { lower, upper })
    }

    /// Parse structured type: [PACKED] (array-type | record-type | set-type | file-type)
    fn parse_structured_type(&mut self) -> ParserResult<'a, StructuredTypeDefinition<'a>> {
        let packed = self.match_token(TokenKind::KwPacked);
        let definition = match self.current().kind {
            TokenKind::KwArray => UnpackedStructuredTypeDefinition::Array(self.parse_array_type()?),
            TokenKind::KwRecord => UnpackedStructuredTypeDefinition::Record(self.parse_record_type()?),
            TokenKind::KwSet => UnpackedStructuredTypeDefinition::Set(self.parse_set_type()?),
            TokenKind::KwFile => UnpackedStructuredTypeDefinition::File(self.parse_file_type()?),
            _ => {
                return Err(self.error("Expected structured type definition.", self.current().location));
            }
        };
        Ok(StructuredTypeDefinition { packed, definition })
    }

    /// Parse array type: ARRAY [ index-type { , index-type } ] OF component-type
    fn parse_array_type(&mut self) -> ParserResult<'a, ArrayTypeDefinition<'a>> {
        let keyword = self.consume(TokenKind::KwArray, "Expected `array`.")?;
        self.consume(TokenKind::LeftBracket, "Expected `[` in array type definition.")?;
        let mut index_types = vec![self.parse_ordinal_type()?];
        while self.match_token(TokenKind::Comma).is_some() {
            index_types.push(self.parse_ordinal_type()?);
        }
        self.consume(TokenKind::RightBracket, "Expected `]` in array type definition.")?;
        self.consume(TokenKind::KwOf, "Expected `of` in array type definition.")?;
        let component_type = self.parse_type()?;
        Ok(ArrayTypeDefinition::new(keyword, index_types, component_type)?)
    }

    /// Parse record type: RECORD [field-list] END
    fn parse_record_type(&mut self) -> ParserResult<'a, RecordTypeDefinition<'a>> {
        let keyword = self.consume(TokenKind::KwRecord, "Expected `record`.")?;
        let field_list = if self.check(TokenKind::KwEnd) {
            None
        } else {
            Some(self.parse_field_list()?)
        };
        let end = self.consume(TokenKind::KwEnd, "Expected `end`.")?;
        Ok(RecordTypeDefinition {
            keyword,
            field_list,
            end,
        })
    }

    /// Parse field list: (fixed-part [; variant-part] | variant-part) [;]
    fn parse_field_list(&mut self) -> ParserResult<'a, FieldList<'a>> {
        self.nested(Self::parse_field_list_parts)
    }

    fn parse_field_list_parts(&mut self) -> ParserResult<'a, FieldList<'a>> {
        let (fixed_part, variant_part) = if self.check(TokenKind::Identifier) {
            let fixed_part = self.parse_fixed_part()?;
            let variant_part = if self.continues_with(&[TokenKind::Semicolon, TokenKind::KwCase]) {
                self.advance();
                Some(self.parse_variant_part()?)
            } else {
                None
            };
            (Some(fixed_part), variant_part)
        } else if self.check(TokenKind::KwCase) {
            (None, Some(self.parse_variant_part()?))
        } else {
            return Err(self.error("Expected field list.", self.current().location));
        };
        self.match_token(TokenKind::Semicolon);
        Ok(FieldList::new(fixed_part, variant_part)?)
    }

    /// Parse fixed part: record-section { ; record-section }
    fn parse_fixed_part(&mut self) -> ParserResult<'a, FixedPart<'a>> {
        let mut sections = vec![self.parse_record_section()?];
        while self.continues_with(&[TokenKind::Semicolon, TokenKind::Identifier]) {
            self.advance();
            sections.push(self.parse_record_section()?);
        }
        Ok(FixedPart::new(sections)?)
    }

    fn parse_record_section(&mut self) -> ParserResult<'a, RecordSection<'a>> {
        let identifiers = self.parse_identifier_list()?;
        self.consume(TokenKind::Colon, "Expected `:` in record section.")?;
        let type_denoter = self.parse_type()?;
        Ok(RecordSection {
            identifiers,
            type_denoter,
        })
    }

    /// Parse variant part: CASE variant-selector OF variant { ; variant }
    fn parse_variant_part(&mut self) -> ParserResult<'a, VariantPart<'a>> {
        let keyword = self.consume(TokenKind::KwCase, "Expected `case`.")?;
        let selector = self.parse_variant_selector()?;
        self.consume(TokenKind::KwOf, "Expected `of`.")?;
        let variants = self.parse_variant_list()?;
        Ok(VariantPart {
            keyword,
            selector,
            variants,
        })
    }

    /// Parse variant selector: [tag-field :] tag-type
    fn parse_variant_selector(&mut self) -> ParserResult<'a, VariantSelector<'a>> {
        let tag_field = if self.continues_with(&[TokenKind::Identifier, TokenKind::Colon]) {
            let identifier = Identifier::new(self.current());
            self.advance();
            self.advance();
            Some(identifier)
        } else {
            None
        };
        let tag_type = self.parse_ordinal_type()?;
        Ok(VariantSelector { tag_field, tag_type })
    }

    /// A `;` before `end` or `)` closes the list instead of starting a variant
    fn parse_variant_list(&mut self) -> ParserResult<'a, VariantList<'a>> {
        let mut variants = vec![self.parse_variant()?];
        while self.match_token(TokenKind::Semicolon).is_some() {
            if self.check_any(&[TokenKind::KwEnd, TokenKind::RightParen]) {
                break;
            }
            variants.push(self.parse_variant()?);
        }
        Ok(VariantList::new(variants)?)
    }

    /// Parse variant: case-constant-list : ( [field-list] )
    fn parse_variant(&mut self) -> ParserResult<'a, Variant<'a>> {
        let mut constants = vec![self.parse_constant()?];
        while self.match_token(TokenKind::Comma).is_some() {
            constants.push(self.parse_constant()?);
        }
        let constants = CaseConstantList::new(constants)?;

        self.consume(TokenKind::Colon, "Expected `:`.")?;
        self.consume(TokenKind::LeftParen, "Expected `(`.")?;
        let field_list = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(Box::new(self.parse_field_list()?))
        };
        let right_paren = self.consume(TokenKind::RightParen, "Expected `)`.")?;
        Ok(Variant {
            constants,
            field_list,
            right_paren,
        })
    }

    /// Parse set type: SET OF base-type
    fn parse_set_type(&mut self) -> ParserResult<'a, SetTypeDefinition<'a>> {
        let keyword = self.consume(TokenKind::KwSet, "Expected `set`.")?;
        self.consume(TokenKind::KwOf, "Expected `of` in set type definition.")?;
        let base_type = self.parse_ordinal_type()?;
        Ok(SetTypeDefinition { keyword, base_type })
    }

    /// Parse file type: FILE OF component-type
    fn parse_file_type(&mut self) -> ParserResult<'a, FileTypeDefinition<'a>> {
        let keyword = self.consume(TokenKind::KwFile, "Expected `file`.")?;
        self.consume(TokenKind::KwOf, "Expected `of` in file type definition.")?;
        let component_type = self.parse_type()?;
        Ok(FileTypeDefinition {
            keyword,
            component_type: Box::new(component_type),
        })
    }
}
