//! Constants (6.3)

use std::num::IntErrorKind;

use errors::{InternalCompilerError, ParserError, ParserResult};
use tokens::{SourceLocation, Token, TokenKind};

use crate::{CharLiteral, Identifier, Print, RealLiteral, Spanned, StringLiteral, TreePrinter};

/// A constant as it appears in a definition, subrange bound or case label
#[derive(Debug, Clone, PartialEq)]
pub enum Constant<'a> {
    Integer(IntegerConstant<'a>),
    Real(RealConstant<'a>),
    Char(CharConstant<'a>),
    String(StringConstant<'a>),
    /// Reference to a named constant, resolved later
    Reference(ConstantReference<'a>),
}

impl<'a> Spanned<'a> for Constant<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        match self {
            Constant::Integer(constant) => constant.source_location(),
            Constant::Real(constant) => constant.source_location(),
            Constant::Char(constant) => constant.source_location(),
            Constant::String(constant) => constant.source_location(),
            Constant::Reference(constant) => constant.source_location(),
        }
    }
}

impl Print for Constant<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        match self {
            Constant::Integer(constant) => constant.print(printer),
            Constant::Real(constant) => constant.print(printer),
            Constant::Char(constant) => constant.print(printer),
            Constant::String(constant) => constant.print(printer),
            Constant::Reference(constant) => constant.print(printer),
        }
    }
}

fn signed_location<'a>(sign: Option<&'a Token<'a>>, location: SourceLocation<'a>) -> SourceLocation<'a> {
    match sign {
        Some(sign) => sign.location.join(&location),
        None => location,
    }
}

fn is_negative(sign: Option<&Token<'_>>) -> bool {
    sign.is_some_and(|sign| sign.kind == TokenKind::Minus)
}

/// Integer constant with any separate sign folded into its value
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerConstant<'a> {
    /// Separate `+`/`-` token, e.g. in `- 5`
    pub sign: Option<&'a Token<'a>>,
    pub token: &'a Token<'a>,
    value: i64,
}

impl<'a> IntegerConstant<'a> {
    /// Convert `token`, applying `sign`. The result must fit in an `i64`, so
    /// `- 9223372036854775808` is accepted and `- -9223372036854775808` is not.
    pub fn new(sign: Option<&'a Token<'a>>, token: &'a Token<'a>) -> ParserResult<'a, Self> {
        if token.kind != TokenKind::IntegerLiteral {
            return Err(InternalCompilerError::new(format!(
                "Expected {} token, got {}.",
                TokenKind::IntegerLiteral,
                token.kind
            ))
            .into());
        }
        let location = signed_location(sign, token.location);
        let magnitude = match token.lexeme().parse::<i128>() {
            Ok(magnitude) => magnitude,
            Err(error) if matches!(error.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(ParserError::syntax("Integer literal out of range.", location));
            }
            Err(_) => {
                return Err(InternalCompilerError::new(format!("Invalid integer literal `{}`.", token.lexeme())).into());
            }
        };
        let signed = if is_negative(sign) {
            magnitude.checked_neg()
        } else {
            Some(magnitude)
        };
        match signed.and_then(|value| i64::try_from(value).ok()) {
            Some(value) => Ok(Self { sign, token, value }),
            None => Err(ParserError::syntax("Integer literal out of range.", location)),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl<'a> Spanned<'a> for IntegerConstant<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        signed_location(self.sign, self.token.location)
    }
}

impl Print for IntegerConstant<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("IntegerConstant", Some(self.source_location()), &[&self.value]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RealConstant<'a> {
    pub sign: Option<&'a Token<'a>>,
    pub literal: RealLiteral<'a>,
}

impl<'a> RealConstant<'a> {
    pub fn new(sign: Option<&'a Token<'a>>, literal: RealLiteral<'a>) -> Self {
        Self { sign, literal }
    }

    pub fn value(&self) -> f64 {
        if is_negative(self.sign) {
            -self.literal.value
        } else {
            self.literal.value
        }
    }
}

impl<'a> Spanned<'a> for RealConstant<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        signed_location(self.sign, self.literal.source_location())
    }
}

impl Print for RealConstant<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        match self.sign {
            Some(sign) => printer.node("RealConstant", Some(self.source_location()), &[&sign.lexeme()]),
            None => printer.node("RealConstant", Some(self.source_location()), &[]),
        }
        printer.children(&[&self.literal]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharConstant<'a> {
    pub literal: CharLiteral<'a>,
}

impl<'a> Spanned<'a> for CharConstant<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.literal.source_location()
    }
}

impl Print for CharConstant<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("CharConstant", Some(self.source_location()), &[]);
        printer.children(&[&self.literal]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringConstant<'a> {
    pub literal: StringLiteral<'a>,
}

impl<'a> Spanned<'a> for StringConstant<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.literal.source_location()
    }
}

impl Print for StringConstant<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("StringConstant", Some(self.source_location()), &[]);
        printer.children(&[&self.literal]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantReference<'a> {
    pub sign: Option<&'a Token<'a>>,
    pub identifier: Identifier<'a>,
}

impl<'a> Spanned<'a> for ConstantReference<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        signed_location(self.sign, self.identifier.source_location())
    }
}

impl Print for ConstantReference<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        let location = Some(self.source_location());
        match self.sign {
            Some(sign) => printer.node("ConstantReference", location, &[&sign.lexeme(), &self.identifier.name()]),
            None => printer.node("ConstantReference", location, &[&self.identifier.name()]),
        }
    }
}

/// `identifier = constant`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDefinition<'a> {
    pub identifier: Identifier<'a>,
    pub constant: Constant<'a>,
}

impl<'a> Spanned<'a> for ConstantDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.identifier.source_location().join(&self.constant.source_location())
    }
}

impl Print for ConstantDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("ConstantDefinition", Some(self.source_location()), &[]);
        printer.children(&[&self.identifier, &self.constant]);
    }
}

/// The `CONST` section of a block
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDefinitions<'a> {
    keyword: &'a Token<'a>,
    definitions: Vec<ConstantDefinition<'a>>,
}

impl<'a> ConstantDefinitions<'a> {
    pub fn new(keyword: &'a Token<'a>, definitions: Vec<ConstantDefinition<'a>>) -> Result<Self, InternalCompilerError> {
        if definitions.is_empty() {
            return Err(InternalCompilerError::new("Empty constant definitions."));
        }
        Ok(Self { keyword, definitions })
    }

    pub fn keyword(&self) -> &'a Token<'a> {
        self.keyword
    }

    pub fn definitions(&self) -> &[ConstantDefinition<'a>] {
        &self.definitions
    }

    /// Look up a definition by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&ConstantDefinition<'a>> {
        self.definitions
            .iter()
            .find(|definition| definition.identifier.matches(name))
    }
}

impl<'a> Spanned<'a> for ConstantDefinitions<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        crate::join_last(self.keyword.location, &self.definitions)
    }
}

impl Print for ConstantDefinitions<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("ConstantDefinitions", Some(self.source_location()), &[]);
        printer.children(&crate::as_printable(&self.definitions));
    }
}
