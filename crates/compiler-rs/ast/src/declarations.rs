//! Label, type and variable declaration parts of a block

use errors::InternalCompilerError;
use tokens::{SourceLocation, Token};

use crate::{as_printable, join_last, Identifier, IntegerLiteral, Print, Spanned, TreePrinter, Type};

// ===== Labels =====

/// A single label, a digit sequence
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDeclaration<'a> {
    pub label: IntegerLiteral<'a>,
}

impl<'a> Spanned<'a> for LabelDeclaration<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.label.source_location()
    }
}

impl Print for LabelDeclaration<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("LabelDeclaration", Some(self.source_location()), &[]);
        printer.children(&[&self.label]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelDeclarations<'a> {
    keyword: &'a Token<'a>,
    labels: Vec<LabelDeclaration<'a>>,
}

impl<'a> LabelDeclarations<'a> {
    pub fn new(keyword: &'a Token<'a>, labels: Vec<LabelDeclaration<'a>>) -> Result<Self, InternalCompilerError> {
        if labels.is_empty() {
            return Err(InternalCompilerError::new("Empty label declarations."));
        }
        Ok(Self { keyword, labels })
    }

    pub fn keyword(&self) -> &'a Token<'a> {
        self.keyword
    }

    pub fn labels(&self) -> &[LabelDeclaration<'a>] {
        &self.labels
    }
}

impl<'a> Spanned<'a> for LabelDeclarations<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        join_last(self.keyword.location, &self.labels)
    }
}

impl Print for LabelDeclarations<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("LabelDeclarations", Some(self.source_location()), &[]);
        printer.children(&as_printable(&self.labels));
    }
}

// ===== Identifier lists =====

/// Comma separated identifiers, used by enumerations, variables and record sections
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierList<'a> {
    identifiers: Vec<Identifier<'a>>,
}

impl<'a> IdentifierList<'a> {
    pub fn new(identifiers: Vec<Identifier<'a>>) -> Result<Self, InternalCompilerError> {
        if identifiers.is_empty() {
            return Err(InternalCompilerError::new("Empty identifier list."));
        }
        Ok(Self { identifiers })
    }

    pub fn identifiers(&self) -> &[Identifier<'a>] {
        &self.identifiers
    }
}

impl<'a> Spanned<'a> for IdentifierList<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        let first = self.identifiers[0].source_location();
        join_last(first, &self.identifiers)
    }
}

impl Print for IdentifierList<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("IdentifierList", Some(self.source_location()), &[]);
        printer.children(&as_printable(&self.identifiers));
    }
}

// ===== Types =====

/// `identifier = type-denoter`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition<'a> {
    pub identifier: Identifier<'a>,
    pub type_denoter: Type<'a>,
}

impl<'a> Spanned<'a> for TypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.identifier.source_location().join(&self.type_denoter.source_location())
    }
}

impl Print for TypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("TypeDefinition", Some(self.source_location()), &[]);
        printer.children(&[&self.identifier, &self.type_denoter]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinitions<'a> {
    keyword: &'a Token<'a>,
    definitions: Vec<TypeDefinition<'a>>,
}

impl<'a> TypeDefinitions<'a> {
    pub fn new(keyword: &'a Token<'a>, definitions: Vec<TypeDefinition<'a>>) -> Result<Self, InternalCompilerError> {
        if definitions.is_empty() {
            return Err(InternalCompilerError::new("Empty type definitions."));
        }
        Ok(Self { keyword, definitions })
    }

    pub fn keyword(&self) -> &'a Token<'a> {
        self.keyword
    }

    pub fn definitions(&self) -> &[TypeDefinition<'a>] {
        &self.definitions
    }

    /// Look up a definition by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&TypeDefinition<'a>> {
        self.definitions
            .iter()
            .find(|definition| definition.identifier.matches(name))
    }
}

impl<'a> Spanned<'a> for TypeDefinitions<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        join_last(self.keyword.location, &self.definitions)
    }
}

impl Print for TypeDefinitions<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("TypeDefinitions", Some(self.source_location()), &[]);
        printer.children(&as_printable(&self.definitions));
    }
}

// ===== Variables =====

/// `identifier-list : type-denoter`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration<'a> {
    pub identifiers: IdentifierList<'a>,
    pub type_denoter: Type<'a>,
}

impl<'a> Spanned<'a> for VariableDeclaration<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.identifiers.source_location().join(&self.type_denoter.source_location())
    }
}

impl Print for VariableDeclaration<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("VariableDeclaration", Some(self.source_location()), &[]);
        printer.children(&[&self.identifiers, &self.type_denoter]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarations<'a> {
    keyword: &'a Token<'a>,
    declarations: Vec<VariableDeclaration<'a>>,
}

impl<'a> VariableDeclarations<'a> {
    pub fn new(
        keyword: &'a Token<'a>,
        declarations: Vec<VariableDeclaration<'a>>,
    ) -> Result<Self, InternalCompilerError> {
        if declarations.is_empty() {
            return Err(InternalCompilerError::new("Empty variable declarations."));
        }
        Ok(Self { keyword, declarations })
    }

    pub fn keyword(&self) -> &'a Token<'a> {
        self.keyword
    }

    pub fn declarations(&self) -> &[VariableDeclaration<'a>] {
        &self.declarations
    }
}

impl<'a> Spanned<'a> for VariableDeclarations<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        join_last(self.keyword.location, &self.declarations)
    }
}

impl Print for VariableDeclarations<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("VariableDeclarations", Some(self.source_location()), &[]);
        printer.children(&as_printable(&self.declarations));
    }
}
