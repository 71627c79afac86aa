use tokens::SourceLocation;

use crate::{
    ConstantDefinitions, LabelDeclarations, Print, Spanned, TreePrinter, TypeDefinitions,
    VariableDeclarations,
};

/// Declaration part of a program or routine, sections in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block<'a> {
    pub label_declarations: Option<LabelDeclarations<'a>>,
    pub constant_definitions: Option<ConstantDefinitions<'a>>,
    pub type_definitions: Option<TypeDefinitions<'a>>,
    pub variable_declarations: Option<VariableDeclarations<'a>>,
}

impl<'a> Block<'a> {
    pub fn is_empty(&self) -> bool {
        self.source_location().is_none()
    }

    /// Span of all present sections, `None` for an empty block
    pub fn source_location(&self) -> Option<SourceLocation<'a>> {
        [
            self.label_declarations.as_ref().map(Spanned::source_location),
            self.constant_definitions.as_ref().map(Spanned::source_location),
            self.type_definitions.as_ref().map(Spanned::source_location),
            self.variable_declarations.as_ref().map(Spanned::source_location),
        ]
        .into_iter()
        .flatten()
        .reduce(|joined, location| joined.join(&location))
    }
}

impl Print for Block<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("Block", self.source_location(), &[]);
        let mut children: Vec<&dyn Print> = Vec::new();
        if let Some(labels) = &self.label_declarations {
            children.push(labels);
        }
        if let Some(constants) = &self.constant_definitions {
            children.push(constants);
        }
        if let Some(types) = &self.type_definitions {
            children.push(types);
        }
        if let Some(variables) = &self.variable_declarations {
            children.push(variables);
        }
        printer.children(&children);
    }
}
