//! Pascal Abstract Syntax Tree (AST)
//!
//! This crate defines the AST node types for the declaration part of a block.
//! Nodes borrow their tokens from the token slice the parser ran over, and
//! every node derives its source span from its children.

mod block;
mod constants;
mod declarations;
mod literals;
mod print;
mod types;

pub use block::Block;
pub use constants::{
    CharConstant, Constant, ConstantDefinition, ConstantDefinitions, ConstantReference, IntegerConstant,
    RealConstant, StringConstant,
};
pub use declarations::{
    IdentifierList, LabelDeclaration, LabelDeclarations, TypeDefinition, TypeDefinitions, VariableDeclaration,
    VariableDeclarations,
};
pub use literals::{CharLiteral, Identifier, IntegerLiteral, RealLiteral, StringLiteral};
pub use print::TreePrinter;
pub use types::{
    ArrayTypeDefinition, BooleanType, CaseConstantList, CharType, EnumeratedTypeDefinition, FieldList,
    FileTypeDefinition, FixedPart, IntegerType, OrdinalType, PointerTypeDefinition, RealType, RecordSection,
    RecordTypeDefinition, SetTypeDefinition, StructuredTypeDefinition, SubrangeTypeDefinition, Type,
    TypeAliasDefinition, UnpackedStructuredTypeDefinition, Variant, VariantList, VariantPart, VariantSelector,
};

use tokens::SourceLocation;

/// Nodes that cover a span of the source
pub trait Spanned<'a> {
    fn source_location(&self) -> SourceLocation<'a>;
}

/// Nodes that can render themselves into a [`TreePrinter`]
pub trait Print {
    fn print(&self, printer: &mut TreePrinter);
}

/// Render a node and its descendants as an indented tree
pub fn dump(node: &dyn Print) -> String {
    let mut printer = TreePrinter::new();
    node.print(&mut printer);
    printer.finish()
}

/// Join `start` with the span of the last item
fn join_last<'a, T: Spanned<'a>>(start: SourceLocation<'a>, items: &[T]) -> SourceLocation<'a> {
    match items.last() {
        Some(last) => start.join(&last.source_location()),
        None => start,
    }
}

fn as_printable<T: Print>(items: &[T]) -> Vec<&dyn Print> {
    items.iter().map(|item| item as &dyn Print).collect()
}
