//! Type denoters (6.4)
//!
//! Type identifiers other than the required `integer`, `real`, `boolean` and
//! `char` are kept as [`TypeAliasDefinition`]s; whether an alias names an
//! ordinal type is decided by later phases.

use errors::InternalCompilerError;
use tokens::{SourceLocation, Token};

use crate::{as_printable, join_last, Constant, Identifier, IdentifierList, Print, Spanned, TreePrinter};

#[derive(Debug, Clone, PartialEq)]
pub enum Type<'a> {
    Ordinal(OrdinalType<'a>),
    Real(RealType<'a>),
    Structured(StructuredTypeDefinition<'a>),
    Pointer(PointerTypeDefinition<'a>),
}

impl<'a> Spanned<'a> for Type<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        match self {
            Type::Ordinal(ty) => ty.source_location(),
            Type::Real(ty) => ty.source_location(),
            Type::Structured(ty) => ty.source_location(),
            Type::Pointer(ty) => ty.source_location(),
        }
    }
}

impl Print for Type<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        match self {
            Type::Ordinal(ty) => ty.print(printer),
            Type::Real(ty) => ty.print(printer),
            Type::Structured(ty) => ty.print(printer),
            Type::Pointer(ty) => ty.print(printer),
        }
    }
}

// ===== Required types =====

macro_rules! required_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name<'a> {
            pub token: &'a Token<'a>,
        }

        impl<'a> Spanned<'a> for $name<'a> {
            fn source_location(&self) -> SourceLocation<'a> {
                self.token.location
            }
        }

        impl Print for $name<'_> {
            fn print(&self, printer: &mut TreePrinter) {
                printer.node(stringify!($name), Some(self.source_location()), &[]);
            }
        }
    };
}

required_type!(
    /// The required type `integer`
    IntegerType
);
required_type!(
    /// The required type `real`
    RealType
);
required_type!(
    /// The required type `boolean`
    BooleanType
);
required_type!(
    /// The required type `char`
    CharType
);

// ===== Ordinal types =====

#[derive(Debug, Clone, PartialEq)]
pub enum OrdinalType<'a> {
    Integer(IntegerType<'a>),
    Boolean(BooleanType<'a>),
    Char(CharType<'a>),
    Enumerated(EnumeratedTypeDefinition<'a>),
    Subrange(SubrangeTypeDefinition<'a>),
    Alias(TypeAliasDefinition<'a>),
}

impl<'a> Spanned<'a> for OrdinalType<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        match self {
            OrdinalType::Integer(ty) => ty.source_location(),
            OrdinalType::Boolean(ty) => ty.source_location(),
            OrdinalType::Char(ty) => ty.source_location(),
            OrdinalType::Enumerated(ty) => ty.source_location(),
            OrdinalType::Subrange(ty) => ty.source_location(),
            OrdinalType::Alias(ty) => ty.source_location(),
        }
    }
}

impl Print for OrdinalType<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        match self {
            OrdinalType::Integer(ty) => ty.print(printer),
            OrdinalType::Boolean(ty) => ty.print(printer),
            OrdinalType::Char(ty) => ty.print(printer),
            OrdinalType::Enumerated(ty) => ty.print(printer),
            OrdinalType::Subrange(ty) => ty.print(printer),
            OrdinalType::Alias(ty) => ty.print(printer),
        }
    }
}

/// `( identifier-list )`
#[derive(Debug, Clone, PartialEq)]
pub struct EnumeratedTypeDefinition<'a> {
    pub left_paren: &'a Token<'a>,
    pub identifiers: IdentifierList<'a>,
    pub right_paren: &'a Token<'a>,
}

impl<'a> Spanned<'a> for EnumeratedTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.left_paren.location.join(&self.right_paren.location)
    }
}

impl Print for EnumeratedTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("EnumeratedTypeDefinition", Some(self.source_location()), &[]);
        printer.children(&[&self.identifiers]);
    }
}

/// `constant .. constant`
#[derive(Debug, Clone, PartialEq)]
pub struct SubrangeTypeDefinition<'a> {
    pub lower: Constant<'a>,
    pub upper: Constant<'a>,
}

impl<'a> Spanned<'a> for SubrangeTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.lower.source_location().join(&self.upper.source_location())
    }
}

impl Print for SubrangeTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("SubrangeTypeDefinition", Some(self.source_location()), &[]);
        printer.children(&[&self.lower, &self.upper]);
    }
}

/// A type identifier that may or may not denote an ordinal type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeAliasDefinition<'a> {
    pub identifier: Identifier<'a>,
}

impl<'a> Spanned<'a> for TypeAliasDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.identifier.source_location()
    }
}

impl Print for TypeAliasDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("TypeAliasDefinition", Some(self.source_location()), &[&self.identifier.name()]);
    }
}

// ===== Pointer types =====

/// `^ type-identifier`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTypeDefinition<'a> {
    pub caret: &'a Token<'a>,
    pub target: Identifier<'a>,
}

impl<'a> Spanned<'a> for PointerTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.caret.location.join(&self.target.source_location())
    }
}

impl Print for PointerTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("PointerTypeDefinition", Some(self.source_location()), &[&self.target.name()]);
    }
}

// ===== Structured types =====

/// `[packed] unpacked-structured-type`
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredTypeDefinition<'a> {
    pub packed: Option<&'a Token<'a>>,
    pub definition: UnpackedStructuredTypeDefinition<'a>,
}

impl StructuredTypeDefinition<'_> {
    pub fn is_packed(&self) -> bool {
        self.packed.is_some()
    }
}

impl<'a> Spanned<'a> for StructuredTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        let definition = self.definition.source_location();
        match self.packed {
            Some(packed) => packed.location.join(&definition),
            None => definition,
        }
    }
}

impl Print for StructuredTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        if self.is_packed() {
            printer.node("StructuredTypeDefinition", Some(self.source_location()), &[&"packed"]);
        } else {
            printer.node("StructuredTypeDefinition", Some(self.source_location()), &[]);
        }
        printer.children(&[&self.definition]);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnpackedStructuredTypeDefinition<'a> {
    Array(ArrayTypeDefinition<'a>),
    Record(RecordTypeDefinition<'a>),
    Set(SetTypeDefinition<'a>),
    File(FileTypeDefinition<'a>),
}

impl<'a> Spanned<'a> for UnpackedStructuredTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        match self {
            UnpackedStructuredTypeDefinition::Array(ty) => ty.source_location(),
            UnpackedStructuredTypeDefinition::Record(ty) => ty.source_location(),
            UnpackedStructuredTypeDefinition::Set(ty) => ty.source_location(),
            UnpackedStructuredTypeDefinition::File(ty) => ty.source_location(),
        }
    }
}

impl Print for UnpackedStructuredTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        match self {
            UnpackedStructuredTypeDefinition::Array(ty) => ty.print(printer),
            UnpackedStructuredTypeDefinition::Record(ty) => ty.print(printer),
            UnpackedStructuredTypeDefinition::Set(ty) => ty.print(printer),
            UnpackedStructuredTypeDefinition::File(ty) => ty.print(printer),
        }
    }
}

/// `ARRAY [ index-type { , index-type } ] OF component-type`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayTypeDefinition<'a> {
    keyword: &'a Token<'a>,
    index_types: Vec<OrdinalType<'a>>,
    component_type: Box<Type<'a>>,
}

impl<'a> ArrayTypeDefinition<'a> {
    pub fn new(
        keyword: &'a Token<'a>,
        index_types: Vec<OrdinalType<'a>>,
        component_type: Type<'a>,
    ) -> Result<Self, InternalCompilerError> {
        if index_types.is_empty() {
            return Err(InternalCompilerError::new("Array type without index types."));
        }
        Ok(Self {
            keyword,
            index_types,
            component_type: Box::new(component_type),
        })
    }

    pub fn index_types(&self) -> &[OrdinalType<'a>] {
        &self.index_types
    }

    pub fn component_type(&self) -> &Type<'a> {
        &self.component_type
    }
}

impl<'a> Spanned<'a> for ArrayTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.keyword.location.join(&self.component_type.source_location())
    }
}

impl Print for ArrayTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("ArrayTypeDefinition", Some(self.source_location()), &[]);
        let mut children = as_printable(&self.index_types);
        children.push(self.component_type.as_ref());
        printer.children(&children);
    }
}

/// `RECORD [field-list] END`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTypeDefinition<'a> {
    pub keyword: &'a Token<'a>,
    pub field_list: Option<FieldList<'a>>,
    pub end: &'a Token<'a>,
}

impl<'a> Spanned<'a> for RecordTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.keyword.location.join(&self.end.location)
    }
}

impl Print for RecordTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("RecordTypeDefinition", Some(self.source_location()), &[]);
        if let Some(field_list) = &self.field_list {
            printer.children(&[field_list]);
        }
    }
}

/// `SET OF base-type`
#[derive(Debug, Clone, PartialEq)]
pub struct SetTypeDefinition<'a> {
    pub keyword: &'a Token<'a>,
    pub base_type: OrdinalType<'a>,
}

impl<'a> Spanned<'a> for SetTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.keyword.location.join(&self.base_type.source_location())
    }
}

impl Print for SetTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("SetTypeDefinition", Some(self.source_location()), &[]);
        printer.children(&[&self.base_type]);
    }
}

/// `FILE OF component-type`
#[derive(Debug, Clone, PartialEq)]
pub struct FileTypeDefinition<'a> {
    pub keyword: &'a Token<'a>,
    pub component_type: Box<Type<'a>>,
}

impl<'a> Spanned<'a> for FileTypeDefinition<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.keyword.location.join(&self.component_type.source_location())
    }
}

impl Print for FileTypeDefinition<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("FileTypeDefinition", Some(self.source_location()), &[]);
        printer.children(&[self.component_type.as_ref()]);
    }
}

// ===== Records =====

/// Fixed part, variant part, or both; never empty
#[derive(Debug, Clone, PartialEq)]
pub struct FieldList<'a> {
    parts: FieldListParts<'a>,
}

#[derive(Debug, Clone, PartialEq)]
enum FieldListParts<'a> {
    Fixed(FixedPart<'a>),
    Variant(VariantPart<'a>),
    Both(FixedPart<'a>, VariantPart<'a>),
}

impl<'a> FieldList<'a> {
    pub fn new(
        fixed_part: Option<FixedPart<'a>>,
        variant_part: Option<VariantPart<'a>>,
    ) -> Result<Self, InternalCompilerError> {
        let parts = match (fixed_part, variant_part) {
            (Some(fixed), Some(variant)) => FieldListParts::Both(fixed, variant),
            (Some(fixed), None) => FieldListParts::Fixed(fixed),
            (None, Some(variant)) => FieldListParts::Variant(variant),
            (None, None) => return Err(InternalCompilerError::new("Empty field list.")),
        };
        Ok(Self { parts })
    }

    pub fn fixed_part(&self) -> Option<&FixedPart<'a>> {
        match &self.parts {
            FieldListParts::Fixed(fixed) | FieldListParts::Both(fixed, _) => Some(fixed),
            FieldListParts::Variant(_) => None,
        }
    }

    pub fn variant_part(&self) -> Option<&VariantPart<'a>> {
        match &self.parts {
            FieldListParts::Variant(variant) | FieldListParts::Both(_, variant) => Some(variant),
            FieldListParts::Fixed(_) => None,
        }
    }
}

impl<'a> Spanned<'a> for FieldList<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        match &self.parts {
            FieldListParts::Fixed(fixed) => fixed.source_location(),
            FieldListParts::Variant(variant) => variant.source_location(),
            FieldListParts::Both(fixed, variant) => fixed.source_location().join(&variant.source_location()),
        }
    }
}

impl Print for FieldList<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("FieldList", Some(self.source_location()), &[]);
        match &self.parts {
            FieldListParts::Fixed(fixed) => printer.children(&[fixed]),
            FieldListParts::Variant(variant) => printer.children(&[variant]),
            FieldListParts::Both(fixed, variant) => printer.children(&[fixed, variant]),
        }
    }
}

/// Record sections separated by `;`
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPart<'a> {
    sections: Vec<RecordSection<'a>>,
}

impl<'a> FixedPart<'a> {
    pub fn new(sections: Vec<RecordSection<'a>>) -> Result<Self, InternalCompilerError> {
        if sections.is_empty() {
            return Err(InternalCompilerError::new("Empty fixed part."));
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[RecordSection<'a>] {
        &self.sections
    }
}

impl<'a> Spanned<'a> for FixedPart<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        join_last(self.sections[0].source_location(), &self.sections)
    }
}

impl Print for FixedPart<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("FixedPart", Some(self.source_location()), &[]);
        printer.children(&as_printable(&self.sections));
    }
}

/// `identifier-list : type-denoter`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSection<'a> {
    pub identifiers: IdentifierList<'a>,
    pub type_denoter: Type<'a>,
}

impl<'a> Spanned<'a> for RecordSection<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.identifiers.source_location().join(&self.type_denoter.source_location())
    }
}

impl Print for RecordSection<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("RecordSection", Some(self.source_location()), &[]);
        printer.children(&[&self.identifiers, &self.type_denoter]);
    }
}

/// `CASE variant-selector OF variant { ; variant }`
#[derive(Debug, Clone, PartialEq)]
pub struct VariantPart<'a> {
    pub keyword: &'a Token<'a>,
    pub selector: VariantSelector<'a>,
    pub variants: VariantList<'a>,
}

impl<'a> Spanned<'a> for VariantPart<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.keyword.location.join(&self.variants.source_location())
    }
}

impl Print for VariantPart<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("VariantPart", Some(self.source_location()), &[]);
        printer.children(&[&self.selector, &self.variants]);
    }
}

/// `[tag-field :] tag-type`
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSelector<'a> {
    pub tag_field: Option<Identifier<'a>>,
    pub tag_type: OrdinalType<'a>,
}

impl<'a> Spanned<'a> for VariantSelector<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        let tag_type = self.tag_type.source_location();
        match &self.tag_field {
            Some(tag_field) => tag_field.source_location().join(&tag_type),
            None => tag_type,
        }
    }
}

impl Print for VariantSelector<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("VariantSelector", Some(self.source_location()), &[]);
        match &self.tag_field {
            Some(tag_field) => printer.children(&[tag_field, &self.tag_type]),
            None => printer.children(&[&self.tag_type]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantList<'a> {
    variants: Vec<Variant<'a>>,
}

impl<'a> VariantList<'a> {
    pub fn new(variants: Vec<Variant<'a>>) -> Result<Self, InternalCompilerError> {
        if variants.is_empty() {
            return Err(InternalCompilerError::new("Empty variant list."));
        }
        Ok(Self { variants })
    }

    pub fn variants(&self) -> &[Variant<'a>] {
        &self.variants
    }
}

impl<'a> Spanned<'a> for VariantList<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        join_last(self.variants[0].source_location(), &self.variants)
    }
}

impl Print for VariantList<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("VariantList", Some(self.source_location()), &[]);
        printer.children(&as_printable(&self.variants));
    }
}

/// `case-constant-list : ( [field-list] )`
#[derive(Debug, Clone, PartialEq)]
pub struct Variant<'a> {
    pub constants: CaseConstantList<'a>,
    pub field_list: Option<Box<FieldList<'a>>>,
    pub right_paren: &'a Token<'a>,
}

impl<'a> Spanned<'a> for Variant<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        self.constants.source_location().join(&self.right_paren.location)
    }
}

impl Print for Variant<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("Variant", Some(self.source_location()), &[]);
        match &self.field_list {
            Some(field_list) => printer.children(&[&self.constants, field_list.as_ref()]),
            None => printer.children(&[&self.constants]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseConstantList<'a> {
    constants: Vec<Constant<'a>>,
}

impl<'a> CaseConstantList<'a> {
    pub fn new(constants: Vec<Constant<'a>>) -> Result<Self, InternalCompilerError> {
        if constants.is_empty() {
            return Err(InternalCompilerError::new("Empty case constant list."));
        }
        Ok(Self { constants })
    }

    pub fn constants(&self) -> &[Constant<'a>] {
        &self.constants
    }
}

impl<'a> Spanned<'a> for CaseConstantList<'a> {
    fn source_location(&self) -> SourceLocation<'a> {
        join_last(self.constants[0].source_location(), &self.constants)
    }
}

impl Print for CaseConstantList<'_> {
    fn print(&self, printer: &mut TreePrinter) {
        printer.node("CaseConstantList", Some(self.source_location()), &[]);
        printer.children(&as_printable(&self.constants));
    }
}
