use ast::{Constant, OrdinalType, Type, UnpackedStructuredTypeDefinition};
use insta::assert_snapshot;
use tokens::Token;

fn lex(source: &str) -> Vec<Token<'_>> {
    lexer::tokenize("test.pas", source).unwrap()
}

/// Parse `type t = <type>;` and hand the type denoter to `check`
fn with_type(denoter: &str, check: impl FnOnce(&Type<'_>)) {
    let source = format!("type t = {denoter};");
    let tokens = lex(&source);
    let block = parser::parse(&tokens).unwrap();
    let types = block.type_definitions.unwrap();
    check(&types.definitions()[0].type_denoter);
}

fn unpacked<'b, 'a>(ty: &'b Type<'a>) -> &'b UnpackedStructuredTypeDefinition<'a> {
    match ty {
        Type::Structured(structured) => &structured.definition,
        other => panic!("expected structured type, got {other:?}"),
    }
}

#[test]
fn snapshot_record_with_variant_part() {
    let source = "type t = record case b: boolean of true: (x: integer); false: () end;";
    let tokens = lex(source);
    let block = parser::parse(&tokens).unwrap();
    assert_snapshot!(ast::dump(&block), @r"
    Block [1:1..1:69]
    `-TypeDefinitions [1:1..1:69]
      `-TypeDefinition [1:6..1:69]
        |-Identifier [1:6..1:7] t
        `-StructuredTypeDefinition [1:10..1:69]
          `-RecordTypeDefinition [1:10..1:69]
            `-FieldList [1:17..1:65]
              `-VariantPart [1:17..1:65]
                |-VariantSelector [1:22..1:32]
                | |-Identifier [1:22..1:23] b
                | `-BooleanType [1:25..1:32]
                `-VariantList [1:36..1:65]
                  |-Variant [1:36..1:54]
                  | |-CaseConstantList [1:36..1:40]
                  | | `-ConstantReference [1:36..1:40] true
                  | `-FieldList [1:43..1:53]
                  |   `-FixedPart [1:43..1:53]
                  |     `-RecordSection [1:43..1:53]
                  |       |-IdentifierList [1:43..1:44]
                  |       | `-Identifier [1:43..1:44] x
                  |       `-IntegerType [1:46..1:53]
                  `-Variant [1:56..1:65]
                    `-CaseConstantList [1:56..1:61]
                      `-ConstantReference [1:56..1:61] false
    ");
}

#[test]
fn test_record_fixed_and_variant_parts() {
    with_type(
        "record x, y: integer; case kind: boolean of true: (z: real); false: (w: char;); end",
        |ty| {
            let UnpackedStructuredTypeDefinition::Record(record) = unpacked(ty) else {
                panic!("expected record");
            };
            let fields = record.field_list.as_ref().unwrap();
            let fixed = fields.fixed_part().unwrap();
            assert_eq!(fixed.sections().len(), 1);
            assert_eq!(fixed.sections()[0].identifiers.identifiers().len(), 2);
            let variant = fields.variant_part().unwrap();
            assert_eq!(variant.selector.tag_field.as_ref().map(|tag| tag.name()), Some("kind"));
            assert_eq!(variant.variants.variants().len(), 2);
        },
    );
}

#[test]
fn test_empty_record() {
    with_type("record end", |ty| {
        let UnpackedStructuredTypeDefinition::Record(record) = unpacked(ty) else {
            panic!("expected record");
        };
        assert!(record.field_list.is_none());
    });
}

#[test]
fn test_trailing_semicolon_in_record() {
    with_type("record a: integer; b: char; end", |ty| {
        let UnpackedStructuredTypeDefinition::Record(record) = unpacked(ty) else {
            panic!("expected record");
        };
        let fields = record.field_list.as_ref().unwrap();
        assert_eq!(fields.fixed_part().unwrap().sections().len(), 2);
        assert!(fields.variant_part().is_none());
    });
}

#[test]
fn test_nested_variant_without_tag_field() {
    with_type("record case integer of 1, 2: (case c: char of 'a': ()) end", |ty| {
        let UnpackedStructuredTypeDefinition::Record(record) = unpacked(ty) else {
            panic!("expected record");
        };
        let variant_part = record.field_list.as_ref().unwrap().variant_part().unwrap();
        assert!(variant_part.selector.tag_field.is_none());
        assert!(matches!(variant_part.selector.tag_type, OrdinalType::Integer(_)));

        let variant = &variant_part.variants.variants()[0];
        assert_eq!(variant.constants.constants().len(), 2);
        let nested = variant.field_list.as_ref().unwrap().variant_part().unwrap();
        assert!(matches!(nested.selector.tag_type, OrdinalType::Char(_)));
        assert!(nested.variants.variants()[0].field_list.is_none());
    });
}

#[test]
fn test_enumerated_type() {
    with_type("(red, green, blue)", |ty| {
        let Type::Ordinal(OrdinalType::Enumerated(enumerated)) = ty else {
            panic!("expected enumerated type, got {ty:?}");
        };
        let names: Vec<_> = enumerated.identifiers.identifiers().iter().map(|id| id.name()).collect();
        assert_eq!(names, vec!["red", "green", "blue"]);
    });
}

#[test]
fn test_subrange_starts() {
    for denoter in ["1..10", "-1..1", "- 1..1", "+1..2", "'a'..'z'", "low..high"] {
        with_type(denoter, |ty| {
            assert!(
                matches!(ty, Type::Ordinal(OrdinalType::Subrange(_))),
                "{denoter} should be a subrange, got {ty:?}"
            );
        });
    }
}

#[test]
fn test_subrange_bounds() {
    with_type("- 5..max", |ty| {
        let Type::Ordinal(OrdinalType::Subrange(subrange)) = ty else {
            panic!("expected subrange");
        };
        match &subrange.lower {
            Constant::Integer(lower) => assert_eq!(lower.value(), -5),
            other => panic!("unexpected lower bound: {other:?}"),
        }
        assert!(matches!(&subrange.upper, Constant::Reference(upper) if upper.identifier.matches("MAX")));
    });
}

#[test]
fn test_alias_is_deferred() {
    with_type("color", |ty| {
        let Type::Ordinal(OrdinalType::Alias(alias)) = ty else {
            panic!("expected alias, got {ty:?}");
        };
        assert_eq!(alias.identifier.name(), "color");
    });
}

#[test]
fn test_pointer_to_required_type() {
    with_type("^integer", |ty| {
        let Type::Pointer(pointer) = ty else {
            panic!("expected pointer, got {ty:?}");
        };
        assert_eq!(pointer.target.name(), "integer");
    });
}

#[test]
fn test_alternative_pointer_symbol() {
    with_type("@node", |ty| assert!(matches!(ty, Type::Pointer(_))));
}

#[test]
fn test_set_and_file_types() {
    with_type("set of char", |ty| {
        let UnpackedStructuredTypeDefinition::Set(set) = unpacked(ty) else {
            panic!("expected set");
        };
        assert!(matches!(set.base_type, OrdinalType::Char(_)));
    });
    with_type("file of real", |ty| {
        let UnpackedStructuredTypeDefinition::File(file) = unpacked(ty) else {
            panic!("expected file");
        };
        assert!(matches!(file.component_type.as_ref(), Type::Real(_)));
    });
    with_type("packed set of 0..7", |ty| {
        let Type::Structured(structured) = ty else {
            panic!("expected structured type");
        };
        assert!(structured.is_packed());
    });
}

#[test]
fn test_multidimensional_array_with_alternative_brackets() {
    with_type("array (.boolean, 1..3.) of array [char] of real", |ty| {
        let UnpackedStructuredTypeDefinition::Array(array) = unpacked(ty) else {
            panic!("expected array");
        };
        assert_eq!(array.index_types().len(), 2);
        assert!(matches!(
            unpacked(array.component_type()),
            UnpackedStructuredTypeDefinition::Array(_)
        ));
    });
}
