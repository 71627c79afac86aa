use insta::assert_snapshot;

fn parse_to_string(source: &str) -> String {
    let tokens = lexer::tokenize("test.pas", source).unwrap();
    let block = parser::parse(&tokens).unwrap();
    ast::dump(&block)
}

#[test]
fn snapshot_empty_block() {
    assert_snapshot!(parse_to_string(""), @"Block");
}

#[test]
fn snapshot_constant_kinds() {
    let output = parse_to_string("const x = 5; y = 'a'; z = 'hello';");
    assert_snapshot!(output, @r#"
    Block [1:1..1:34]
    `-ConstantDefinitions [1:1..1:34]
      |-ConstantDefinition [1:7..1:12]
      | |-Identifier [1:7..1:8] x
      | `-IntegerConstant [1:11..1:12] 5
      |-ConstantDefinition [1:14..1:21]
      | |-Identifier [1:14..1:15] y
      | `-CharConstant [1:18..1:21]
      |   `-CharLiteral [1:18..1:21] 'a'
      `-ConstantDefinition [1:23..1:34]
        |-Identifier [1:23..1:24] z
        `-StringConstant [1:27..1:34]
          `-StringLiteral [1:27..1:34] "hello"
    "#);
}

#[test]
fn snapshot_signed_constants() {
    // Integer constants fold a separate sign into their value, reals keep the sign token
    let output = parse_to_string("const a = -5; b = - 2.5; c = +a;");
    assert_snapshot!(output, @r"
    Block [1:1..1:32]
    `-ConstantDefinitions [1:1..1:32]
      |-ConstantDefinition [1:7..1:13]
      | |-Identifier [1:7..1:8] a
      | `-IntegerConstant [1:11..1:13] -5
      |-ConstantDefinition [1:15..1:24]
      | |-Identifier [1:15..1:16] b
      | `-RealConstant [1:19..1:24] -
      |   `-RealLiteral [1:21..1:24] 2.5
      `-ConstantDefinition [1:26..1:32]
        |-Identifier [1:26..1:27] c
        `-ConstantReference [1:30..1:32] + a
    ");
}

#[test]
fn snapshot_labels() {
    let output = parse_to_string("label 1, 42;");
    assert_snapshot!(output, @r"
    Block [1:1..1:12]
    `-LabelDeclarations [1:1..1:12]
      |-LabelDeclaration [1:7..1:8]
      | `-IntegerLiteral [1:7..1:8] 1
      `-LabelDeclaration [1:10..1:12]
        `-IntegerLiteral [1:10..1:12] 42
    ");
}

#[test]
fn snapshot_packed_array_variable() {
    let output = parse_to_string("var a, b: packed array [1..10, boolean] of ^node;");
    assert_snapshot!(output, @r"
    Block [1:1..1:49]
    `-VariableDeclarations [1:1..1:49]
      `-VariableDeclaration [1:5..1:49]
        |-IdentifierList [1:5..1:9]
        | |-Identifier [1:5..1:6] a
        | `-Identifier [1:8..1:9] b
        `-StructuredTypeDefinition [1:11..1:49] packed
          `-ArrayTypeDefinition [1:18..1:49]
            |-SubrangeTypeDefinition [1:25..1:30]
            | |-IntegerConstant [1:25..1:26] 1
            | `-IntegerConstant [1:28..1:30] 10
            |-BooleanType [1:32..1:39]
            `-PointerTypeDefinition [1:44..1:49] node
    ");
}

#[test]
fn test_all_sections() {
    let source = "\
label 10, 20;
const max = 100; name = 'pascal';
type index = 1..max; text = packed array [index] of char;
var i, j: index; s: text;
";
    let tokens = lexer::tokenize("test.pas", source).unwrap();
    let block = parser::parse(&tokens).unwrap();

    let labels = block.label_declarations.as_ref().unwrap();
    let values: Vec<i64> = labels.labels().iter().map(|label| label.label.value).collect();
    assert_eq!(values, vec![10, 20]);

    let constants = block.constant_definitions.as_ref().unwrap();
    assert_eq!(constants.definitions().len(), 2);
    assert!(constants.find("MAX").is_some());

    let types = block.type_definitions.as_ref().unwrap();
    assert_eq!(types.definitions().len(), 2);
    assert!(types.find("Index").is_some());

    let variables = block.variable_declarations.as_ref().unwrap();
    assert_eq!(variables.declarations().len(), 2);
    assert_eq!(variables.declarations()[0].identifiers.identifiers().len(), 2);
}

#[test]
fn test_keywords_are_case_insensitive() {
    let tokens = lexer::tokenize("test.pas", "CONST x = 1; Type t = Integer; vAr v: T;").unwrap();
    let block = parser::parse(&tokens).unwrap();
    assert!(block.constant_definitions.is_some());
    assert!(block.type_definitions.is_some());
    assert!(block.variable_declarations.is_some());
}

#[test]
fn test_comments_between_tokens() {
    let tokens = lexer::tokenize("test.pas", "const{c}x(*y*)={z}1;").unwrap();
    let block = parser::parse(&tokens).unwrap();
    let constants = block.constant_definitions.unwrap();
    assert_eq!(constants.definitions()[0].identifier.name(), "x");
}
