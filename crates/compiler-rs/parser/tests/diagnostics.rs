use insta::assert_snapshot;

/// Parse `source`, expecting failure, and render the diagnostic without colors
fn render_error(source: &str) -> String {
    let tokens = lexer::tokenize("test.pas", source).unwrap();
    let error = parser::parse(&tokens).unwrap_err();
    error.to_diagnostic().render_to_string()
}

fn error_message(source: &str) -> String {
    let tokens = lexer::tokenize("test.pas", source).unwrap();
    parser::parse(&tokens).unwrap_err().message()
}

#[test]
fn snapshot_missing_constant_value() {
    assert_snapshot!(render_error("const x = ;"), @r"
    test.pas:1:11: Error: Expected constant value in constant definition.
        1 | const x = ;
          |           ^
    test.pas:1:1: Note: In constant definitions starting from here.
        1 | const x = ;
          | ^~~~~
    ");
}

#[test]
fn snapshot_bad_label() {
    assert_snapshot!(render_error("label 1, x;"), @r"
    test.pas:1:10: Error: Expected label.
        1 | label 1, x;
          |          ^
    test.pas:1:1: Note: In label declarations starting from here.
        1 | label 1, x;
          | ^~~~~
    ");
}

#[test]
fn snapshot_nested_notes_innermost_first() {
    let source = "type\n  t = array [1..10] integer;\n";
    assert_snapshot!(render_error(source), @r"
    test.pas:2:21: Error: Expected `of` in array type definition.
        2 |   t = array [1..10] integer;
          |                     ^~~~~~~
    test.pas:2:3: Note: In type definition of `t`.
        2 |   t = array [1..10] integer;
          |   ^
    test.pas:1:1: Note: In type definitions starting from here.
        1 | type
          | ^~~~
    ");
}

#[test]
fn snapshot_error_at_end_of_file() {
    assert_snapshot!(render_error("var v: integer"), @r"
    test.pas:1:15: Error: Expected `;`.
        1 | var v: integer
          |               ^
    test.pas:1:1: Note: In variable declarations starting from here.
        1 | var v: integer
          | ^~~
    ");
}

#[test]
fn snapshot_integer_out_of_range() {
    assert_snapshot!(render_error("label 99999999999999999999;"), @r"
    test.pas:1:7: Error: Integer literal out of range.
        1 | label 99999999999999999999;
          |       ^~~~~~~~~~~~~~~~~~~~
    test.pas:1:1: Note: In label declarations starting from here.
        1 | label 99999999999999999999;
          | ^~~~~
    ");
}

#[test]
fn snapshot_negated_minimum_is_out_of_range() {
    assert_snapshot!(render_error("const x = - -9223372036854775808;"), @r"
    test.pas:1:11: Error: Integer literal out of range.
        1 | const x = - -9223372036854775808;
          |           ^~~~~~~~~~~~~~~~~~~~~~
    test.pas:1:1: Note: In constant definitions starting from here.
        1 | const x = - -9223372036854775808;
          | ^~~~~
    ");
}

#[test]
fn test_separate_sign_reaches_minimum() {
    let tokens = lexer::tokenize("test.pas", "const x = - 9223372036854775808;").unwrap();
    let block = parser::parse(&tokens).unwrap();
    let constants = block.constant_definitions.unwrap();
    match &constants.definitions()[0].constant {
        ast::Constant::Integer(constant) => assert_eq!(constant.value(), i64::MIN),
        other => panic!("unexpected constant: {other:?}"),
    }
    assert_eq!(error_message("const x = 9223372036854775808;"), "Integer literal out of range.");
    assert_eq!(error_message("const x = + 9223372036854775808;"), "Integer literal out of range.");
}

#[test]
fn test_deep_type_nesting_is_an_error() {
    let arrays = format!("type t = {}integer;", "array [1..2] of ".repeat(2000));
    assert_eq!(error_message(&arrays), "Type nesting too deep.");

    let records = format!("type t = {}integer{};", "record a: ".repeat(2000), " end".repeat(2000));
    assert_eq!(error_message(&records), "Type nesting too deep.");
}

#[test]
fn test_type_nesting_limit() {
    // The outermost type denoter counts as one level
    let within = format!(
        "type t = {}integer;",
        "array [1..2] of ".repeat(parser::MAX_NESTING_DEPTH - 1)
    );
    let tokens = lexer::tokenize("test.pas", &within).unwrap();
    assert!(parser::parse(&tokens).is_ok());

    let beyond = format!(
        "type t = {}integer;",
        "array [1..2] of ".repeat(parser::MAX_NESTING_DEPTH)
    );
    assert_eq!(error_message(&beyond), "Type nesting too deep.");
}

#[test]
fn test_trailing_tokens() {
    assert_eq!(error_message("var v: integer; begin"), "Expected end of file.");
    assert_eq!(error_message("x"), "Expected end of file.");
}

#[test]
fn test_label_errors() {
    assert_eq!(error_message("label;"), "Expected label.");
    assert_eq!(error_message("label -1;"), "Expected label.");
    assert_eq!(error_message("label 1.5;"), "Expected label.");
    assert_eq!(error_message("label 1, 2"), "Expected semicolon after label declarations.");
}

#[test]
fn test_constant_errors() {
    assert_eq!(error_message("const = 1;"), "Expected identifier in constant definition.");
    assert_eq!(error_message("const x 1;"), "Expected equals sign in constant definition.");
    assert_eq!(error_message("const x = 1"), "Expected semicolon after constant definition.");
    assert_eq!(
        error_message("const x = -'a';"),
        "Expected integer, real, or identifier after sign in constant definition."
    );
    assert_eq!(
        error_message("const x = + 'abc';"),
        "Expected integer, real, or identifier after sign in constant definition."
    );
}

#[test]
fn test_type_definition_errors() {
    assert_eq!(error_message("type = integer;"), "Expected identifier in type definition.");
    assert_eq!(error_message("type t integer;"), "Expected equals sign in type definition.");
    assert_eq!(error_message("type t = integer"), "Expected semicolon after type definition.");
    assert_eq!(error_message("type t = ;"), "Expected identifier in type definition.");
}

#[test]
fn test_type_denoter_errors() {
    assert_eq!(error_message("type p = ^;"), "Expected type reference after `^`.");
    assert_eq!(error_message("type t = packed integer;"), "Expected structured type definition.");
    assert_eq!(error_message("type t = (a, b;"), "Expected `)` in enumerated type definition.");
    assert_eq!(error_message("type t = 1 10;"), "Expected `..` in subrange type definition.");
    assert_eq!(error_message("type t = array 1..2 of char;"), "Expected `[` in array type definition.");
    assert_eq!(error_message("type t = array [1..2 of char;"), "Expected `]` in array type definition.");
    assert_eq!(error_message("type t = set char;"), "Expected `of` in set type definition.");
    assert_eq!(error_message("type t = file char;"), "Expected `of` in file type definition.");
}

#[test]
fn test_record_errors() {
    assert_eq!(error_message("type r = record ; end;"), "Expected field list.");
    assert_eq!(error_message("type r = record x integer end;"), "Expected `:` in record section.");
    assert_eq!(error_message("type r = record x: integer;"), "Expected `end`.");
    assert_eq!(error_message("type r = record case boolean true: () end;"), "Expected `of`.");
    assert_eq!(error_message("type r = record case boolean of true () end;"), "Expected `:`.");
    assert_eq!(error_message("type r = record case boolean of true: end;"), "Expected `(`.");
    assert_eq!(error_message("type r = record case boolean of true: (x: char end;"), "Expected `)`.");
}

#[test]
fn test_variable_errors() {
    assert_eq!(error_message("var : integer;"), "Expected identifier.");
    assert_eq!(error_message("var x, : integer;"), "Expected identifier.");
    assert_eq!(error_message("var x integer;"), "Expected `:`.");
}

#[test]
fn test_pointer_error_points_at_caret() {
    let source = "type p = ^ 1;";
    let tokens = lexer::tokenize("test.pas", source).unwrap();
    let error = parser::parse(&tokens).unwrap_err();
    assert_eq!(error.location().map(|location| location.text()), Some("^"));
}

#[test]
fn test_internal_error_has_no_source_context() {
    let tokens = lexer::tokenize("test.pas", "const").unwrap();
    let error = parser::parse(&tokens[..0]).unwrap_err();
    assert!(error.location().is_none());
    assert_eq!(
        error.to_diagnostic().render_to_string(),
        "Error: Internal compiler error: Token stream must be terminated by an end of file token.\n"
    );
}
