//! End-to-end scenarios from spec §8, exercised directly against
//! `sol25_core::compile` rather than spawning the `sol25` binary as a
//! subprocess — this crate's logic (argument parsing, stdin/stdout
//! plumbing) is thin enough not to warrant process-level tests, and this
//! keeps the suite fast and independent of `PATH`/build-output layout.

use indoc::indoc;

#[test]
fn minimal_program_is_valid() {
    let xml = sol25_core::compile("class Main : Object { run [ | ] }").unwrap();
    assert!(xml.contains(r#"<class name="Main" parent="Object">"#));
    assert!(xml.contains(r#"<method selector="run">"#));
    assert!(xml.contains(r#"<block arity="0">"#));
}

#[test]
fn doc_comment_becomes_description() {
    let source = indoc! {r#"
        "hello world"
        class Main : Object { run [ | ] }
    "#};
    let xml = sol25_core::compile(source).unwrap();
    assert!(xml.contains(r#"description="hello world""#));
}

#[test]
fn cyclic_inheritance_exits_35() {
    let source = indoc! {"
        class A : B { }
        class B : A { }
        class Main : Object { run [ | ] }
    "};
    let err = sol25_core::compile(source).unwrap_err();
    assert_eq!(err.exit_code(), 35);
}

#[test]
fn arity_mismatch_exits_33() {
    let source = "class Main : Object { add:and: [ :a | ] }";
    let err = sol25_core::compile(source).unwrap_err();
    assert_eq!(err.exit_code(), 33);
}

#[test]
fn undefined_variable_exits_32() {
    let source = "class Main : Object { run [ | x := y. ] }";
    let err = sol25_core::compile(source).unwrap_err();
    assert_eq!(err.exit_code(), 32);
}

#[test]
fn assignment_to_parameter_exits_34() {
    let source = indoc! {"
        class Main : Object {
            run [ | ]
            foo: [ :x | x := 1. ]
        }
    "};
    let err = sol25_core::compile(source).unwrap_err();
    assert_eq!(err.exit_code(), 34);
}

#[test]
fn class_side_read_valid_for_string_invalid_for_integer() {
    let valid = "class Main : Object { run [ | s := String read. ] }";
    assert!(sol25_core::compile(valid).is_ok());

    let invalid = "class Main : Object { run [ | s := Integer read. ] }";
    let err = sol25_core::compile(invalid).unwrap_err();
    assert_eq!(err.exit_code(), 32);
}

#[test]
fn empty_program_exits_31() {
    let err = sol25_core::compile("").unwrap_err();
    assert_eq!(err.exit_code(), 31);
}

#[test]
fn reserved_keyword_as_selector_exits_22() {
    // "self" lexes as a plain identifier (SyntaxKind::Id) -- the check that
    // rejects it as a selector name is semantic, not lexical, unlike
    // "class" which the lexer can never hand the parser as a selector.
    let source = "class Main : Object { run [ | ] self [ | ] }";
    let err = sol25_core::compile(source).unwrap_err();
    assert_eq!(err.exit_code(), 22);
}

#[test]
fn malformed_syntax_exits_22() {
    let err = sol25_core::compile("class Main : Object {").unwrap_err();
    assert_eq!(err.exit_code(), 22);
}

#[test]
fn unrecognized_byte_exits_21() {
    let source = "class Main : Object { run [ | x := 1 $ ] }";
    let err = sol25_core::compile(source).unwrap_err();
    assert_eq!(err.exit_code(), 21);
}
