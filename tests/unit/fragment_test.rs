//! Tests for the fragment builder and the composed productions

use rewrex::grammar::{
    Fragment, GrammarError, alternate, capture, escape_literal, optional, productions, sequence,
    up_to,
};
use rewrex::rewrite::Pattern;

fn pattern(fragment: &Fragment) -> Pattern {
    Pattern::compile("test", fragment).unwrap()
}

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn test_empty_inputs_are_configuration_errors() {
    assert!(matches!(sequence(&[]), Err(GrammarError::EmptyInput { builder: "sequence" })));
    assert!(matches!(alternate(&[]), Err(GrammarError::EmptyInput { builder: "alternate" })));
}

#[test]
fn test_duplicate_capture_across_sequence() {
    let a = capture("name", &Fragment::raw("a")).unwrap();
    let b = capture("name", &Fragment::raw("b")).unwrap();
    let err = sequence(&[a, b]).unwrap_err();
    assert!(matches!(err, GrammarError::DuplicateCapture(ref name) if name == "name"));
}

#[test]
fn test_duplicate_capture_when_nesting() {
    let inner = capture("value", &Fragment::raw("[0-9]+")).unwrap();
    assert!(matches!(capture("value", &inner), Err(GrammarError::DuplicateCapture(_))));
}

#[test]
fn test_alternation_does_not_leak_into_sequence() {
    let keyword = alternate(&[Fragment::raw("get"), Fragment::raw("set")]).unwrap();
    let fragment = sequence(&[keyword, escape_literal("(")]).unwrap();
    let compiled = pattern(&fragment);

    // Without grouping "get" alone would satisfy the pattern.
    assert!(compiled.find_at("get x", 0).is_none());
    assert_eq!(compiled.find_at("set (", 0).unwrap().as_str(), "set (");
}

#[test]
fn test_optional_part_may_be_absent() {
    let fragment = sequence(&[
        Fragment::raw("a"),
        optional(&capture("mid", &Fragment::raw("b")).unwrap()),
        Fragment::raw("c"),
    ])
    .unwrap();
    let compiled = pattern(&fragment);

    let found = compiled.find_at("a c", 0).unwrap();
    assert!(!found.group("mid").unwrap().participated());
    let found = compiled.find_at("abc", 0).unwrap();
    assert_eq!(found.group("mid").unwrap().text(), Some("b"));
}

// =============================================================================
// Literal-Aware Scanning
// =============================================================================

fn assignment() -> Pattern {
    let fragment = sequence(&[
        Fragment::raw("x"),
        escape_literal("="),
        capture("expr", &up_to(';')).unwrap(),
        escape_literal(";"),
    ])
    .unwrap();
    pattern(&fragment)
}

#[test]
fn test_up_to_skips_terminator_in_string() {
    let compiled = assignment();
    let found = compiled.find_at(r#"x = "a;b";"#, 0).unwrap();
    assert_eq!(found.as_str(), r#"x = "a;b";"#);
    assert_eq!(found.group("expr").unwrap().value(), r#""a;b""#);
}

#[test]
fn test_up_to_skips_terminator_in_single_quotes() {
    let compiled = assignment();
    let found = compiled.find_at(r"x = 'it\'s;ok';", 0).unwrap();
    assert_eq!(found.group("expr").unwrap().value(), r"'it\'s;ok'");
}

#[test]
fn test_up_to_skips_terminator_in_regexp_literal() {
    let compiled = assignment();
    let found = compiled.find_at("x = /a;b/g; rest", 0).unwrap();
    assert_eq!(found.as_str(), "x = /a;b/g;");
}

#[test]
fn test_up_to_treats_division_as_text() {
    let compiled = assignment();
    let found = compiled.find_at("x = a / b; y = c / d;", 0).unwrap();
    assert_eq!(found.as_str(), "x = a / b;");
}

#[test]
fn test_up_to_treats_unspaced_division_as_text() {
    let compiled = assignment();
    let found = compiled.find_at("x = a/2; x = b/3;", 0).unwrap();
    assert_eq!(found.as_str(), "x = a/2;");

    let found = compiled.find_at("x = w/2; // half\nx = 1;", 0).unwrap();
    assert_eq!(found.as_str(), "x = w/2;");
}

#[test]
fn test_up_to_skips_line_comment() {
    let compiled = assignment();
    let found = compiled.find_at("x = 1 // a; b\n; rest", 0).unwrap();
    assert_eq!(found.group("expr").unwrap().value(), "1 // a; b\n");
}

#[test]
fn test_up_to_stops_on_unterminated_literal() {
    let compiled = assignment();
    let found = compiled.find_at(r#"x = "abc; y"#, 0).unwrap();
    assert_eq!(found.as_str(), r#"x = "abc;"#);
}

// =============================================================================
// Productions
// =============================================================================

#[test]
fn test_every_named_production_compiles() {
    for name in productions::NAMES {
        let fragment = productions::by_name(name).unwrap().unwrap();
        Pattern::compile(name, &fragment).unwrap();
    }
    assert!(productions::by_name("class_declaration").is_none());
}

#[test]
fn test_variable_declaration_groups() {
    let compiled = pattern(&productions::variable_declaration().unwrap());
    let found = compiled.find_at(r#"private static var label:String = "a;b";"#, 0).unwrap();

    assert_eq!(found.group("constorvar").unwrap().value(), "var");
    assert_eq!(found.group("identifier").unwrap().value(), "label");
    assert_eq!(found.group("type").unwrap().value(), "String");
    assert_eq!(found.group("expr").unwrap().value().trim(), r#""a;b""#);
    assert_eq!(found.group("semicolon").unwrap().value(), ";");
}

#[test]
fn test_variable_declaration_needs_modifiers() {
    let compiled = pattern(&productions::variable_declaration().unwrap());
    assert!(compiled.find_at("var local:int = 1;", 0).is_none());
}

#[test]
fn test_keywords_need_word_boundaries() {
    let compiled = pattern(&productions::variable_declaration().unwrap());
    assert!(compiled.find_at("publicvar x;", 0).is_none());
    assert!(compiled.find_at("public variable;", 0).is_none());
}
