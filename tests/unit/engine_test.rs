//! Tests for matching, group selection and rewriting

use rewrex::grammar::{Fragment, capture, escape_literal, optional, sequence};
use rewrex::rewrite::{
    Limits, Pattern, Rewrite, RewriteError, RuleSet, Span, apply_rules, commit, find_all,
    groups_of, rewrite_all,
};

/// `ident=digits;`
fn declaration() -> Pattern {
    let fragment = sequence(&[
        capture("ident", &Fragment::raw("[a-z]+")).unwrap(),
        escape_literal("="),
        capture("digits", &Fragment::raw("[0-9]+")).unwrap(),
        escape_literal(";"),
    ])
    .unwrap();
    Pattern::compile("declaration", &fragment).unwrap()
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn test_find_all_left_to_right_non_overlapping() {
    let pattern = declaration();
    let matches: Vec<_> = find_all("a=1;b=2;", &pattern).collect();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].span(), Span::new(0, 4));
    assert_eq!(matches[1].span(), Span::new(4, 8));
    assert!(matches[1].span().start >= matches[0].span().end);
    assert_eq!(matches[1].group("ident").unwrap().value(), "b");
}

#[test]
fn test_find_all_is_restartable_by_calling_again() {
    let pattern = declaration();
    let buffer = "x=10; junk y=20;";
    assert_eq!(find_all(buffer, &pattern).count(), 2);
    assert_eq!(pattern.find_all(buffer).count(), 2);
}

#[test]
fn test_groups_distinguish_empty_from_absent() {
    let fragment = sequence(&[
        capture("lead", &Fragment::raw("x*")).unwrap(),
        optional(&capture("tail", &Fragment::raw("y")).unwrap()),
        escape_literal("z"),
    ])
    .unwrap();
    let pattern = Pattern::compile("participation", &fragment).unwrap();
    let found = pattern.find_at("z", 0).unwrap();
    let groups = groups_of(&found);

    assert_eq!(groups.len(), 2);
    let lead = groups.get("lead").unwrap();
    assert!(lead.participated());
    assert_eq!(lead.text(), Some(""));
    let tail = groups.get("tail").unwrap();
    assert!(!tail.participated());
    assert_eq!(tail.text(), None);
    assert_eq!(tail.value(), "");
}

#[test]
fn test_group_spans_are_relative_to_match() {
    let pattern = declaration();
    let found = pattern.find_at("    abc=42;", 0).unwrap();
    assert_eq!(found.span(), Span::new(4, 11));
    assert_eq!(found.group("digits").unwrap().span(), Some(Span::new(4, 6)));
    assert!(found.group("undeclared").is_none());
}

// =============================================================================
// Rules and templates
// =============================================================================

#[test]
fn test_rule_sees_non_participating_group() {
    let fragment = sequence(&[
        capture("name", &Fragment::raw("[a-z]+")).unwrap(),
        optional(&capture("kind", &Fragment::raw(":[a-z]+")).unwrap()),
    ])
    .unwrap();
    let pattern = Pattern::compile("typed", &fragment).unwrap();
    let rules = RuleSet::new().with("kind", |s| {
        s.text().map_or_else(|| "any".to_string(), |kind| kind.trim_start_matches(':').to_string())
    });

    let found = pattern.find_at("value", 0).unwrap();
    let values = apply_rules(&found, &rules);
    assert_eq!(values.get("kind"), Some("any"));
    assert_eq!(values.original("kind"), None);
    assert!(!values.participated("kind"));
}

#[test]
fn test_rewrite_reorders_groups() {
    let rewrite = Rewrite::builder(declaration())
        .rule("ident", |s| s.value().to_uppercase())
        .template("const ${ident}: u32 = ${digits};")
        .build()
        .unwrap();
    let mut buffer = String::from("a=1;\nb=22;\n");
    assert_eq!(rewrite.apply(&mut buffer).unwrap(), 2);
    assert_eq!(buffer, "const A: u32 = 1;\nconst B: u32 = 22;\n");
}

#[test]
fn test_rewritten_text_is_not_rescanned() {
    let rewrite =
        Rewrite::builder(declaration()).template("${ident}=${digits};${ident}=0;").build().unwrap();
    let mut buffer = String::from("a=1;b=2;");
    assert_eq!(rewrite.apply(&mut buffer).unwrap(), 2);
    assert_eq!(buffer, "a=1;a=0;b=2;b=0;");
}

#[test]
fn test_rewrite_with_no_matches_leaves_buffer() {
    let rewrite = Rewrite::builder(declaration()).template("${ident}").build().unwrap();
    let mut buffer = String::from("nothing to see");
    assert_eq!(rewrite.apply(&mut buffer).unwrap(), 0);
    assert_eq!(buffer, "nothing to see");
}

#[test]
fn test_match_limit_is_reported() {
    let rewrite = Rewrite::builder(declaration()).template("${ident}").build().unwrap();
    let limits = Limits {
        max_matches: Some(2),
        ..Limits::default()
    };
    let mut buffer = String::from("a=1;b=2;c=3;");
    let err = rewrite.apply_with_limits(&mut buffer, &limits).unwrap_err();
    assert!(matches!(
        err,
        RewriteError::MatchLimit { limit: 2, ref pattern } if pattern == "declaration"
    ));
    assert_eq!(buffer, "a=1;b=2;c=3;");
}

#[test]
fn test_rewrite_all_with_closure() {
    let pattern = declaration();
    let mut buffer = String::from("a=1;b=2;");
    let count = rewrite_all(&mut buffer, &pattern, &Limits::default(), |found| {
        Ok(format!("[{}]", found.as_str()))
    })
    .unwrap();
    assert_eq!(count, 2);
    assert_eq!(buffer, "[a=1;][b=2;]");
}

// =============================================================================
// Commit
// =============================================================================

#[test]
fn test_commit_handles_multibyte_text() {
    let mut buffer = String::from("é=1; ü");
    let inserted = commit(&mut buffer, Span::new(0, 5), "ø");
    assert_eq!(buffer, "ø ü");
    assert_eq!(inserted, Span::new(0, 2));
}

#[test]
#[should_panic(expected = "stale span")]
fn test_commit_rejects_span_off_char_boundary() {
    let mut buffer = String::from("é=1;");
    commit(&mut buffer, Span::new(1, 3), "x");
}
