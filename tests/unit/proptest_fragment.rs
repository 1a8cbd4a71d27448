//! Property-based tests for the fragment builder
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use rewrex::grammar::{Fragment, alternate, escape_literal, sequence};
use rewrex::rewrite::Pattern;

fn fragment_strategy() -> impl Strategy<Value = Fragment> {
    "[a-z0-9.*+?()|]{1,12}".prop_map(|s| escape_literal(&s))
}

proptest! {
    /// An escaped literal matches exactly itself
    #[test]
    fn escaped_literal_matches_itself(s in "\\PC{1,24}") {
        let pattern = Pattern::compile("literal", &escape_literal(&s)).unwrap();
        let found = pattern.find_at(&s, 0);
        prop_assert!(found.is_some());
        prop_assert_eq!(found.unwrap().as_str(), s.as_str());
    }

    /// Metacharacters in an escaped literal are not interpreted
    #[test]
    fn escaped_metacharacters_are_literal(
        prefix in "[a-z]{1,5}",
        meta in prop::sample::select(vec![".", "*", "+", "?", "(", ")", "[", "]", "|", "^", "$"]),
    ) {
        let literal = format!("{prefix}{meta}");
        let pattern = Pattern::compile("literal", &escape_literal(&literal)).unwrap();

        // A different character where the metacharacter was
        let other = format!("{prefix}x");
        prop_assert!(pattern.find_at(&other, 0).is_none());
        prop_assert!(pattern.find_at(&literal, 0).is_some());
    }

    /// Single-element sequence and alternation return the element unchanged
    #[test]
    fn single_element_composition_is_stable(fragment in fragment_strategy()) {
        let parts = [fragment.clone()];
        prop_assert_eq!(sequence(&parts).unwrap(), fragment.clone());
        prop_assert_eq!(alternate(&parts).unwrap(), fragment);
    }

    /// A sequence of literals matches their whitespace-separated concatenation
    #[test]
    fn sequence_of_literals_matches_joined_text(
        words in prop::collection::vec("[a-z(]{1,6}", 1..5),
    ) {
        let parts: Vec<Fragment> = words.iter().map(|w| escape_literal(w)).collect();
        let pattern = Pattern::compile("words", &sequence(&parts).unwrap()).unwrap();
        let text = words.join(" ");
        prop_assert_eq!(pattern.find_at(&text, 0).map(|m| m.as_str().to_string()), Some(text));
    }
}
