//! Matches and their named sub-selections
//!
//! A [`Match`] borrows the buffer it was found in. Committing a replacement
//! needs the buffer mutably, so a match (and every [`SubSelection`] taken from
//! it) must be dropped before the commit: stale offsets cannot be read.

use regex::Captures;

use super::Pattern;
use super::span::Span;

/// One occurrence of a pattern in a buffer
#[derive(Debug)]
pub struct Match<'p, 'b> {
    pattern: &'p Pattern,
    captures: Captures<'b>,
}

impl<'p, 'b> Match<'p, 'b> {
    pub(crate) const fn new(pattern: &'p Pattern, captures: Captures<'b>) -> Self {
        Self { pattern, captures }
    }

    /// The pattern that produced this match
    #[must_use]
    pub const fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// Span of the match in the buffer
    #[must_use]
    pub fn span(&self) -> Span {
        self.captures.get_match().range().into()
    }

    /// The matched text
    #[must_use]
    pub fn as_str(&self) -> &'b str {
        self.captures.get_match().as_str()
    }

    /// The sub-selection for group `name`
    ///
    /// Returns `None` only if the pattern does not declare `name`; a declared
    /// group that did not take part in this match yields an absent selection.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<SubSelection<'_>> {
        let declared = self.pattern.groups().iter().find(|g| *g == name)?;
        Some(self.selection(declared))
    }

    /// All declared groups, in pattern order
    #[must_use]
    pub fn groups(&self) -> Groups<'_> {
        Groups {
            selections: self.pattern.groups().iter().map(|name| self.selection(name)).collect(),
        }
    }

    fn selection<'a>(&'a self, name: &'a str) -> SubSelection<'a> {
        let outer = self.span();
        let found = self.captures.name(name);
        let span = found.map(|m| Span::from(m.range()));
        if let Some(inner) = span {
            debug_assert!(outer.contains(&inner), "group {name} escapes its match");
        }

        SubSelection {
            name,
            span: span.map(|inner| inner.relative_to(&outer)),
            text: found.map(|m| m.as_str()),
        }
    }
}

/// A named span inside a [`Match`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubSelection<'a> {
    name: &'a str,
    /// Span relative to the start of the parent match
    span: Option<Span>,
    text: Option<&'a str>,
}

impl<'a> SubSelection<'a> {
    /// Group name
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Captured text, or `""` when the group did not participate
    #[must_use]
    pub fn value(&self) -> &'a str {
        self.text.unwrap_or("")
    }

    /// Captured text, `None` when the group did not participate
    #[must_use]
    pub const fn text(&self) -> Option<&'a str> {
        self.text
    }

    /// Whether the group took part in the match
    ///
    /// A group can participate and still capture the empty string.
    #[must_use]
    pub const fn participated(&self) -> bool {
        self.text.is_some()
    }

    /// Span relative to the start of the parent match
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        self.span
    }
}

/// Every declared group of a match, in pattern order
#[derive(Debug, Clone, Default)]
pub struct Groups<'a> {
    selections: Vec<SubSelection<'a>>,
}

impl<'a> Groups<'a> {
    /// Look up a group by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SubSelection<'a>> {
        self.selections.iter().find(|s| s.name == name)
    }

    /// Iterate over the groups in pattern order
    pub fn iter(&self) -> impl Iterator<Item = &SubSelection<'a>> {
        self.selections.iter()
    }

    /// Number of declared groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Check if the pattern declares no groups
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
