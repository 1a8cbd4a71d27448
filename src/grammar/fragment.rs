//! Regex fragment composition
//!
//! A [`Fragment`] is a piece of regex source plus the capture names it
//! declares. Builders never mutate their inputs: each call copies the parts
//! into a new fragment, so fragments can be shared freely once built.
//!
//! Grouping helpers only emit non-capturing groups (`(?:...)`). Named groups
//! come exclusively from [`capture`], which keeps group names stable no matter
//! how a fragment is nested.
//!
//! # Examples
//!
//! ```
//! use rewrex::grammar::{Fragment, capture, escape_literal, sequence};
//!
//! let assignment = sequence(&[
//!     capture("name", &Fragment::raw("[a-z]+")).unwrap(),
//!     escape_literal("="),
//!     capture("value", &Fragment::raw("[0-9]+")).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(assignment.as_str(), r"(?P<name>[a-z]+)\s*=\s*(?P<value>[0-9]+)");
//! ```

use std::fmt;

use super::tokens::{LINE_COMMENT, REGEXP_LITERAL, STRING_LITERAL, WS};
use super::{GrammarError, is_valid_group_name};

/// A composable piece of regex source
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    /// Regex source text
    source: String,
    /// Capture names declared inside `source`, in order of appearance
    captures: Vec<String>,
}

impl Fragment {
    /// Wrap raw regex source
    ///
    /// Raw fragments are meant for token-level patterns and must not declare
    /// named groups; use [`capture`] for those.
    #[must_use]
    pub fn raw(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            captures: Vec::new(),
        }
    }

    /// The regex source text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Capture names declared by this fragment, in order of appearance
    #[must_use]
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    /// Check whether this fragment declares a capture called `name`
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.captures.iter().any(|c| c == name)
    }

    fn wrapped(&self, prefix: &str, suffix: &str) -> Self {
        Self {
            source: format!("{prefix}{}{suffix}", self.source),
            captures: self.captures.clone(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for Fragment {
    fn from(source: &str) -> Self {
        Self::raw(source)
    }
}

/// Join `parts` with `separator`, merging their capture names
fn join(
    parts: &[Fragment],
    separator: &str,
    builder: &'static str,
) -> Result<Fragment, GrammarError> {
    let (first, rest) = parts.split_first().ok_or(GrammarError::EmptyInput { builder })?;

    let mut joined = first.clone();
    for part in rest {
        for name in &part.captures {
            if joined.declares(name) {
                return Err(GrammarError::DuplicateCapture(name.clone()));
            }
            joined.captures.push(name.clone());
        }
        joined.source.push_str(separator);
        joined.source.push_str(&part.source);
    }
    Ok(joined)
}

/// Sequence parts, allowing whitespace between each pair
///
/// A single part is returned unchanged.
pub fn sequence(parts: &[Fragment]) -> Result<Fragment, GrammarError> {
    join(parts, WS, "sequence")
}

/// Alternate between parts
///
/// A single part is returned unchanged. Two or more parts are wrapped in a
/// non-capturing group so the alternation cannot leak into an enclosing
/// sequence.
pub fn alternate(parts: &[Fragment]) -> Result<Fragment, GrammarError> {
    if let [single] = parts {
        return Ok(single.clone());
    }
    join(parts, "|", "alternate").map(|joined| group(&joined))
}

/// Make a part optional
#[must_use]
pub fn optional(part: &Fragment) -> Fragment {
    part.wrapped("(?:", ")?")
}

/// Repeat a part, with optional whitespace after each repetition
///
/// `at_least_one` selects between `+` and `*` repetition.
#[must_use]
pub fn repeat(part: &Fragment, at_least_one: bool) -> Fragment {
    let quantifier = if at_least_one { "+" } else { "*" };
    part.wrapped("(?:(?:", &format!("){WS}){quantifier}"))
}

/// Group a part for precedence without capturing it
#[must_use]
pub fn group(part: &Fragment) -> Fragment {
    part.wrapped("(?:", ")")
}

/// Give a part a name
///
/// Fails if `name` is not a valid group name or `part` already declares it.
pub fn capture(name: &str, part: &Fragment) -> Result<Fragment, GrammarError> {
    if !is_valid_group_name(name) {
        return Err(GrammarError::InvalidCaptureName(name.to_string()));
    }
    if part.declares(name) {
        return Err(GrammarError::DuplicateCapture(name.to_string()));
    }

    let mut captures = Vec::with_capacity(part.captures.len() + 1);
    captures.push(name.to_string());
    captures.extend(part.captures.iter().cloned());

    Ok(Fragment {
        source: format!("(?P<{name}>{})", part.source),
        captures,
    })
}

/// Escape `s` so it only matches itself
#[must_use]
pub fn escape_literal(s: &str) -> Fragment {
    Fragment::raw(regex::escape(s))
}

/// Scan forward up to (not including) an unescaped `terminator`
///
/// String literals, regexp literals and line comments are consumed whole, so
/// a terminator inside one of them does not end the scan.
#[must_use]
pub fn up_to(terminator: char) -> Fragment {
    scan_until(&[terminator])
}

/// Like [`up_to`], stopping at whichever of `terminators` comes first
///
/// Fails if `terminators` is empty.
pub fn up_to_any(terminators: &[char]) -> Result<Fragment, GrammarError> {
    if terminators.is_empty() {
        return Err(GrammarError::EmptyInput { builder: "up_to_any" });
    }
    Ok(scan_until(terminators))
}

fn scan_until(terminators: &[char]) -> Fragment {
    let class: String = terminators.iter().map(|c| regex::escape(&c.to_string())).collect();
    let token =
        Fragment::raw(format!("{STRING_LITERAL}|{LINE_COMMENT}|{REGEXP_LITERAL}|[^{class}]"));
    repeat(&token, false)
}
