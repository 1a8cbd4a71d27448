//! Compiled patterns

use regex::{CaptureMatches, Regex, RegexBuilder};

use super::engine::{self, Matches};
use super::selection::Match;
use crate::grammar::{Fragment, GrammarError};

/// Default cap on the compiled size of a pattern (10 MiB, the regex default)
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A fragment compiled for matching against a buffer
///
/// Patterns are immutable and cheap to clone; one pattern can serve any
/// number of rewrite passes, on any thread.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Name used in diagnostics
    name: String,
    /// Compiled regex
    regex: Regex,
    /// Declared group names, in order of appearance
    groups: Vec<String>,
}

impl Pattern {
    /// Compile a fragment with the default size limit
    pub fn compile(name: &str, fragment: &Fragment) -> Result<Self, GrammarError> {
        Self::compile_with_limit(name, fragment, DEFAULT_SIZE_LIMIT)
    }

    /// Compile a fragment, rejecting patterns larger than `size_limit` bytes
    pub fn compile_with_limit(
        name: &str,
        fragment: &Fragment,
        size_limit: usize,
    ) -> Result<Self, GrammarError> {
        let regex = RegexBuilder::new(fragment.as_str())
            .size_limit(size_limit)
            .build()
            .map_err(|source| GrammarError::InvalidPattern {
                name: name.to_string(),
                source,
            })?;

        let groups = regex.capture_names().flatten().map(str::to_string).collect();

        Ok(Self {
            name: name.to_string(),
            regex,
            groups,
        })
    }

    /// Pattern name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Regex source the pattern was compiled from
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Declared group names, in order of appearance
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Check whether the pattern declares a group called `name`
    #[must_use]
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g == name)
    }

    /// Lazily enumerate matches in `buffer`, left to right
    #[must_use]
    pub fn find_all<'p, 'b>(&'p self, buffer: &'b str) -> Matches<'p, 'b> {
        engine::find_all(buffer, self)
    }

    /// First match starting at or after byte offset `start`
    #[must_use]
    pub fn find_at<'p, 'b>(&'p self, buffer: &'b str, start: usize) -> Option<Match<'p, 'b>> {
        self.regex.captures_at(buffer, start).map(|captures| Match::new(self, captures))
    }

    pub(crate) fn captures_iter<'p, 'b>(&'p self, buffer: &'b str) -> CaptureMatches<'p, 'b> {
        self.regex.captures_iter(buffer)
    }
}
