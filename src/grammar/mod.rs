//! Grammar construction
//!
//! Grammars are built from regex fragments:
//! - [`fragment`] - the builder functions (`sequence`, `alternate`, `capture`, ...)
//! - [`tokens`] - primitive fragments shared by every production
//! - [`productions`] - declarations and parameter lists assembled from tokens

pub mod fragment;
pub mod productions;
pub mod tokens;

use thiserror::Error;

pub use fragment::{
    Fragment, alternate, capture, escape_literal, group, optional, repeat, sequence, up_to,
    up_to_any,
};

/// Errors raised while building fragments, patterns, rules or templates
///
/// These are configuration errors: they surface before any buffer is scanned
/// and make the offending production unusable.
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A builder that needs at least one part was given none
    #[error("{builder} requires at least one part")]
    EmptyInput {
        /// Name of the builder that was called
        builder: &'static str,
    },

    /// The same capture name was declared twice within one pattern
    #[error("duplicate capture group name: {0}")]
    DuplicateCapture(String),

    /// Capture name is not a valid group identifier
    #[error("invalid capture group name: {0:?}")]
    InvalidCaptureName(String),

    /// Template references a group the pattern does not declare
    #[error("template placeholder ${{{name}}} does not name a group of pattern {pattern}")]
    UnresolvedPlaceholder {
        /// Placeholder name
        name: String,
        /// Pattern the template was checked against
        pattern: String,
    },

    /// Template contains a `${` without a closing `}`
    #[error("unterminated placeholder in template: {0:?}")]
    UnterminatedPlaceholder(String),

    /// Rule registered for a group the pattern does not declare
    #[error("rule targets unknown group {name} of pattern {pattern}")]
    UnknownGroup {
        /// Group name the rule was registered under
        name: String,
        /// Pattern the rule set was checked against
        pattern: String,
    },

    /// Composed fragment was rejected by the regex compiler
    #[error("pattern {name} failed to compile: {source}")]
    InvalidPattern {
        /// Pattern name
        name: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// Check that `name` can be used as a capture group name
///
/// Names follow identifier syntax: a letter or underscore, then letters,
/// digits or underscores.
#[must_use]
pub fn is_valid_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
