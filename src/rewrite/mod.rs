//! Match/rewrite engine
//!
//! Compiles grammar fragments into [`Pattern`]s, locates [`Match`]es in a
//! buffer, applies per-group [`RuleSet`]s and renders [`Template`]s back into
//! the buffer.
//!
//! # Examples
//!
//! ```
//! use rewrex::grammar::{Fragment, capture, escape_literal, sequence};
//! use rewrex::rewrite::{Pattern, Rewrite};
//!
//! let fragment = sequence(&[
//!     capture("name", &Fragment::raw("[a-z]+")).unwrap(),
//!     escape_literal(":"),
//!     capture("type", &Fragment::raw("[A-Za-z]+")).unwrap(),
//! ])
//! .unwrap();
//! let pattern = Pattern::compile("typed", &fragment).unwrap();
//!
//! let rewrite = Rewrite::builder(pattern)
//!     .rule("type", |s| s.value().to_lowercase())
//!     .template("${type} ${name}")
//!     .build()
//!     .unwrap();
//!
//! let mut buffer = String::from("(a:Int, b:String)");
//! rewrite.apply(&mut buffer).unwrap();
//! assert_eq!(buffer, "(int a, string b)");
//! ```

pub mod engine;
mod pattern;
mod rules;
mod selection;
mod span;
mod template;

use thiserror::Error;

use crate::grammar::GrammarError;

pub use engine::{
    Matches, Rewrite, RewriteBuilder, apply_rules, commit, find_all, groups_of, render_template,
    rewrite_all,
};
pub use pattern::{DEFAULT_SIZE_LIMIT, Pattern};
pub use rules::{GroupValue, GroupValues, Rule, RuleSet};
pub use selection::{Groups, Match, SubSelection};
pub use span::Span;
pub use template::Template;

/// Errors raised during a rewrite pass
#[derive(Debug, Error)]
pub enum RewriteError {
    /// More matches than [`Limits::max_matches`] allows
    #[error("pattern {pattern} exceeded the limit of {limit} matches")]
    MatchLimit {
        /// Pattern name
        pattern: String,
        /// Configured limit
        limit: usize,
    },

    /// A template selector picked an index with no template
    #[error("pattern {pattern}: selector chose template {index} of {templates}")]
    NoTemplate {
        /// Pattern name
        pattern: String,
        /// Index returned by the selector
        index: usize,
        /// Number of registered templates
        templates: usize,
    },

    /// A production could not be built
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Bounds for untrusted input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum replacements per pass; unbounded when `None`
    pub max_matches: Option<usize>,
    /// Maximum compiled size of a pattern, in bytes
    pub regex_size_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_matches: None,
            regex_size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}
